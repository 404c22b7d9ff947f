//! User profile preview.

use maud::Markup;

use super::components::{
    DESCRIPTION_MAX_CHARS, OpenGraphData, page_shell, pick_image, truncate_chars,
};
use crate::config::Config;
use crate::model::UserPreview;

/// Render a profile preview page.
pub fn render(user: &UserPreview, username: &str, canonical: &str, config: &Config) -> Markup {
    let site_name = &config.site_name;
    let title = format!("{} (@{username}) | {site_name}", user.display_name);
    let description = truncate_chars(&description(user, site_name), DESCRIPTION_MAX_CHARS);

    let og = OpenGraphData {
        title: &title,
        description: &description,
        image: pick_image(Some(user.photo_url.as_str()), &config.default_image),
        url: canonical,
        og_type: "profile",
    };

    page_shell(&og, site_name)
}

/// The bio, or a sentence about how many places the user has shared.
pub fn description(user: &UserPreview, site_name: &str) -> String {
    if !user.bio.is_empty() {
        return user.bio.clone();
    }
    let plural = if user.post_count == 1 { "" } else { "s" };
    format!(
        "{} has shared {} restaurant{plural} on {site_name}",
        user.display_name, user.post_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(bio: &str, post_count: u64) -> UserPreview {
        UserPreview {
            display_name: "Alex Kim".to_string(),
            bio: bio.to_string(),
            post_count,
            photo_url: String::new(),
        }
    }

    #[test]
    fn bio_is_description() {
        assert_eq!(description(&user("Noodle hunter", 3), "MyMaps"), "Noodle hunter");
    }

    #[test]
    fn fallback_pluralizes() {
        assert_eq!(
            description(&user("", 0), "MyMaps"),
            "Alex Kim has shared 0 restaurants on MyMaps"
        );
        assert_eq!(
            description(&user("", 1), "MyMaps"),
            "Alex Kim has shared 1 restaurant on MyMaps"
        );
        assert_eq!(
            description(&user("", 27), "MyMaps"),
            "Alex Kim has shared 27 restaurants on MyMaps"
        );
    }
}
