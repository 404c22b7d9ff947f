//! Single post preview.

use maud::Markup;

use super::components::{
    DESCRIPTION_MAX_CHARS, OpenGraphData, join_parts, page_shell, pick_image, place_title,
    truncate_chars,
};
use crate::config::Config;
use crate::model::PostPreview;

/// Render a post preview page.
pub fn render(post: &PostPreview, canonical: &str, config: &Config) -> Markup {
    let title = place_title(&post.place_name, &post.city, &config.site_name);
    let description = truncate_chars(&description(post, &config.site_name), DESCRIPTION_MAX_CHARS);

    let og = OpenGraphData {
        title: &title,
        description: &description,
        image: pick_image(post.photo_urls.first().map(String::as_str), &config.default_image),
        url: canonical,
        og_type: "article",
    };

    page_shell(&og, &config.site_name)
}

/// Rating, caption and author, in that order, before truncation.
pub fn description(post: &PostPreview, site_name: &str) -> String {
    let rating = if post.rating > 0 {
        format!("{} {}/5", "⭐".repeat(usize::from(post.rating)), post.rating)
    } else {
        String::new()
    };
    let author = if post.author_name.is_empty() {
        String::new()
    } else {
        format!("Shared by {}", post.author_name)
    };

    join_parts([rating.as_str(), post.caption.as_str(), author.as_str()])
        .unwrap_or_else(|| format!("Check out {} on {site_name}", post.place_name))
}
