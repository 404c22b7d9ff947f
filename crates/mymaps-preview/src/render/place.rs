//! Place page preview.

use maud::Markup;

use super::components::{
    DESCRIPTION_MAX_CHARS, OpenGraphData, page_shell, pick_image, place_title, truncate_chars,
};
use crate::config::Config;
use crate::model::PlacePreview;

/// Render a place preview page.
pub fn render(place: &PlacePreview, canonical: &str, config: &Config) -> Markup {
    let site_name = &config.site_name;
    let title = place_title(&place.place_name, &place.city, site_name);
    let description = truncate_chars(
        &format!("See all posts about {} on {site_name}", place.place_name),
        DESCRIPTION_MAX_CHARS,
    );

    let og = OpenGraphData {
        title: &title,
        description: &description,
        image: pick_image(place.photo_urls.first().map(String::as_str), &config.default_image),
        url: canonical,
        og_type: "website",
    };

    page_shell(&og, site_name)
}
