//! HTML rendering for crawler previews.
//!
//! Each route has a renderer producing a complete document with Open Graph
//! and Twitter Card tags and a meta refresh to the live page.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation; every dynamic value is escaped.

pub mod components;
pub mod place;
pub mod post;
pub mod profile;

use maud::Markup;

use crate::config::Config;
use crate::resolve::ResolvedPreview;
use crate::route::PreviewRoute;

/// Render resolved preview data into a complete HTML page.
pub fn render_page(config: &Config, preview: &ResolvedPreview) -> Markup {
    let canonical = canonical_route(preview).canonical_url(&config.site_url);

    match preview {
        ResolvedPreview::Post { post, .. } => post::render(post, &canonical, config),
        ResolvedPreview::Profile { username, user } => {
            profile::render(user, username, &canonical, config)
        }
        ResolvedPreview::Place { place, .. } => place::render(place, &canonical, config),
    }
}

fn canonical_route(preview: &ResolvedPreview) -> PreviewRoute {
    match preview {
        ResolvedPreview::Post { id, .. } => PreviewRoute::Post { id: id.clone() },
        ResolvedPreview::Profile { username, .. } => PreviewRoute::Profile {
            username: username.clone(),
        },
        ResolvedPreview::Place { place_id, .. } => PreviewRoute::Place {
            place_id: place_id.clone(),
        },
    }
}
