//! Route definitions for the preview gateway.
//!
//! ## Routes
//!
//! - `GET /__preview/health` - Gateway health check (JSON)
//! - everything else - relayed to the upstream origin
//!
//! The social preview middleware wraps the whole router, so crawler requests
//! for `/post`, `/user` and `/place` can be answered before reaching the origin.

mod health;
mod preview;

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::origin::{self, Upstream};
use crate::state::AppState;

pub use self::preview::social_preview;

/// Health endpoint path, namespaced to stay clear of the site's own routes.
pub const HEALTH_PATH: &str = "/__preview/health";

/// Build the complete gateway router.
pub fn router(state: AppState, upstream: Upstream) -> Router {
    let app = Router::new()
        .route(HEALTH_PATH, get(health::health_check))
        .fallback(origin::forward)
        .with_state(upstream);

    with_social_preview(app, state)
}

/// Put the social preview middleware in front of any router.
pub fn with_social_preview(app: Router, state: AppState) -> Router {
    app.layer(middleware::from_fn_with_state(state, social_preview))
}
