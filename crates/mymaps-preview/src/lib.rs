//! MyMaps Preview - social link previews for a client-rendered site.
//!
//! MyMaps pages are rendered in the browser, so link-preview crawlers that
//! never run JavaScript see an empty shell. This gateway sits in front of the
//! site and answers those crawlers with a small static document carrying Open
//! Graph and Twitter Card tags, then redirects anything that renders it to the
//! live page. All other traffic is relayed to the upstream origin unchanged.
//!
//! # Architecture
//!
//! - **Crawler**: `User-Agent` match against known link-preview fetchers
//! - **Route**: `/post?id=`, `/user?u=`, `/place?id=` recognition
//! - **Resolve**: one Firestore read per preview (document fetch or query)
//! - **Render**: HTML with OG tags using maud (compile-time templates)
//! - **Origin**: pass-through relay to the site for everything else
//!
//! # Failure policy
//!
//! Previews are best-effort. A missing document, a non-public post or a store
//! outage all fall through to the origin; the gateway never answers a
//! preview-eligible request with an error of its own.
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Document ids are sent to the store as single escaped path segments
//! - Only public posts are ever described

pub mod config;
pub mod crawler;
pub mod error;
pub mod model;
pub mod origin;
pub mod render;
pub mod resolve;
pub mod route;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use origin::Upstream;
pub use routes::{router, with_social_preview};
pub use state::AppState;
