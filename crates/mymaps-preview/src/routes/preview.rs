//! Social preview middleware.
//!
//! Sits in front of the whole site. Crawler requests for post, profile and
//! place pages get a synthesized Open Graph document; everything else, and
//! every lookup that does not produce data, continues down the chain untouched.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::crawler;
use crate::render;
use crate::resolve;
use crate::route::PreviewRoute;
use crate::state::AppState;
use crate::store::Lookup;

/// Answer crawler requests for previewable pages; pass everything else on.
///
/// Ordinary traffic costs a header check and nothing else: no store call is
/// made unless the request is a crawler `GET`/`HEAD` on an eligible route.
pub async fn social_preview(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return next.run(request).await;
    }

    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());

    if !crawler::is_crawler(user_agent) {
        return next.run(request).await;
    }

    let Some(route) = PreviewRoute::from_uri(request.uri()) else {
        return next.run(request).await;
    };

    match resolve::resolve(state.store.as_ref(), &route).await {
        Lookup::Found(preview) => {
            tracing::debug!(route = route.kind(), user_agent = ?user_agent, "serving social preview");
            let markup = render::render_page(&state.config, &preview);
            build_response(markup.into_string())
        }
        Lookup::Missing => {
            tracing::debug!(route = route.kind(), "nothing to preview, passing through");
            next.run(request).await
        }
        Lookup::Failed(err) => {
            if err.is_remote() {
                tracing::warn!(route = route.kind(), error = %err, "document store lookup failed");
            } else {
                tracing::error!(route = route.kind(), error = %err, "document store request could not be built");
            }
            next.run(request).await
        }
    }
}

/// Build an HTTP response with HTML content and security headers.
fn build_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    // Same URL, different body for browsers: caches must key on the agent.
    headers.insert(header::VARY, HeaderValue::from_static("User-Agent"));

    (StatusCode::OK, headers, html).into_response()
}
