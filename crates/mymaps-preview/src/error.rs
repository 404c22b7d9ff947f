//! Error types for the preview gateway.
//!
//! Store errors never reach a client: the preview middleware logs them and
//! hands the request to the upstream origin. Origin errors are rendered as a
//! small HTML page, since the origin serves a user-facing site.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Failure talking to the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The store answered with a body that is not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request itself could not be built (bad configuration or a bug).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl StoreError {
    /// Whether the failure originates on the remote side (store outage, bad
    /// payload) rather than in this process.
    pub fn is_remote(&self) -> bool {
        match self {
            Self::Transport(err) => !err.is_builder(),
            Self::Status(_) | Self::Decode(_) => true,
            Self::InvalidRequest(_) => false,
        }
    }
}

/// Failure forwarding a request to the upstream origin.
#[derive(Debug, thiserror::Error)]
pub enum OriginError {
    /// The upstream origin could not be reached.
    #[error("upstream unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
}

impl IntoResponse for OriginError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::Unavailable(err) => {
                tracing::error!(error = %err, "upstream request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Bad Gateway",
                    "The site is temporarily unavailable. Please try again later.",
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display_status() {
        let err = StoreError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "unexpected status 503 Service Unavailable");
    }

    #[test]
    fn store_error_display_invalid_request() {
        let err = StoreError::InvalidRequest("bad base url".to_string());
        assert_eq!(err.to_string(), "invalid request: bad base url");
    }

    #[test]
    fn status_and_decode_errors_are_remote() {
        assert!(StoreError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR).is_remote());

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(StoreError::Decode(decode).is_remote());
    }

    #[test]
    fn invalid_request_is_internal() {
        assert!(!StoreError::InvalidRequest("x".to_string()).is_remote());
    }
}
