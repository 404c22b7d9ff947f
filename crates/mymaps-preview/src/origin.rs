//! Pass-through to the upstream origin serving the real site.
//!
//! Requests the preview middleware does not answer land here and are relayed
//! unchanged: method, path, query, end-to-end headers and a streamed body.
//! Upstream redirects are returned to the client rather than followed.

use axum::body::{Body, HttpBody};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, Uri, header};
use axum::response::Response;
use reqwest::{Client, Url, redirect};

use crate::config::Config;
use crate::error::OriginError;

/// Hop-by-hop headers (RFC 9110 §7.6.1) that must not be relayed.
const HOP_BY_HOP: &[HeaderName] = &[
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Upstream origin client.
#[derive(Clone, Debug)]
pub struct Upstream {
    client: Client,
    base_url: Url,
}

impl Upstream {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.upstream_url)?;
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;

        tracing::info!(upstream = %base_url, "upstream origin configured");

        Ok(Self { client, base_url })
    }

    /// Upstream URL for an incoming request target.
    ///
    /// The incoming path is appended to the base path verbatim, never resolved
    /// as a relative reference, so the scheme and host always stay the
    /// upstream's.
    fn target(&self, uri: &Uri) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), uri.path());
        url.set_path(&path);
        url.set_query(uri.query());
        url
    }

    /// Base URL of the upstream origin.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Relay a request to the upstream origin and return its response verbatim.
pub async fn forward(
    State(upstream): State<Upstream>,
    request: Request,
) -> Result<Response, OriginError> {
    let (parts, body) = request.into_parts();
    let url = upstream.target(&parts.uri);

    // Bodiless requests stay bodiless instead of going out chunked.
    let body = if body.size_hint().exact() == Some(0) {
        reqwest::Body::from(Vec::new())
    } else {
        reqwest::Body::wrap_stream(body.into_data_stream())
    };

    let upstream_response = upstream
        .client
        .request(parts.method, url)
        .headers(strip_hop_by_hop(parts.headers, true))
        .body(body)
        .send()
        .await?;

    let status = upstream_response.status();
    let headers = strip_hop_by_hop(upstream_response.headers().clone(), false);

    let mut response = Response::new(Body::from_stream(upstream_response.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Remove hop-by-hop headers, plus any named in `Connection`. The `Host`
/// header is dropped from requests so the client sets the upstream host.
fn strip_hop_by_hop(mut headers: HeaderMap, is_request: bool) -> HeaderMap {
    let named: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in HOP_BY_HOP.iter().chain(named.iter()) {
        headers.remove(name);
    }
    headers.remove("keep-alive");
    if is_request {
        headers.remove(header::HOST);
    }
    headers
}
