//! Preview-eligible routes of the human-facing site.
//!
//! ```text
//! /post?id={postId}      single post
//! /user?u={username}     user profile
//! /place?id={placeId}    place page
//! ```
//!
//! Paths match exactly, with or without one trailing slash.

use axum::http::Uri;
use url::form_urlencoded;

/// A request the gateway can answer with a preview document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewRoute {
    Post { id: String },
    Profile { username: String },
    Place { place_id: String },
}

impl PreviewRoute {
    /// Match a request URI. Returns `None` for other paths and for eligible
    /// paths whose parameter is missing or empty.
    pub fn from_uri(uri: &Uri) -> Option<Self> {
        let query = uri.query().unwrap_or_default();

        match uri.path() {
            "/post" | "/post/" => query_param(query, "id").map(|id| Self::Post { id }),
            "/user" | "/user/" => {
                query_param(query, "u").map(|username| Self::Profile { username })
            }
            "/place" | "/place/" => {
                query_param(query, "id").map(|place_id| Self::Place { place_id })
            }
            _ => None,
        }
    }

    /// Human-facing URL for this route on `site_url`.
    pub fn canonical_url(&self, site_url: &str) -> String {
        let (path, key, value) = match self {
            Self::Post { id } => ("post", "id", id),
            Self::Profile { username } => ("user", "u", username),
            Self::Place { place_id } => ("place", "id", place_id),
        };
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(key, value)
            .finish();
        format!("{site_url}/{path}?{query}")
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Post { .. } => "post",
            Self::Profile { .. } => "profile",
            Self::Place { .. } => "place",
        }
    }
}

/// First value of `key`, decoded. Empty values count as absent.
fn query_param(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(uri: &str) -> Option<PreviewRoute> {
        PreviewRoute::from_uri(&uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn matches_post_route() {
        assert_eq!(
            route("/post?id=abc123"),
            Some(PreviewRoute::Post {
                id: "abc123".to_string()
            })
        );
        assert_eq!(
            route("/post/?id=abc123"),
            Some(PreviewRoute::Post {
                id: "abc123".to_string()
            })
        );
    }

    #[test]
    fn matches_user_and_place_routes() {
        assert_eq!(
            route("/user?u=alex"),
            Some(PreviewRoute::Profile {
                username: "alex".to_string()
            })
        );
        assert_eq!(
            route("/place/?id=ChIJN1t_tDeuEmsRUsoyG83frY4"),
            Some(PreviewRoute::Place {
                place_id: "ChIJN1t_tDeuEmsRUsoyG83frY4".to_string()
            })
        );
    }

    #[test]
    fn missing_or_empty_parameter_is_no_match() {
        assert_eq!(route("/post"), None);
        assert_eq!(route("/post?id="), None);
        assert_eq!(route("/user?id=alex"), None);
        assert_eq!(route("/place?u=x"), None);
    }

    #[test]
    fn other_paths_do_not_match() {
        assert_eq!(route("/"), None);
        assert_eq!(route("/posts?id=1"), None);
        assert_eq!(route("/post//?id=1"), None);
        assert_eq!(route("/post/edit?id=1"), None);
        assert_eq!(route("/explore"), None);
    }

    #[test]
    fn first_parameter_wins_and_is_decoded() {
        assert_eq!(
            route("/user?u=j%C3%BCrgen&u=other"),
            Some(PreviewRoute::Profile {
                username: "jürgen".to_string()
            })
        );
        assert_eq!(
            route("/post?ref=share&id=a+b"),
            Some(PreviewRoute::Post {
                id: "a b".to_string()
            })
        );
    }

    #[test]
    fn canonical_url_encodes_parameter() {
        let site = "https://maps.example";
        assert_eq!(
            PreviewRoute::Post {
                id: "abc".to_string()
            }
            .canonical_url(site),
            "https://maps.example/post?id=abc"
        );
        assert_eq!(
            PreviewRoute::Profile {
                username: "a&b".to_string()
            }
            .canonical_url(site),
            "https://maps.example/user?u=a%26b"
        );
        assert_eq!(
            PreviewRoute::Place {
                place_id: "p 1".to_string()
            }
            .canonical_url(site),
            "https://maps.example/place?id=p+1"
        );
    }
}
