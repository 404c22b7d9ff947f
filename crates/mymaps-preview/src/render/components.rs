//! Shared pieces of every preview document.

use maud::{DOCTYPE, Markup, html};

/// Longest description placed in OG/Twitter tags, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Separator between description parts.
pub const DESCRIPTION_SEPARATOR: &str = " · ";

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafafa;color:#1a1a2e;padding:1rem}
.error-page{max-width:480px;text-align:center}
.error-page h1{font-size:1.5rem;margin-bottom:.5rem}
@media(prefers-color-scheme:dark){
body{background:#0f0f17;color:#e0e0e8}
}
"#;

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    /// Page and OG title.
    pub title: &'a str,
    /// OG description, already truncated.
    pub description: &'a str,
    /// Absolute image URL.
    pub image: &'a str,
    /// Human-facing URL the crawler is redirected to.
    pub url: &'a str,
    /// OG type ("article", "profile", "website").
    pub og_type: &'a str,
}

/// Render the complete preview document.
///
/// Every interpolated value is escaped by maud. The meta refresh sends any
/// client that renders the page on to the live site.
pub fn page_shell(og: &OpenGraphData<'_>, site_name: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (og.title) }

                // Open Graph
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:image" content=(og.image);
                meta property="og:url" content=(og.url);
                meta property="og:type" content=(og.og_type);
                meta property="og:site_name" content=(site_name);

                // Twitter Card
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);
                meta name="twitter:image" content=(og.image);

                meta http-equiv="refresh" content={ "0;url=" (og.url) };
            }
            body {
                p {
                    "Redirecting to "
                    a href=(og.url) { (og.title) }
                    "..."
                }
            }
        }
    }
}

/// `"{name} — {city} | {site}"`, dropping the city part when empty.
pub fn place_title(place_name: &str, city: &str, site_name: &str) -> String {
    if city.is_empty() {
        format!("{place_name} | {site_name}")
    } else {
        format!("{place_name} — {city} | {site_name}")
    }
}

/// Join the non-empty parts with [`DESCRIPTION_SEPARATOR`], or `None` when
/// every part is empty.
pub fn join_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let parts: Vec<&str> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(DESCRIPTION_SEPARATOR))
    }
}

/// Keep at most `max_chars` characters. No ellipsis is appended.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}

/// First non-empty candidate image, else `default`.
pub fn pick_image<'a>(candidate: Option<&'a str>, default: &'a str) -> &'a str {
    candidate.filter(|url| !url.is_empty()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- truncate_chars() tests --

    #[test]
    fn truncate_shorter_than_max() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn truncate_exact_length() {
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn truncate_longer_than_max() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("⭐⭐⭐ 3/5", 2), "⭐⭐");
        assert_eq!(truncate_chars("café au lait", 4), "café");
    }

    #[test]
    fn truncate_long_description() {
        let long = "é".repeat(500);
        let result = truncate_chars(&long, DESCRIPTION_MAX_CHARS);
        assert_eq!(result.chars().count(), 200);
    }

    #[test]
    fn truncate_empty_and_zero() {
        assert_eq!(truncate_chars("", 10), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    // -- join_parts() tests --

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(
            join_parts(["a", "", "b"]),
            Some("a · b".to_string())
        );
    }

    #[test]
    fn join_all_empty_is_none() {
        assert_eq!(join_parts(["", ""]), None);
        assert_eq!(join_parts([]), None);
    }

    // -- place_title() tests --

    #[test]
    fn place_title_with_city() {
        assert_eq!(
            place_title("Joe's Pizza", "New York", "MyMaps"),
            "Joe's Pizza — New York | MyMaps"
        );
    }

    #[test]
    fn place_title_without_city() {
        assert_eq!(place_title("Joe's Pizza", "", "MyMaps"), "Joe's Pizza | MyMaps");
    }

    // -- pick_image() tests --

    #[test]
    fn pick_image_falls_back_to_default() {
        assert_eq!(pick_image(None, "d.png"), "d.png");
        assert_eq!(pick_image(Some(""), "d.png"), "d.png");
        assert_eq!(pick_image(Some("p.jpg"), "d.png"), "p.jpg");
    }

    // -- page_shell() tests --

    fn shell(title: &str, description: &str, url: &str) -> String {
        page_shell(
            &OpenGraphData {
                title,
                description,
                image: "https://maps.example/og-image.png",
                url,
                og_type: "website",
            },
            "MyMaps",
        )
        .into_string()
    }

    #[test]
    fn shell_contains_all_meta_tags() {
        let html = shell("T", "D", "https://maps.example/place?id=1");
        for needle in [
            "<!DOCTYPE html>",
            "<title>T</title>",
            r#"<meta property="og:title" content="T">"#,
            r#"<meta property="og:description" content="D">"#,
            r#"<meta property="og:image" content="https://maps.example/og-image.png">"#,
            r#"<meta property="og:url" content="https://maps.example/place?id=1">"#,
            r#"<meta property="og:type" content="website">"#,
            r#"<meta property="og:site_name" content="MyMaps">"#,
            r#"<meta name="twitter:card" content="summary_large_image">"#,
            r#"<meta name="twitter:title" content="T">"#,
            r#"<meta name="twitter:description" content="D">"#,
            r#"<meta name="twitter:image" content="https://maps.example/og-image.png">"#,
            r#"<meta http-equiv="refresh" content="0;url=https://maps.example/place?id=1">"#,
            r#"<a href="https://maps.example/place?id=1">T</a>"#,
        ] {
            assert!(html.contains(needle), "missing {needle} in {html}");
        }
    }

    #[test]
    fn shell_escapes_user_content() {
        let html = shell(
            r#"Tom & "Jerry""#,
            "<script>alert(1)</script>",
            "https://maps.example/user?u=a%26b",
        );
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
    }
}
