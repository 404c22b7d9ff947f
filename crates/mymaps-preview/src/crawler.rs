//! Link-preview crawler detection by `User-Agent`.

use std::sync::LazyLock;

use regex::Regex;

/// Social platforms and search engines whose fetchers read Open Graph tags
/// without running the client-side app.
static CRAWLER_UA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)facebookexternalhit|Facebot|Twitterbot|LinkedInBot|Slackbot|TelegramBot|WhatsApp|Discordbot|Googlebot|bingbot|Applebot|iMessageBot",
    )
    .expect("crawler pattern is valid")
});

/// Whether a request's `User-Agent` belongs to a known link-preview crawler.
/// A missing header is ordinary traffic.
pub fn is_crawler(user_agent: Option<&str>) -> bool {
    user_agent.is_some_and(|ua| CRAWLER_UA.is_match(ua))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_crawlers() {
        let agents = [
            "facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)",
            "Twitterbot/1.0",
            "LinkedInBot/1.0 (compatible; Mozilla/5.0; Apache-HttpClient +http://www.linkedin.com)",
            "Slackbot-LinkExpanding 1.0 (+https://api.slack.com/robots)",
            "TelegramBot (like TwitterBot)",
            "WhatsApp/2.23.20.0",
            "Mozilla/5.0 (compatible; Discordbot/2.0; +https://discordapp.com)",
            "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
            "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)",
            "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 (KHTML, like Gecko) Applebot/0.1",
        ];
        for ua in agents {
            assert!(is_crawler(Some(ua)), "expected crawler: {ua}");
        }
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_crawler(Some("TWITTERBOT/1.0")));
        assert!(is_crawler(Some("discordbot")));
    }

    #[test]
    fn browsers_are_not_crawlers() {
        let agents = [
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 Safari/604.1",
            "curl/8.5.0",
            "",
        ];
        for ua in agents {
            assert!(!is_crawler(Some(ua)), "expected ordinary traffic: {ua}");
        }
    }

    #[test]
    fn missing_user_agent_is_not_crawler() {
        assert!(!is_crawler(None));
    }
}
