//! Property-link recognition rules
//!
//! Property ids arrive in several equivalent encodings: the custom scheme in
//! path or query form, the canonical web path, and the static redirect pages
//! the stores fall back to while universal-link verification lags behind a
//! release. Each encoding is one [`PropertyRule`]: a predicate over the raw
//! string plus an extractor for the id. The classifier walks
//! [`PropertyRule::ORDERED`] and takes the first rule that both matches and
//! yields a non-empty id, so a rule that matches but cannot extract falls
//! through to the next one.
//!
//! Matching is containment-based: links often arrive wrapped in surrounding
//! text (messenger previews, QR payloads), so a rule matches anywhere in the
//! input and extraction starts at the matched prefix.

use url::Url;

use crate::config::DeepLinkConfig;

/// One recognized property-link shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRule {
    /// Custom scheme, path form: `hearth://property/<id>`
    SchemePath,
    /// Custom scheme, query form: `hearth://property?id=<id>`
    SchemeQuery,
    /// Canonical web path: `https://hearth.homes/property/<id>`
    WebPath,
    /// Landing and redirect pages carrying `?id=<id>`: the canonical
    /// `property.html` plus the two static-mirror pages
    LandingPage,
}

impl PropertyRule {
    /// All rules, in extraction priority order
    pub const ORDERED: [PropertyRule; 4] = [
        PropertyRule::SchemePath,
        PropertyRule::SchemeQuery,
        PropertyRule::WebPath,
        PropertyRule::LandingPage,
    ];

    /// Does `raw` qualify for this rule?
    pub fn matches(&self, config: &DeepLinkConfig, raw: &str) -> bool {
        match self {
            PropertyRule::SchemePath => {
                raw.contains(&format!("{}/", config.scheme_property_prefix()))
            }
            PropertyRule::SchemeQuery => {
                raw.contains(&format!("{}?", config.scheme_property_prefix()))
                    || (raw.contains(&config.scheme_property_prefix()) && raw.contains("?id="))
            }
            PropertyRule::WebPath => raw.contains(&config.web_property_prefix()),
            PropertyRule::LandingPage => {
                raw.contains(&config.web_landing_page())
                    || raw.contains(&config.mirror_property_page())
                    || raw.contains(&config.mirror_handler_page())
            }
        }
    }

    /// Extract the property id, or `None` if this rule cannot produce one
    pub fn extract(&self, config: &DeepLinkConfig, raw: &str) -> Option<String> {
        match self {
            PropertyRule::SchemePath => {
                let marker = format!("{}/", config.scheme_property_prefix());
                let candidate = tail_from(raw, &marker)?;
                match Url::parse(candidate) {
                    Ok(url) => last_path_segment(&url),
                    // Not URL-parseable; split on the literal marker instead
                    Err(_) => manual_remainder(raw, &marker),
                }
            }
            PropertyRule::SchemeQuery => {
                let candidate = tail_from(raw, &config.scheme_property_prefix())?;
                match Url::parse(candidate) {
                    Ok(url) => query_param(&url, "id"),
                    Err(_) => manual_remainder(raw, "?id="),
                }
            }
            PropertyRule::WebPath => {
                let candidate = tail_from(raw, &config.web_property_prefix())?;
                segment_after_property(candidate)
            }
            PropertyRule::LandingPage => {
                let pages = [
                    config.web_landing_page(),
                    config.mirror_property_page(),
                    config.mirror_handler_page(),
                ];
                let page = pages.iter().find(|p| raw.contains(p.as_str()))?;
                let candidate = tail_from(raw, page)?;
                query_param(&Url::parse(candidate).ok()?, "id")
            }
        }
    }
}

/// Slice of `raw` starting at the first occurrence of `marker`
fn tail_from<'a>(raw: &'a str, marker: &str) -> Option<&'a str> {
    raw.find(marker).map(|i| &raw[i..])
}

/// Last non-empty path segment of a parsed URL
fn last_path_segment(url: &Url) -> Option<String> {
    url.path()
        .split('/')
        .rev()
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Non-empty value of `key` in the URL's query
fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Everything after the first occurrence of `marker`, trimmed
///
/// Fallback for inputs the URL parser rejects outright.
fn manual_remainder(raw: &str, marker: &str) -> Option<String> {
    let (_, remainder) = raw.split_once(marker)?;
    let id = remainder.trim().trim_end_matches('/');
    (!id.is_empty()).then(|| id.to_string())
}

/// Split a web URL's path on `/`, locate the `property` segment, and take
/// the one after it
fn segment_after_property(url_text: &str) -> Option<String> {
    let path = match Url::parse(url_text) {
        Ok(url) => url.path().to_string(),
        // Strip query/fragment by hand and keep going
        Err(_) => {
            let no_frag = url_text.split('#').next().unwrap_or(url_text);
            no_frag.split('?').next().unwrap_or(no_frag).to_string()
        }
    };
    let segments: Vec<&str> = path.split('/').collect();
    let property_pos = segments.iter().position(|s| *s == "property")?;
    segments
        .get(property_pos + 1)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DeepLinkConfig {
        DeepLinkConfig::default()
    }

    #[test]
    fn scheme_path_matches_and_extracts() {
        let cfg = config();
        let rule = PropertyRule::SchemePath;
        assert!(rule.matches(&cfg, "hearth://property/123"));
        assert!(!rule.matches(&cfg, "hearth://property?id=123"));
        assert_eq!(
            rule.extract(&cfg, "hearth://property/123"),
            Some("123".to_string())
        );
    }

    #[test]
    fn scheme_path_trailing_slash() {
        let cfg = config();
        assert_eq!(
            PropertyRule::SchemePath.extract(&cfg, "hearth://property/123/"),
            Some("123".to_string())
        );
    }

    #[test]
    fn scheme_path_embedded_in_text() {
        let cfg = config();
        assert_eq!(
            PropertyRule::SchemePath.extract(&cfg, "open this: hearth://property/abc"),
            Some("abc".to_string())
        );
    }

    #[test]
    fn scheme_path_empty_segment_yields_none() {
        let cfg = config();
        assert_eq!(PropertyRule::SchemePath.extract(&cfg, "hearth://property/"), None);
    }

    #[test]
    fn scheme_query_matches_and_extracts() {
        let cfg = config();
        let rule = PropertyRule::SchemeQuery;
        assert!(rule.matches(&cfg, "hearth://property?id=xyz"));
        assert_eq!(
            rule.extract(&cfg, "hearth://property?id=xyz"),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn scheme_query_ignores_other_params() {
        let cfg = config();
        assert_eq!(
            PropertyRule::SchemeQuery.extract(&cfg, "hearth://property?utm=x&id=xyz"),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn web_path_extracts_and_strips_query() {
        let cfg = config();
        let rule = PropertyRule::WebPath;
        assert!(rule.matches(&cfg, "https://hearth.homes/property/789"));
        assert_eq!(
            rule.extract(&cfg, "https://hearth.homes/property/789?utm_source=mail"),
            Some("789".to_string())
        );
    }

    #[test]
    fn web_path_empty_id_yields_none() {
        let cfg = config();
        assert_eq!(
            PropertyRule::WebPath.extract(&cfg, "https://hearth.homes/property/"),
            None
        );
    }

    #[test]
    fn landing_pages_extract_id_param() {
        let cfg = config();
        let rule = PropertyRule::LandingPage;
        for link in [
            "https://hearth.homes/property.html?id=555",
            "https://hearth-pages.web.app/hearth-app/property.html?id=555",
            "https://hearth-pages.web.app/hearth-app/deeplink-handler.html?id=555",
        ] {
            assert!(rule.matches(&cfg, link), "{link}");
            assert_eq!(rule.extract(&cfg, link), Some("555".to_string()), "{link}");
        }
    }

    #[test]
    fn landing_page_without_id_yields_none() {
        let cfg = config();
        assert_eq!(
            PropertyRule::LandingPage
                .extract(&cfg, "https://hearth-pages.web.app/hearth-app/deeplink-handler.html"),
            None
        );
    }

    #[test]
    fn manual_remainder_trims() {
        assert_eq!(
            manual_remainder("x hearth://property/ 42 ", "hearth://property/"),
            Some("42".to_string())
        );
        assert_eq!(manual_remainder("no marker here", "?id="), None);
        assert_eq!(manual_remainder("hearth://property/", "hearth://property/"), None);
    }

    #[test]
    fn encoded_id_stays_opaque_after_query_decoding() {
        let cfg = config();
        // Percent-decoding is whatever the URL parser does; nothing more.
        assert_eq!(
            PropertyRule::SchemeQuery.extract(&cfg, "hearth://property?id=a%2Fb"),
            Some("a/b".to_string())
        );
    }
}
