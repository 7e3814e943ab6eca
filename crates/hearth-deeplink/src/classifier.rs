//! Link classification
//!
//! [`LinkClassifier::classify`] turns a raw link string into exactly one
//! [`LinkIntent`]. It is pure and total: no I/O, no mutation, and no input
//! can make it panic; anything unrecognized resolves to `Unknown`.
//!
//! Recognition order:
//!
//! 1. Auth callback (`hearth://auth/callback?...`) — both tokens present and
//!    non-empty produces `Auth`; a callback with missing tokens falls through
//!    to the remaining rules rather than short-circuiting to `Unknown`
//! 2. Property rules, in [`PropertyRule::ORDERED`] priority
//! 3. `Unknown`

use hearth_core::LinkIntent;
use url::form_urlencoded;

use crate::config::DeepLinkConfig;
use crate::rules::PropertyRule;

/// Stateless classifier for inbound link strings
#[derive(Debug, Clone, Default)]
pub struct LinkClassifier {
    config: DeepLinkConfig,
}

impl LinkClassifier {
    pub fn new(config: DeepLinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeepLinkConfig {
        &self.config
    }

    /// Classify a raw link string
    ///
    /// The returned intent keeps `raw` verbatim; matching itself tolerates
    /// surrounding whitespace and text.
    pub fn classify(&self, raw: &str) -> LinkIntent {
        let input = raw.trim();

        if let Some(intent) = self.classify_auth(input, raw) {
            return intent;
        }

        for rule in PropertyRule::ORDERED {
            if !rule.matches(&self.config, input) {
                continue;
            }
            if let Some(property_id) = rule.extract(&self.config, input) {
                if !property_id.is_empty() {
                    return LinkIntent::Property {
                        property_id,
                        raw: raw.to_string(),
                    };
                }
            }
            // Qualified but unextractable; a later rule may still succeed
        }

        LinkIntent::Unknown {
            raw: raw.to_string(),
        }
    }

    fn classify_auth(&self, input: &str, raw: &str) -> Option<LinkIntent> {
        let marker = self.config.auth_callback_marker();
        let start = input.find(&marker)?;
        let (_, query) = input[start..].split_once('?')?;
        let query = match query.split_once('#') {
            Some((q, _)) => q,
            None => query,
        };

        let mut access_token = None;
        let mut refresh_token = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "access_token" => access_token = Some(value.into_owned()),
                "refresh_token" => refresh_token = Some(value.into_owned()),
                _ => {}
            }
        }

        match (access_token, refresh_token) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Some(LinkIntent::Auth {
                    access_token: access,
                    refresh_token: refresh,
                    raw: raw.to_string(),
                })
            }
            _ => None,
        }
    }
}
