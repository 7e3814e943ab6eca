//! Deep-link configuration
//!
//! The recognized link shapes are derived from a handful of host names and
//! the custom scheme, so staging and production builds can point at
//! different domains without touching the classifier.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for link classification and delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepLinkConfig {
    /// Custom URI scheme registered by the app
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Canonical web domain
    #[serde(default = "default_primary_domain")]
    pub primary_domain: String,

    /// Static-pages mirror domain hosting the redirect/fallback pages
    #[serde(default = "default_mirror_domain")]
    pub mirror_domain: String,

    /// Path prefix of the app's pages on the mirror
    #[serde(default = "default_mirror_app_path")]
    pub mirror_app_path: String,

    /// Wait between fetch success and the navigate call, in milliseconds
    ///
    /// The shell can report "ready" slightly before it can actually accept a
    /// navigate call; this gap papers over that mount-vs-ready race. Hosts
    /// with a real readiness contract can set it to 0.
    #[serde(default = "default_grace_period_ms")]
    pub grace_period_ms: u64,
}

fn default_scheme() -> String {
    "hearth".to_string()
}

fn default_primary_domain() -> String {
    "hearth.homes".to_string()
}

fn default_mirror_domain() -> String {
    "hearth-pages.web.app".to_string()
}

fn default_mirror_app_path() -> String {
    "hearth-app".to_string()
}

fn default_grace_period_ms() -> u64 {
    500
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            primary_domain: default_primary_domain(),
            mirror_domain: default_mirror_domain(),
            mirror_app_path: default_mirror_app_path(),
            grace_period_ms: default_grace_period_ms(),
        }
    }
}

impl DeepLinkConfig {
    /// Marker identifying the OAuth-style callback, e.g. `hearth://auth/callback`
    pub fn auth_callback_marker(&self) -> String {
        format!("{}://auth/callback", self.scheme)
    }

    /// Custom-scheme property authority, e.g. `hearth://property`
    pub fn scheme_property_prefix(&self) -> String {
        format!("{}://property", self.scheme)
    }

    /// Canonical web property path prefix, e.g. `https://hearth.homes/property/`
    pub fn web_property_prefix(&self) -> String {
        format!("https://{}/property/", self.primary_domain)
    }

    /// Property landing page on the canonical domain
    pub fn web_landing_page(&self) -> String {
        format!("https://{}/property.html", self.primary_domain)
    }

    /// Dedicated property page on the static mirror
    pub fn mirror_property_page(&self) -> String {
        format!(
            "https://{}/{}/property.html",
            self.mirror_domain, self.mirror_app_path
        )
    }

    /// Generic deep-link handler page on the static mirror
    pub fn mirror_handler_page(&self) -> String {
        format!(
            "https://{}/{}/deeplink-handler.html",
            self.mirror_domain, self.mirror_app_path
        )
    }

    /// Grace period as a [`Duration`]
    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }
}
