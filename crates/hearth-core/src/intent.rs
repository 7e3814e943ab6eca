//! Classified link intents
//!
//! A raw link string resolves to exactly one [`LinkIntent`] variant. Every
//! variant keeps the original input verbatim in `raw` for diagnostics and
//! replay; classification never rewrites or normalizes it.

use serde::{Deserialize, Serialize};

/// The structured meaning of a raw external link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkIntent {
    /// OAuth-style callback carrying session tokens
    Auth {
        access_token: String,
        refresh_token: String,
        /// Original link string, verbatim
        raw: String,
    },

    /// A link pointing at a property listing
    Property {
        property_id: String,
        /// Original link string, verbatim
        raw: String,
    },

    /// Anything the classifier does not recognize; silently ignored downstream
    Unknown {
        /// Original link string, verbatim
        raw: String,
    },
}

impl LinkIntent {
    /// The original link string this intent was classified from
    pub fn raw(&self) -> &str {
        match self {
            LinkIntent::Auth { raw, .. }
            | LinkIntent::Property { raw, .. }
            | LinkIntent::Unknown { raw } => raw,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, LinkIntent::Auth { .. })
    }

    pub fn is_property(&self) -> bool {
        matches!(self, LinkIntent::Property { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, LinkIntent::Unknown { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_is_preserved_verbatim() {
        let intent = LinkIntent::Property {
            property_id: "123".to_string(),
            raw: "hearth://property/123".to_string(),
        };
        assert_eq!(intent.raw(), "hearth://property/123");
        assert!(intent.is_property());
        assert!(!intent.is_auth());
        assert!(!intent.is_unknown());
    }
}
