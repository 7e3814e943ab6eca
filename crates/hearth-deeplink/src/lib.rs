//! # Hearth Deep Links
//!
//! Inbound deep-link resolution and deferred navigation dispatch.
//!
//! Hearth can be launched or resumed through several equivalent link shapes:
//! the custom `hearth://` scheme, canonical `hearth.homes` web URLs, static
//! redirect pages on the pages mirror, and an OAuth-style auth callback.
//! This crate classifies a raw link string into a typed [`LinkIntent`]
//! without performing any navigation itself, then hands property intents to
//! a navigation shell that may not be mounted yet when the link arrives.
//!
//! ## Core Components
//!
//! - [`LinkClassifier`]: pure `&str -> LinkIntent` classification, never
//!   panics, malformed input resolves to `Unknown`
//! - [`PropertyRule`]: the ordered (predicate, extractor) pairs behind
//!   property-id extraction
//! - [`PendingSlot`]: single-slot holder for a property intent awaiting
//!   delivery, last-link-wins
//! - [`DeepLinkDispatcher`]: consumes classified intents and performs the
//!   prefetch-then-navigate delivery once the shell reports readiness
//!
//! ## Control Flow
//!
//! ```text
//! link source ──▶ classify ──▶ Auth ────▶ SessionRestorer
//!                         └──▶ Property ▶ PendingSlot ──▶ try_deliver:
//!                         └──▶ Unknown ▶ (ignored)        fetch ▶ grace
//!                                                         wait ▶ navigate
//! ```
//!
//! Delivery failures (network, listing gone) are logged and the slot is
//! cleared; the user can simply re-open the link. Nothing in this crate is
//! fatal to the process.

pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod rules;
pub mod slot;

// Re-export main types
pub use classifier::LinkClassifier;
pub use config::DeepLinkConfig;
pub use dispatcher::{DeepLinkDispatcher, DeliveryOutcome};
pub use rules::PropertyRule;
pub use slot::{PendingNavigation, PendingSlot};

// Re-export core types for convenience
pub use hearth_core::{LinkIntent, ListingFetcher, ListingNavigator, PropertyListing, SessionRestorer};
