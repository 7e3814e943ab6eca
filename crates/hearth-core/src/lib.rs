//! # Hearth Core
//!
//! Core types, traits, and errors for the Hearth deep-link stack.
//!
//! Hearth is launched and resumed through heterogeneous external links
//! (custom URI scheme, canonical web URLs, static redirect pages, and an
//! OAuth-style callback). This crate provides the shared vocabulary that
//! lets the link-handling logic stay decoupled from the app shell and the
//! backend client.
//!
//! ## Key Types
//!
//! - [`LinkIntent`]: The classified, structured meaning of a raw link string
//! - [`PropertyListing`]: The listing entity prefetched before navigation
//!
//! ## Key Traits
//!
//! - [`ListingFetcher`]: "fetch entity by id" backend collaborator
//! - [`ListingNavigator`]: handle to the mounted navigation shell
//! - [`SessionRestorer`]: auth collaborator that consumes callback tokens
//!
//! The [`mock`] module ships in-memory implementations of all three traits
//! for use in unit and integration tests.

pub mod error;
pub mod intent;
pub mod listing;
pub mod mock;
pub mod traits;

// Re-export main types
pub use error::*;
pub use intent::*;
pub use listing::*;
pub use mock::*;
pub use traits::*;
