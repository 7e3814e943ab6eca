//! External collaborator traits
//!
//! The deep-link core never talks to the backend or the UI shell directly;
//! it goes through these seams. All three have in-memory implementations in
//! [`crate::mock`] for testing.

use async_trait::async_trait;

use crate::error::{AuthError, FetchError};
use crate::listing::PropertyListing;

/// Backend "fetch entity by id" collaborator
///
/// `Ok(None)` means the backend answered but holds no such listing; `Err`
/// covers network and service failures. The core treats both as a failed
/// delivery and recovers locally.
#[async_trait]
pub trait ListingFetcher: Send + Sync {
    async fn fetch_by_id(&self, id: &str) -> Result<Option<PropertyListing>, FetchError>;
}

/// Handle to the mounted navigation shell
///
/// A value of this type only exists once the shell has mounted and reported
/// readiness, which is why delivery takes it as an argument instead of
/// holding one from construction. Navigation is fire-and-forget: once
/// invoked it is assumed to eventually succeed, so there is no error
/// channel.
#[async_trait]
pub trait ListingNavigator: Send + Sync {
    /// Navigate to the listing detail screen
    ///
    /// The prefetched `listing` is passed along so the destination does not
    /// need to re-fetch it.
    async fn show_listing(&self, property_id: &str, listing: PropertyListing);
}

/// Auth collaborator that consumes callback tokens
///
/// Token validation is the collaborator's business; the deep-link core only
/// extracts the tokens from the callback URL and hands them over.
#[async_trait]
pub trait SessionRestorer: Send + Sync {
    async fn restore_session(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), AuthError>;
}
