//! Mock collaborators for testing
//!
//! In-memory implementations of [`ListingFetcher`], [`ListingNavigator`],
//! and [`SessionRestorer`] so link classification and delivery logic can be
//! tested without a backend or a mounted UI shell.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hearth_core::{MockListingFetcher, MockNavigator, PropertyListing};
//!
//! let fetcher = MockListingFetcher::new();
//! fetcher.insert(PropertyListing::new("123", "Sunny loft"));
//!
//! let navigator = MockNavigator::new();
//! // ... run a delivery ...
//! assert_eq!(navigator.shown().len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::error::{AuthError, FetchError};
use crate::listing::PropertyListing;
use crate::traits::{ListingFetcher, ListingNavigator, SessionRestorer};

/// In-memory listing store implementing [`ListingFetcher`]
///
/// Unknown ids resolve to `Ok(None)`. A configured failure takes precedence
/// over the stored listings. When built via [`MockListingFetcher::gated`],
/// every fetch blocks until the returned [`Notify`] is signalled, which lets
/// a test hold a fetch open while it interleaves other operations.
#[derive(Default)]
pub struct MockListingFetcher {
    listings: Mutex<HashMap<String, PropertyListing>>,
    failure: Mutex<Option<FetchError>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockListingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher whose fetches block until the gate is signalled
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let fetcher = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (fetcher, gate)
    }

    /// Add a listing, keyed by its id
    pub fn insert(&self, listing: PropertyListing) {
        self.listings
            .lock()
            .unwrap()
            .insert(listing.id.clone(), listing);
    }

    /// Make every subsequent fetch fail with `err`
    pub fn fail_with(&self, err: FetchError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    /// Number of fetches attempted so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingFetcher for MockListingFetcher {
    async fn fetch_by_id(&self, id: &str) -> Result<Option<PropertyListing>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.listings.lock().unwrap().get(id).cloned())
    }
}

/// Recording implementation of [`ListingNavigator`]
#[derive(Default)]
pub struct MockNavigator {
    shown: Mutex<Vec<(String, PropertyListing)>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(property_id, listing)` pair navigated to, in order
    pub fn shown(&self) -> Vec<(String, PropertyListing)> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingNavigator for MockNavigator {
    async fn show_listing(&self, property_id: &str, listing: PropertyListing) {
        self.shown
            .lock()
            .unwrap()
            .push((property_id.to_string(), listing));
    }
}

/// Recording implementation of [`SessionRestorer`]
#[derive(Default)]
pub struct MockSessionRestorer {
    restored: Mutex<Vec<(String, String)>>,
    failure: Mutex<Option<AuthError>>,
}

impl MockSessionRestorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent restore fail with `err`
    pub fn fail_with(&self, err: AuthError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    /// Every `(access_token, refresh_token)` pair handed over, in order
    pub fn restored(&self) -> Vec<(String, String)> {
        self.restored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionRestorer for MockSessionRestorer {
    async fn restore_session(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), AuthError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.restored
            .lock()
            .unwrap()
            .push((access_token.to_string(), refresh_token.to_string()));
        Ok(())
    }
}
