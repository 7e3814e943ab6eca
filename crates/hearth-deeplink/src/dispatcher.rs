//! Deferred navigation dispatch
//!
//! The dispatcher sits between the OS link source and the navigation shell.
//! [`DeepLinkDispatcher::on_link_received`] classifies each raw link and
//! routes it: auth callbacks go to the session collaborator, property links
//! wait in the [`PendingSlot`], anything else is ignored. Once the shell
//! reports readiness it calls [`DeepLinkDispatcher::try_deliver`] with its
//! navigator handle, which prefetches the listing, waits out the grace
//! period, and navigates with the prefetched payload.
//!
//! Delivery failures are terminal for that attempt: the failure is logged,
//! the slot stays clear, and a new attempt happens only when a fresh link
//! repopulates the slot. A crash mid-delivery loses the pending intent,
//! which is acceptable — the user can re-open the link.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use hearth_core::{FetchError, LinkIntent, ListingFetcher, ListingNavigator, SessionRestorer};

use crate::classifier::LinkClassifier;
use crate::config::DeepLinkConfig;
use crate::slot::PendingSlot;

/// How a delivery attempt ended
///
/// Delivery never propagates an error to the caller; every failure is
/// recovered locally (logged, slot cleared) and reported here.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    /// Navigation was invoked with the prefetched listing
    Delivered,
    /// Nothing was pending; strictly a no-op
    EmptySlot,
    /// A newer link arrived while this delivery was in flight; aborted
    /// before navigating
    Superseded,
    /// The backend fetch failed
    FetchFailed(FetchError),
    /// The fetch succeeded but the listing no longer exists
    ListingMissing,
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Consumes classified link intents and performs deferred delivery
///
/// Generic over the backend fetcher and the auth session collaborator. The
/// navigator is deliberately not a field: a handle to it only exists once
/// the shell has mounted, so it is passed to [`Self::try_deliver`] by the
/// readiness signal handler.
pub struct DeepLinkDispatcher<F, S> {
    classifier: LinkClassifier,
    slot: Arc<PendingSlot>,
    fetcher: Arc<F>,
    session: Arc<S>,
    grace_period: Duration,
}

impl<F, S> DeepLinkDispatcher<F, S>
where
    F: ListingFetcher,
    S: SessionRestorer,
{
    pub fn new(config: DeepLinkConfig, fetcher: Arc<F>, session: Arc<S>) -> Self {
        let grace_period = config.grace_period();
        Self {
            classifier: LinkClassifier::new(config),
            slot: Arc::new(PendingSlot::new()),
            fetcher,
            session,
            grace_period,
        }
    }

    pub fn config(&self) -> &DeepLinkConfig {
        self.classifier.config()
    }

    /// The pending slot, shareable with shells that want to inspect it
    pub fn slot(&self) -> Arc<PendingSlot> {
        self.slot.clone()
    }

    /// Id currently waiting for delivery, if any
    pub fn pending_property_id(&self) -> Option<String> {
        self.slot.pending_property_id()
    }

    /// Handle a raw link from the OS link source
    ///
    /// Property links overwrite the slot (last-link-wins); auth callbacks
    /// are handed to the session collaborator and never touch the slot;
    /// unrecognized links are ignored.
    pub async fn on_link_received(&self, raw: &str) {
        match self.classifier.classify(raw) {
            LinkIntent::Property { property_id, .. } => {
                let generation = self.slot.set(property_id.as_str());
                debug!(%property_id, generation, "Stored pending property navigation");
            }
            LinkIntent::Auth {
                access_token,
                refresh_token,
                ..
            } => {
                debug!("Auth callback link received");
                if let Err(e) = self
                    .session
                    .restore_session(&access_token, &refresh_token)
                    .await
                {
                    warn!(error = %e, "Session restore failed");
                }
            }
            LinkIntent::Unknown { raw } => {
                debug!(link = %raw, "Ignoring unrecognized link");
            }
        }
    }

    /// Deliver the pending navigation, if any, to `navigator`
    ///
    /// Called by the shell once it can accept navigation commands. Takes
    /// the slot up front (read-and-clear as one operation), prefetches the
    /// listing, waits out the grace period, then navigates — unless a newer
    /// link superseded this delivery while it was in flight.
    pub async fn try_deliver<N: ListingNavigator>(&self, navigator: &N) -> DeliveryOutcome {
        let Some(pending) = self.slot.take() else {
            return DeliveryOutcome::EmptySlot;
        };

        let listing = match self.fetcher.fetch_by_id(&pending.property_id).await {
            Ok(Some(listing)) => listing,
            Ok(None) => {
                warn!(
                    property_id = %pending.property_id,
                    "Listing not found, dropping pending navigation"
                );
                return DeliveryOutcome::ListingMissing;
            }
            Err(e) => {
                warn!(
                    property_id = %pending.property_id,
                    error = %e,
                    "Listing fetch failed, dropping pending navigation"
                );
                return DeliveryOutcome::FetchFailed(e);
            }
        };

        // The shell can report ready slightly before it can accept a
        // navigate call; give it the configured grace period.
        tokio::time::sleep(self.grace_period).await;

        if self.slot.latest_generation() != pending.generation {
            debug!(
                property_id = %pending.property_id,
                "Superseded by a newer link, aborting delivery"
            );
            return DeliveryOutcome::Superseded;
        }

        navigator
            .show_listing(&pending.property_id, listing)
            .await;
        info!(property_id = %pending.property_id, "Delivered pending navigation");
        DeliveryOutcome::Delivered
    }
}
