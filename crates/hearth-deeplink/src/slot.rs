//! The pending-navigation slot
//!
//! A link can arrive before the navigation shell has mounted, so the
//! property id waits here until the shell reports readiness. The slot holds
//! at most one id: a newer link overwrites an older one (last-link-wins,
//! no queue).
//!
//! Every write stamps a monotonically increasing generation. A delivery
//! takes the slot with [`PendingSlot::take`] (read-and-clear as one
//! operation) and can later compare its generation against
//! [`PendingSlot::latest_generation`] to detect that a newer link arrived
//! while it was in flight.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// A taken slot entry: the id to deliver plus its write generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub property_id: String,
    pub generation: u64,
}

#[derive(Debug, Default)]
struct SlotState {
    pending: Option<PendingNavigation>,
    last_generation: u64,
}

/// Single-slot holder for a property intent awaiting delivery
///
/// Shared between the link-received handler (writer) and the delivery
/// routine (taker); wrap it in an `Arc` for that. The lock is only ever
/// held for the swap itself, never across an await point.
#[derive(Debug, Default)]
pub struct PendingSlot {
    inner: Mutex<SlotState>,
}

impl PendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        // A poisoned slot is still just a slot; keep going with its state
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a property id, overwriting any previous one
    ///
    /// Returns the generation stamped on this write.
    pub fn set(&self, property_id: impl Into<String>) -> u64 {
        let mut state = self.lock();
        state.last_generation += 1;
        let generation = state.last_generation;
        state.pending = Some(PendingNavigation {
            property_id: property_id.into(),
            generation,
        });
        generation
    }

    /// Read and clear the slot as one operation
    pub fn take(&self) -> Option<PendingNavigation> {
        self.lock().pending.take()
    }

    /// Generation of the most recent write, monotone across clears
    pub fn latest_generation(&self) -> u64 {
        self.lock().last_generation
    }

    /// Id currently waiting for delivery, if any
    pub fn pending_property_id(&self) -> Option<String> {
        self.lock()
            .pending
            .as_ref()
            .map(|p| p.property_id.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_take_is_none() {
        let slot = PendingSlot::new();
        assert!(slot.is_empty());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn set_then_take_clears() {
        let slot = PendingSlot::new();
        slot.set("123");
        let taken = slot.take().unwrap();
        assert_eq!(taken.property_id, "123");
        assert!(slot.is_empty());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn second_set_overwrites() {
        let slot = PendingSlot::new();
        slot.set("A");
        slot.set("B");
        assert_eq!(slot.pending_property_id(), Some("B".to_string()));
        assert_eq!(slot.take().unwrap().property_id, "B");
    }

    #[test]
    fn generations_are_monotone_across_clears() {
        let slot = PendingSlot::new();
        let g1 = slot.set("A");
        let taken = slot.take().unwrap();
        assert_eq!(taken.generation, g1);

        let g2 = slot.set("B");
        assert!(g2 > g1);
        assert_eq!(slot.latest_generation(), g2);

        // A taken entry from before the overwrite can see it was superseded
        assert_ne!(g1, slot.latest_generation());
    }
}
