//! The single source of truth for what is booked.

use std::collections::BTreeMap;

use crate::model::booking::Booking;
use crate::model::slot_key::SlotKey;

/// Mapping from slot key to booking. Enforces nothing beyond key uniqueness;
/// validation belongs to the command handlers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookingStore {
    entries: BTreeMap<SlotKey, Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &SlotKey) -> Option<&Booking> {
        self.entries.get(key)
    }

    /// Insert or overwrite.
    pub fn set(&mut self, key: SlotKey, booking: Booking) -> Option<Booking> {
        self.entries.insert(key, booking)
    }

    pub fn remove(&mut self, key: &SlotKey) -> Option<Booking> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SlotKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, &Booking)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
