//! Bounded stack of pre-mutation snapshots.
//!
//! Every mutating command captures the prior value of each key it is about
//! to touch, strictly before writing. Undo pops the most recent entry and
//! restores exactly those keys: present values are written back, absent
//! markers remove the key. There is no redo stack and no coalescing; each
//! pop is independent.

use std::collections::{BTreeMap, VecDeque};

use thiserror::Error;

use crate::model::booking::Booking;
use crate::model::slot_key::SlotKey;
use crate::store::BookingStore;

pub const DEFAULT_UNDO_CAPACITY: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UndoError {
    #[error("nothing to undo")]
    Empty,
}

/// Snapshot of the pre-action values for every key one command touched.
/// `None` marks a key that did not exist before the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoEntry {
    label: String,
    saved: BTreeMap<SlotKey, Option<Booking>>,
}

impl UndoEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn keys(&self) -> impl Iterator<Item = &SlotKey> {
        self.saved.keys()
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct UndoLog {
    entries: VecDeque<UndoEntry>,
    capacity: usize,
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Captures the current store values for `keys` and pushes them as one
    /// entry. Must be called before the corresponding mutation, with the
    /// union of every key the mutation will touch. Evicts the oldest entry
    /// past the bound.
    pub fn snapshot<I>(&mut self, store: &BookingStore, keys: I, label: impl Into<String>)
    where
        I: IntoIterator<Item = SlotKey>,
    {
        let saved: BTreeMap<SlotKey, Option<Booking>> = keys
            .into_iter()
            .map(|key| {
                let value = store.get(&key).cloned();
                (key, value)
            })
            .collect();

        self.entries.push_back(UndoEntry {
            label: label.into(),
            saved,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Pops the most recent entry and restores the store to its pre-action
    /// state for every key in it. Returns the popped entry.
    pub fn undo(&mut self, store: &mut BookingStore) -> Result<UndoEntry, UndoError> {
        let entry = self.entries.pop_back().ok_or(UndoError::Empty)?;
        for (key, value) in &entry.saved {
            match value {
                Some(booking) => {
                    store.set(key.clone(), booking.clone());
                }
                None => {
                    store.remove(key);
                }
            }
        }
        Ok(entry)
    }

    pub fn last(&self) -> Option<&UndoEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key(day: u32) -> SlotKey {
        SlotKey::new("Hangar 1", NaiveDate::from_ymd_opt(2024, 1, day).unwrap())
    }

    fn booking(day: u32, description: &str) -> Booking {
        Booking::reserved(
            "Hangar 1",
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description,
        )
    }

    #[test]
    fn undo_restores_overwritten_and_absent_keys() {
        let mut store = BookingStore::new();
        let mut log = UndoLog::new();
        store.set(key(1), booking(1, "Original"));

        log.snapshot(&store, [key(1), key(2)], "overwrite and add");
        store.set(key(1), booking(1, "Changed"));
        store.set(key(2), booking(2, "New"));

        let entry = log.undo(&mut store).unwrap();
        assert_eq!(entry.label(), "overwrite and add");
        assert_eq!(entry.len(), 2);
        assert_eq!(store.get(&key(1)).unwrap().label(), "Original");
        assert!(store.get(&key(2)).is_none());
    }

    #[test]
    fn undo_on_empty_log_fails() {
        let mut store = BookingStore::new();
        let mut log = UndoLog::new();
        assert_eq!(log.undo(&mut store).unwrap_err(), UndoError::Empty);
    }

    #[test]
    fn bound_evicts_oldest_entry_first() {
        let mut store = BookingStore::new();
        let mut log = UndoLog::with_capacity(3);

        for day in 1..=4 {
            log.snapshot(&store, [key(day)], format!("step {day}"));
            store.set(key(day), booking(day, "x"));
        }

        assert_eq!(log.len(), 3);
        // The oldest snapshot (step 1) was evicted from the bottom.
        let labels: Vec<String> = std::iter::from_fn(|| {
            log.undo(&mut store)
                .ok()
                .map(|entry| entry.label().to_string())
        })
        .collect();
        assert_eq!(labels, vec!["step 4", "step 3", "step 2"]);
    }

    #[test]
    fn capacity_is_clamped_to_one() {
        let log = UndoLog::with_capacity(0);
        assert_eq!(log.capacity(), 1);
    }

    #[test]
    fn duplicate_keys_collapse_into_one_saved_value() {
        let mut store = BookingStore::new();
        let mut log = UndoLog::new();
        log.snapshot(&store, [key(1), key(1)], "dup");
        assert_eq!(log.last().unwrap().len(), 1);
    }
}
