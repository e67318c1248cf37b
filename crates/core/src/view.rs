//! Grid projection: derives per-slot visual state from the store.
//!
//! Purely a projection, never a source of truth. The whole grid is
//! recomputed after every mutation; [`render`] is a pure function of
//! (store, selection, grid shape).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::grid::GridConfig;
use crate::model::slot_key::SlotKey;
use crate::store::BookingStore;

/// Maximum display units per cell label, ellipsis included.
pub const MAX_LABEL_CHARS: usize = 30;

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Free,
    Booked,
}

/// Visual state of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub key: SlotKey,
    pub status: SlotStatus,
    pub selected: bool,
    pub label: String,
}

/// Visual state of the whole grid, in hangar-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub slots: Vec<SlotView>,
}

impl GridView {
    pub fn slot(&self, hangar: &str, date: NaiveDate) -> Option<&SlotView> {
        self.slots
            .iter()
            .find(|slot| slot.key.hangar == hangar && slot.key.date == date)
    }
}

/// Derives the visual state for every configured cell: `Booked` iff the key
/// exists in the store, `selected` iff it equals the selection, label from
/// the booking (truncated), empty for free slots.
pub fn render(config: &GridConfig, store: &BookingStore, selection: Option<&SlotKey>) -> GridView {
    let slots = config
        .slots()
        .map(|key| {
            let booking = store.get(&key);
            let status = if booking.is_some() {
                SlotStatus::Booked
            } else {
                SlotStatus::Free
            };
            let label = booking.map(|b| truncate_label(b.label())).unwrap_or_default();
            let selected = selection == Some(&key);
            SlotView {
                key,
                status,
                selected,
                label,
            }
        })
        .collect();

    GridView { slots }
}

/// Truncates to [`MAX_LABEL_CHARS`] display units, replacing the cut tail
/// with an ellipsis. Counts characters, not bytes.
pub fn truncate_label(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_LABEL_CHARS - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}
