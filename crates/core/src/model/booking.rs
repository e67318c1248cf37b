use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::slot_key::SlotKey;

/// Display label for maintenance blocks.
pub const BLOCKED_LABEL: &str = "Unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingKind {
    /// A real reservation with a free-text description.
    Reserved { description: String },
    /// A maintenance block; renders as [`BLOCKED_LABEL`].
    Blocked,
}

/// One scheduled occupancy of a hangar on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub hangar: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub kind: BookingKind,
}

impl Booking {
    pub fn reserved(
        hangar: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            hangar: hangar.into(),
            date,
            kind: BookingKind::Reserved {
                description: description.into(),
            },
        }
    }

    pub fn blocked(hangar: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            hangar: hangar.into(),
            date,
            kind: BookingKind::Blocked,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self.kind, BookingKind::Blocked)
    }

    /// Label shown in the grid cell.
    pub fn label(&self) -> &str {
        match &self.kind {
            BookingKind::Reserved { description } => description,
            BookingKind::Blocked => BLOCKED_LABEL,
        }
    }

    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.hangar.clone(), self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reserved_booking_labels_with_description() {
        let booking = Booking::reserved("Hangar 1", date(2024, 1, 1), "Inspection");
        assert!(!booking.is_blocked());
        assert_eq!(booking.label(), "Inspection");
    }

    #[test]
    fn blocked_booking_labels_as_unavailable() {
        let booking = Booking::blocked("Hangar 1", date(2024, 1, 1));
        assert!(booking.is_blocked());
        assert_eq!(booking.label(), BLOCKED_LABEL);
    }

    #[test]
    fn key_matches_hangar_and_date() {
        let booking = Booking::reserved("Hangar 2", date(2024, 3, 5), "Engine swap");
        assert_eq!(booking.key(), SlotKey::new("Hangar 2", date(2024, 3, 5)));
    }

    #[test]
    fn serializes_kind_as_tag() {
        let blocked = Booking::blocked("Hangar 1", date(2024, 1, 1));
        let json = serde_json::to_value(&blocked).unwrap();
        assert_eq!(json["kind"], "blocked");

        let reserved = Booking::reserved("Hangar 1", date(2024, 1, 1), "Paint");
        let json = serde_json::to_value(&reserved).unwrap();
        assert_eq!(json["kind"], "reserved");
        assert_eq!(json["description"], "Paint");
    }
}
