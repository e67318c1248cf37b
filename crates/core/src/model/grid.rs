use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::slot_key::SlotKey;

/// Shape of the schedule grid: which hangars, and which contiguous day window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub hangars: Vec<String>,
    pub start_date: NaiveDate,
    pub days: u32,
}

impl GridConfig {
    /// Builds a grid from explicit hangar names. The day count is clamped to
    /// a minimum of one, mirroring what the surrounding UI does with
    /// out-of-range input.
    pub fn new(hangars: Vec<String>, start_date: NaiveDate, days: u32) -> Self {
        Self {
            hangars,
            start_date,
            days: days.max(1),
        }
    }

    /// Builds a grid from a (hangar-count, day-count) pair, generating
    /// `"Hangar 1"`..`"Hangar N"` names. Both counts are clamped to one.
    pub fn numbered(hangar_count: u32, start_date: NaiveDate, days: u32) -> Self {
        let hangars = (1..=hangar_count.max(1))
            .map(|index| format!("Hangar {index}"))
            .collect();
        Self::new(hangars, start_date, days)
    }

    /// Last day of the window, inclusive.
    pub fn end_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(u64::from(self.days.saturating_sub(1))))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The configured days, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days)
            .filter_map(|offset| self.start_date.checked_add_days(Days::new(u64::from(offset))))
    }

    pub fn has_hangar(&self, name: &str) -> bool {
        self.hangars.iter().any(|hangar| hangar == name)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date()
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.has_hangar(&key.hangar) && self.contains_date(key.date)
    }

    /// Every cell of the grid in hangar-major order.
    pub fn slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.hangars.iter().flat_map(move |hangar| {
            self.dates()
                .map(move |date| SlotKey::new(hangar.clone(), date))
        })
    }

    pub fn slot_count(&self) -> usize {
        self.hangars.len() * self.days as usize
    }
}
