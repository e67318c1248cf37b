//! Composite identity of one (hangar, date) cell.
//!
//! The key is a plain struct; the string form (`Display`/`FromStr`) exists
//! only for reports and scripted input. The encoding is hangar name, a `-`
//! separator, and the date as `YYYY-MM-DD`. Because hangar names may contain
//! the separator, decoding is anchored on the fixed-width date suffix: the
//! last 10 characters are always the date, everything before the preceding
//! separator is the hangar name.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const KEY_SEPARATOR: char = '-';

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_CHARS: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotKeyError {
    #[error("slot key '{key}' is too short to contain a date suffix")]
    TooShort { key: String },
    #[error("slot key '{key}' is missing the separator before the date suffix")]
    MissingSeparator { key: String },
    #[error("slot key '{key}' does not end in a valid calendar date")]
    InvalidDate { key: String },
}

/// Identity of one schedule cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub hangar: String,
    pub date: NaiveDate,
}

impl SlotKey {
    pub fn new(hangar: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            hangar: hangar.into(),
            date,
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.hangar,
            KEY_SEPARATOR,
            self.date.format(DATE_FORMAT)
        )
    }
}

impl FromStr for SlotKey {
    type Err = SlotKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let boundaries: Vec<usize> = key.char_indices().map(|(index, _)| index).collect();
        if boundaries.len() < DATE_CHARS + 1 {
            return Err(SlotKeyError::TooShort {
                key: key.to_string(),
            });
        }

        // The date suffix is fixed-width in characters, not bytes.
        let date_start = boundaries[boundaries.len() - DATE_CHARS];
        let separator_start = boundaries[boundaries.len() - DATE_CHARS - 1];

        if !key[separator_start..date_start].starts_with(KEY_SEPARATOR) {
            return Err(SlotKeyError::MissingSeparator {
                key: key.to_string(),
            });
        }

        let date = NaiveDate::parse_from_str(&key[date_start..], DATE_FORMAT).map_err(|_| {
            SlotKeyError::InvalidDate {
                key: key.to_string(),
            }
        })?;

        Ok(SlotKey {
            hangar: key[..separator_start].to_string(),
            date,
        })
    }
}
