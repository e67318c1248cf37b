//! Input checks shared by the command handlers.
//!
//! Validation always runs before any store mutation; a failed check aborts
//! the handler with a typed [`CommandError`] and the store untouched.

use chrono::NaiveDate;

use crate::model::grid::GridConfig;
use crate::operations::CommandError;

pub fn validate_hangar(config: &GridConfig, name: &str) -> Result<(), CommandError> {
    if config.has_hangar(name) {
        Ok(())
    } else {
        Err(CommandError::UnknownHangar {
            name: name.to_string(),
        })
    }
}

pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), CommandError> {
    if start > end {
        Err(CommandError::ReversedRange { start, end })
    } else {
        Ok(())
    }
}

/// Requires the whole inclusive range to lie within the configured day
/// window. The window is contiguous, so checking both endpoints suffices.
pub fn validate_window(
    config: &GridConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), CommandError> {
    for date in [start, end] {
        if !config.contains_date(date) {
            return Err(CommandError::OutOfWindow {
                date,
                window_start: config.start_date,
                window_end: config.end_date(),
            });
        }
    }
    Ok(())
}

pub fn validate_description(text: &str) -> Result<(), CommandError> {
    if text.trim().is_empty() {
        Err(CommandError::EmptyDescription)
    } else {
        Ok(())
    }
}

/// Expands an inclusive date range into its days, in order. The caller is
/// expected to have rejected reversed ranges already.
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        dates.push(cursor);
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_range_is_rejected() {
        let error = validate_range(date(2024, 1, 5), date(2024, 1, 2)).unwrap_err();
        assert!(matches!(error, CommandError::ReversedRange { .. }));
        assert!(validate_range(date(2024, 1, 2), date(2024, 1, 2)).is_ok());
    }

    #[test]
    fn window_check_reports_the_offending_date() {
        let config = GridConfig::numbered(2, date(2024, 1, 1), 7);
        let error = validate_window(&config, date(2024, 1, 6), date(2024, 1, 9)).unwrap_err();
        assert_eq!(
            error,
            CommandError::OutOfWindow {
                date: date(2024, 1, 9),
                window_start: date(2024, 1, 1),
                window_end: date(2024, 1, 7),
            }
        );
    }

    #[test]
    fn blank_description_is_rejected() {
        assert!(matches!(
            validate_description("   "),
            Err(CommandError::EmptyDescription)
        ));
        assert!(validate_description("Inspection").is_ok());
    }

    #[test]
    fn range_expansion_is_inclusive() {
        let dates = dates_in_range(date(2024, 1, 1), date(2024, 1, 3));
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
        assert_eq!(dates_in_range(date(2024, 1, 1), date(2024, 1, 1)).len(), 1);
    }
}
