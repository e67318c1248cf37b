use chrono::NaiveDate;
use tracing::debug;

use crate::model::booking::Booking;
use crate::model::slot_key::SlotKey;
use crate::operations::{CommandError, CommandOutcome};
use crate::state::AppState;
use crate::validation::{
    dates_in_range, validate_description, validate_hangar, validate_range, validate_window,
};

#[derive(Debug, Clone)]
pub struct MultiDayParams {
    pub hangar: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub confirmed: bool,
}

/// Creates the same reservation across an inclusive date range. Every date
/// must lie within the configured day window; conflict handling matches
/// [`execute_block`](crate::operations::block::execute_block). The range is
/// applied exactly once.
pub fn execute_multi_day(
    state: &mut AppState,
    params: MultiDayParams,
) -> Result<CommandOutcome, CommandError> {
    validate_hangar(&state.config, &params.hangar)?;
    validate_range(params.start_date, params.end_date)?;
    validate_window(&state.config, params.start_date, params.end_date)?;
    validate_description(&params.description)?;

    let keys: Vec<SlotKey> = dates_in_range(params.start_date, params.end_date)
        .into_iter()
        .map(|date| SlotKey::new(params.hangar.clone(), date))
        .collect();

    let conflicts: Vec<SlotKey> = keys
        .iter()
        .filter(|key| state.store.get(key).is_some_and(|b| !b.is_blocked()))
        .cloned()
        .collect();
    if !conflicts.is_empty() && !params.confirmed {
        return Ok(CommandOutcome::ConfirmationRequired {
            action: format!(
                "book {} from {} to {}",
                params.hangar, params.start_date, params.end_date
            ),
            conflicts,
        });
    }

    let label = format!(
        "book {} from {} to {}",
        params.hangar, params.start_date, params.end_date
    );
    state
        .undo
        .snapshot(&state.store, keys.iter().cloned(), label.clone());
    for key in &keys {
        state.store.set(
            key.clone(),
            Booking::reserved(params.hangar.clone(), key.date, params.description.clone()),
        );
    }

    debug!(hangar = %params.hangar, days = keys.len(), "applied multi-day booking");
    Ok(CommandOutcome::Applied {
        label,
        changed: keys,
    })
}
