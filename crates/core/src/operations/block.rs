use chrono::NaiveDate;
use tracing::debug;

use crate::model::booking::Booking;
use crate::model::slot_key::SlotKey;
use crate::operations::{CommandError, CommandOutcome};
use crate::state::AppState;
use crate::validation::{dates_in_range, validate_hangar, validate_range};

#[derive(Debug, Clone)]
pub struct BlockParams {
    pub hangar: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub confirmed: bool,
}

/// Marks a hangar unavailable across an inclusive date range. Existing
/// reservations in the range are conflicts and require confirmation;
/// existing blocks are overwritten silently. The snapshot covers every key
/// in the range, and the range is applied exactly once.
pub fn execute_block(
    state: &mut AppState,
    params: BlockParams,
) -> Result<CommandOutcome, CommandError> {
    validate_hangar(&state.config, &params.hangar)?;
    validate_range(params.start_date, params.end_date)?;

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
                "block {} from {} to {}",
                params.hangar, params.start_date, params.end_date
            ),
            conflicts,
        });
    }

    let label = format!(
        "block {} from {} to {}",
        params.hangar, params.start_date, params.end_date
    );
    state
        .undo
        .snapshot(&state.store, keys.iter().cloned(), label.clone());
    for key in &keys {
        state
            .store
            .set(key.clone(), Booking::blocked(params.hangar.clone(), key.date));
    }

    debug!(hangar = %params.hangar, days = keys.len(), "applied block range");
    Ok(CommandOutcome::Applied {
        label,
        changed: keys,
    })
}
