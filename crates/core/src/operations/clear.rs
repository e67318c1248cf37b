use tracing::debug;

use crate::model::slot_key::SlotKey;
use crate::operations::{CommandError, CommandOutcome};
use crate::state::AppState;
use crate::validation::validate_hangar;

/// Empties the whole store. A no-op with notice when nothing is booked;
/// otherwise requires confirmation. The snapshot covers every existing key.
pub fn execute_clear_all(
    state: &mut AppState,
    confirmed: bool,
) -> Result<CommandOutcome, CommandError> {
    if state.store.is_empty() {
        return Ok(CommandOutcome::Noop {
            reason: "no bookings to clear".to_string(),
        });
    }

    let keys: Vec<SlotKey> = state.store.keys().cloned().collect();
    if !confirmed {
        return Ok(CommandOutcome::ConfirmationRequired {
            action: "clear all bookings".to_string(),
            conflicts: keys,
        });
    }

    state
        .undo
        .snapshot(&state.store, keys.iter().cloned(), "clear all bookings");
    state.store.clear();
    state.selection = None;

    debug!(removed = keys.len(), "cleared all bookings");
    Ok(CommandOutcome::Applied {
        label: "clear all bookings".to_string(),
        changed: keys,
    })
}

/// Removes every booking for one hangar across the configured day window.
/// A no-op with notice when the hangar has none; otherwise requires
/// confirmation. The selection is cleared when it was among the removed keys.
pub fn execute_clear_hangar(
    state: &mut AppState,
    hangar: &str,
    confirmed: bool,
) -> Result<CommandOutcome, CommandError> {
    validate_hangar(&state.config, hangar)?;

    let keys: Vec<SlotKey> = state
        .config
        .dates()
        .map(|date| SlotKey::new(hangar, date))
        .filter(|key| state.store.contains(key))
        .collect();

    if keys.is_empty() {
        return Ok(CommandOutcome::Noop {
            reason: format!("no bookings for {hangar} in the current window"),
        });
    }

    let label = format!("clear bookings for {hangar}");
    if !confirmed {
        return Ok(CommandOutcome::ConfirmationRequired {
            action: label,
            conflicts: keys,
        });
    }

    state
        .undo
        .snapshot(&state.store, keys.iter().cloned(), label.clone());
    for key in &keys {
        state.store.remove(key);
    }
    if state
        .selection
        .as_ref()
        .is_some_and(|selection| keys.contains(selection))
    {
        state.selection = None;
    }

    debug!(hangar, removed = keys.len(), "cleared hangar bookings");
    Ok(CommandOutcome::Applied {
        label,
        changed: keys,
    })
}
