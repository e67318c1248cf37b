use crate::model::slot_key::SlotKey;
use crate::operations::{CommandError, CommandOutcome};
use crate::state::AppState;
use crate::validation::{validate_hangar, validate_window};

/// Sets the active selection. No store effect. Keys outside the configured
/// grid are rejected, matching what a user could actually click.
pub fn execute_select(state: &mut AppState, key: &SlotKey) -> Result<CommandOutcome, CommandError> {
    validate_hangar(&state.config, &key.hangar)?;
    validate_window(&state.config, key.date, key.date)?;

    state.selection = Some(key.clone());
    Ok(CommandOutcome::Applied {
        label: format!("select {key}"),
        changed: vec![],
    })
}
