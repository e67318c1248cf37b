use tracing::debug;

use crate::operations::{CommandError, CommandOutcome};
use crate::state::AppState;

/// Removes the booking at the selected slot. Requires a selection; an empty
/// selected slot is a reported no-op. The selection is cleared afterwards.
pub fn execute_delete(state: &mut AppState) -> Result<CommandOutcome, CommandError> {
    let Some(selection) = state.selection.clone() else {
        return Err(CommandError::NoSelection);
    };

    if !state.store.contains(&selection) {
        return Ok(CommandOutcome::Noop {
            reason: format!("no booking at {selection}"),
        });
    }

    let label = format!("delete booking at {selection}");
    state
        .undo
        .snapshot(&state.store, [selection.clone()], label.clone());
    state.store.remove(&selection);
    state.selection = None;

    debug!(key = %selection, "deleted booking");
    Ok(CommandOutcome::Applied {
        label,
        changed: vec![selection],
    })
}
