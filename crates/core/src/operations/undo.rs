use tracing::debug;

use crate::operations::{CommandError, CommandOutcome};
use crate::state::AppState;
use crate::undo::UndoError;

/// Pops the most recent undo entry and restores the affected keys. An empty
/// log is a reported no-op, never an error to the user.
pub fn execute_undo(state: &mut AppState) -> Result<CommandOutcome, CommandError> {
    match state.undo.undo(&mut state.store) {
        Ok(entry) => {
            debug!(label = entry.label(), keys = entry.len(), "undid command");
            Ok(CommandOutcome::Applied {
                label: format!("undid: {}", entry.label()),
                changed: entry.keys().cloned().collect(),
            })
        }
        Err(UndoError::Empty) => Ok(CommandOutcome::Noop {
            reason: "nothing to undo".to_string(),
        }),
    }
}
