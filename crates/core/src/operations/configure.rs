use chrono::NaiveDate;
use tracing::debug;

use crate::model::grid::GridConfig;
use crate::operations::{CommandError, CommandOutcome};
use crate::state::AppState;

/// Rebuilds the grid from a (hangar-count, day-count) pair, keeping the
/// current start date unless a new one is given. Counts are clamped to one.
/// Rebuilding resets the undo log and drops an out-of-grid selection;
/// bookings are retained.
pub fn execute_configure(
    state: &mut AppState,
    hangar_count: u32,
    days: u32,
    start_date: Option<NaiveDate>,
) -> Result<CommandOutcome, CommandError> {
    let start = start_date.unwrap_or(state.config.start_date);
    let config = GridConfig::numbered(hangar_count, start, days);
    let label = format!(
        "reconfigure grid to {} hangars over {} days",
        config.hangars.len(),
        config.days
    );
    state.reconfigure(config);

    debug!(
        hangars = state.config.hangars.len(),
        days = state.config.days,
        "rebuilt grid"
    );
    Ok(CommandOutcome::Applied {
        label,
        changed: vec![],
    })
}
