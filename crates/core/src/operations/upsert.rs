use chrono::NaiveDate;
use tracing::debug;

use crate::model::booking::Booking;
use crate::model::slot_key::SlotKey;
use crate::operations::{CommandError, CommandOutcome};
use crate::state::AppState;
use crate::validation::{validate_description, validate_hangar, validate_window};

/// Input for create and edit, which share one handler. `origin` is the key
/// the booking currently lives at (the selection, for edits); `None` creates
/// a fresh booking.
#[derive(Debug, Clone)]
pub struct UpsertParams {
    pub origin: Option<SlotKey>,
    pub hangar: String,
    pub date: NaiveDate,
    pub description: String,
    pub confirmed: bool,
}

/// Creates or edits one booking. When the target key differs from the origin
/// and already holds a booking, overwriting requires confirmation. The
/// snapshot covers both the target and the moved-from key.
pub fn execute_upsert(
    state: &mut AppState,
    params: UpsertParams,
) -> Result<CommandOutcome, CommandError> {
    validate_hangar(&state.config, &params.hangar)?;
    validate_window(&state.config, params.date, params.date)?;
    validate_description(&params.description)?;

    let new_key = SlotKey::new(params.hangar.clone(), params.date);
    let editing_in_place = params.origin.as_ref() == Some(&new_key);

    if !editing_in_place && state.store.contains(&new_key) && !params.confirmed {
        return Ok(CommandOutcome::ConfirmationRequired {
            action: format!("overwrite booking at {new_key}"),
            conflicts: vec![new_key],
        });
    }

    let mut touched = vec![new_key.clone()];
    if let Some(origin) = &params.origin {
        if *origin != new_key {
            touched.push(origin.clone());
        }
    }

    let label = match &params.origin {
        Some(origin) if *origin != new_key => format!("move booking {origin} to {new_key}"),
        Some(_) => format!("edit booking at {new_key}"),
        None => format!("create booking at {new_key}"),
    };
    state
        .undo
        .snapshot(&state.store, touched.iter().cloned(), label.clone());

    let booking = Booking::reserved(params.hangar, params.date, params.description);
    state.store.set(new_key.clone(), booking);
    if let Some(origin) = &params.origin {
        if *origin != new_key {
            state.store.remove(origin);
        }
    }
    state.selection = Some(new_key.clone());

    debug!(key = %new_key, moved = !editing_in_place && params.origin.is_some(), "applied booking upsert");
    Ok(CommandOutcome::Applied {
        label,
        changed: touched,
    })
}
