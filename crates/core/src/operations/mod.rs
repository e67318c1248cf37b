//! Command handlers, one module per user action.
//!
//! Each handler validates first, snapshots through the undo log, mutates the
//! store, and returns a [`CommandOutcome`] describing what happened.
//! Conflicts are not errors: they surface as
//! [`CommandOutcome::ConfirmationRequired`] with no mutation, and the caller
//! re-issues the command with its confirm flag set to proceed.

pub mod block;
pub mod clear;
pub mod configure;
pub mod delete;
pub mod error;
pub mod multi_day;
pub mod select;
pub mod undo;
pub mod upsert;

use serde::Serialize;

use crate::error::CoreError;
use crate::model::notice::Notice;
use crate::model::scenario::CommandDef;
use crate::model::slot_key::SlotKey;
use crate::state::AppState;

pub use block::{execute_block, BlockParams};
pub use clear::{execute_clear_all, execute_clear_hangar};
pub use configure::execute_configure;
pub use delete::execute_delete;
pub use error::CommandError;
pub use multi_day::{execute_multi_day, MultiDayParams};
pub use select::execute_select;
pub use undo::execute_undo;
pub use upsert::{execute_upsert, UpsertParams};

/// What a handler did, for the caller and for tests. `ConfirmationRequired`
/// and `Noop` guarantee the store was not touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    Applied {
        label: String,
        changed: Vec<SlotKey>,
    },
    ConfirmationRequired {
        action: String,
        conflicts: Vec<SlotKey>,
    },
    Noop {
        reason: String,
    },
}

/// Dispatches one scripted command to its handler. The selection-dependent
/// commands read the selection from `state`; `select` decodes its key from
/// the scripted string form.
pub fn apply(state: &mut AppState, command: &CommandDef) -> crate::error::Result<CommandOutcome> {
    match command {
        CommandDef::Select { key } => {
            let key: SlotKey = key.parse()?;
            Ok(execute_select(state, &key)?)
        }
        CommandDef::Create {
            hangar,
            date,
            description,
            confirm,
        } => Ok(execute_upsert(
            state,
            UpsertParams {
                origin: None,
                hangar: hangar.clone(),
                date: *date,
                description: description.clone(),
                confirmed: *confirm,
            },
        )?),
        CommandDef::Edit {
            hangar,
            date,
            description,
            confirm,
        } => {
            let origin = state.selection.clone().ok_or(CommandError::NoSelection)?;
            Ok(execute_upsert(
                state,
                UpsertParams {
                    origin: Some(origin),
                    hangar: hangar.clone(),
                    date: *date,
                    description: description.clone(),
                    confirmed: *confirm,
                },
            )?)
        }
        CommandDef::Delete => Ok(execute_delete(state)?),
        CommandDef::Block {
            hangar,
            start_date,
            end_date,
            confirm,
        } => Ok(execute_block(
            state,
            BlockParams {
                hangar: hangar.clone(),
                start_date: *start_date,
                end_date: *end_date,
                confirmed: *confirm,
            },
        )?),
        CommandDef::MultiDay {
            hangar,
            start_date,
            end_date,
            description,
            confirm,
        } => Ok(execute_multi_day(
            state,
            MultiDayParams {
                hangar: hangar.clone(),
                start_date: *start_date,
                end_date: *end_date,
                description: description.clone(),
                confirmed: *confirm,
            },
        )?),
        CommandDef::ClearAll { confirm } => Ok(execute_clear_all(state, *confirm)?),
        CommandDef::ClearHangar { hangar, confirm } => {
            Ok(execute_clear_hangar(state, hangar, *confirm)?)
        }
        CommandDef::Undo => Ok(execute_undo(state)?),
        CommandDef::Configure {
            hangar_count,
            days,
            start_date,
        } => Ok(execute_configure(state, *hangar_count, *days, *start_date)?),
    }
}

/// Maps a command result to the notice the surrounding UI should display.
/// Validation failures are warnings; key decode failures indicate an
/// internal inconsistency and are errors; everything else is informational.
pub fn notice_for(result: &crate::error::Result<CommandOutcome>) -> Notice {
    match result {
        Ok(CommandOutcome::Applied { label, .. }) => Notice::info(label.clone()),
        Ok(CommandOutcome::ConfirmationRequired { action, conflicts }) => Notice::warning(format!(
            "{action} affects {} existing booking(s); confirm to proceed",
            conflicts.len()
        )),
        Ok(CommandOutcome::Noop { reason }) => Notice::info(reason.clone()),
        Err(CoreError::Command(error)) => Notice::warning(error.to_string()),
        Err(CoreError::Key(error)) => Notice::error(error.to_string()),
    }
}
