use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::grid::GridConfig;
use super::notice::Notice;
use crate::undo::DEFAULT_UNDO_CAPACITY;
use crate::view::SlotStatus;

// ============================================================================
// Scenario Definition
// ============================================================================

/// A scripted booking session: grid setup, a command sequence, and the grid
/// state expected once the script has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,

    /// Narrative description of what is being exercised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Grid shape the session starts with
    pub grid: GridConfig,

    /// Harness behavior configuration (has defaults)
    #[serde(default)]
    pub config: ScenarioConfig,

    /// The command script, applied in order
    pub commands: Vec<CommandDef>,

    /// Expected grid state after the last command
    pub expected: Expectation,
}

impl Scenario {
    /// Validate the scenario structure
    pub fn validate(&self) -> Result<()> {
        if self.grid.hangars.is_empty() {
            bail!("Scenario '{}': grid must define at least one hangar", self.name);
        }
        if self.grid.days == 0 {
            bail!("Scenario '{}': grid must span at least one day", self.name);
        }
        if self.commands.is_empty() {
            bail!("Scenario '{}': must define at least one command", self.name);
        }
        if self.config.undo_capacity == 0 {
            bail!(
                "Scenario '{}': undo_capacity must be at least one",
                self.name
            );
        }

        let mut seen = HashSet::new();
        for slot in &self.expected.slots {
            if !seen.insert((slot.hangar.as_str(), slot.date)) {
                bail!(
                    "Scenario '{}': expected slot listed twice: {} on {}",
                    self.name,
                    slot.hangar,
                    slot.date
                );
            }
        }

        Ok(())
    }
}

/// Controls harness execution and comparison behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Undo stack bound for the session
    #[serde(default = "default_undo_capacity")]
    pub undo_capacity: usize,

    /// Slot matching strategy
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Save the actual grid when the comparison fails
    #[serde(default = "default_snapshot_on_failure")]
    pub snapshot_on_failure: bool,
}

fn default_undo_capacity() -> usize {
    DEFAULT_UNDO_CAPACITY
}

fn default_snapshot_on_failure() -> bool {
    true
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            match_mode: MatchMode::Exact,
            snapshot_on_failure: true,
        }
    }
}

/// Slot matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Listed slots must match; every unlisted slot must be free and
    /// unselected
    #[default]
    Exact,
    /// Only listed slots are checked
    Subset,
}

// ============================================================================
// Command Script
// ============================================================================

/// One scripted user action. `confirm` plays the role of the original
/// yes/no prompt: conflicting commands without it stop at the decision
/// point with no mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CommandDef {
    /// Select a slot by its encoded key string
    Select { key: String },
    Create {
        hangar: String,
        date: NaiveDate,
        description: String,
        #[serde(default)]
        confirm: bool,
    },
    /// Rewrite the selected booking, possibly moving it to a new slot
    Edit {
        hangar: String,
        date: NaiveDate,
        description: String,
        #[serde(default)]
        confirm: bool,
    },
    Delete,
    Block {
        hangar: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        #[serde(default)]
        confirm: bool,
    },
    MultiDay {
        hangar: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        description: String,
        #[serde(default)]
        confirm: bool,
    },
    ClearAll {
        #[serde(default)]
        confirm: bool,
    },
    ClearHangar {
        hangar: String,
        #[serde(default)]
        confirm: bool,
    },
    Undo,
    /// Rebuild the grid from a (hangar-count, day-count) pair
    Configure {
        hangar_count: u32,
        days: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_date: Option<NaiveDate>,
    },
}

impl CommandDef {
    /// Stable action name for step reports
    pub fn action(&self) -> &'static str {
        match self {
            CommandDef::Select { .. } => "select",
            CommandDef::Create { .. } => "create",
            CommandDef::Edit { .. } => "edit",
            CommandDef::Delete => "delete",
            CommandDef::Block { .. } => "block",
            CommandDef::MultiDay { .. } => "multi_day",
            CommandDef::ClearAll { .. } => "clear_all",
            CommandDef::ClearHangar { .. } => "clear_hangar",
            CommandDef::Undo => "undo",
            CommandDef::Configure { .. } => "configure",
        }
    }
}

// ============================================================================
// Expectation
// ============================================================================

/// Expected grid state. Slots not listed are expected free and unselected in
/// exact mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectation {
    #[serde(default)]
    pub slots: Vec<ExpectedSlot>,
}

/// Expected visual state of one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedSlot {
    pub hangar: String,
    pub date: NaiveDate,
    pub status: SlotStatus,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub selected: bool,
}

// ============================================================================
// Scenario Report
// ============================================================================

/// Output of scenario execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Unique id of this run
    pub run_id: Uuid,

    /// Name from the Scenario
    pub scenario_name: String,

    /// Pass/Fail/Error
    pub status: ScenarioStatus,

    /// One entry per executed command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepReport>,

    /// Slot-level mismatches (empty on pass)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<SlotMismatch>,

    /// Present only when status is Error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ScenarioErrorDetail>,

    /// Actual grid on failure (when snapshot_on_failure is set); the shape
    /// matches the expectation format so it can be pasted back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_snapshot: Option<Vec<ExpectedSlot>>,
}

/// Scenario status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Grid matched the expectation
    Pass,
    /// Mismatches found
    Fail,
    /// Execution failed (parse error, invalid key, etc.)
    Error,
}

/// What one command did
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    /// Position in the command script
    pub index: usize,

    /// Action name
    pub action: String,

    /// How the command resolved
    pub disposition: StepDisposition,

    /// The notice the UI would have shown
    pub notice: Notice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDisposition {
    /// Handler mutated state (or selection)
    Applied,
    /// Conflict decision point reached without confirm; nothing mutated
    ConfirmationRequired,
    /// Reported no-op (empty slot delete, empty undo log, nothing to clear)
    Noop,
    /// Validation rejected the input; nothing mutated
    Rejected,
}

/// One slot-level comparison failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotMismatch {
    pub hangar: String,
    pub date: NaiveDate,
    pub kind: MismatchKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// Expected slot is not part of the rendered grid
    MissingSlot,
    /// Free where booked was expected, or vice versa
    StatusMismatch,
    /// Booked with a different label
    LabelMismatch,
    /// Selected flag differs
    SelectionMismatch,
    /// Exact mode: a booked slot the expectation did not list
    UnexpectedBooking,
}

/// Execution error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioErrorDetail {
    pub error_type: ScenarioErrorType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioErrorType {
    /// YAML parsing failure
    ParseError,
    /// Scenario structure invalid
    ValidationError,
    /// Command script failed in a non-recoverable way
    ExecutionError,
}

// ============================================================================
// Suite Report
// ============================================================================

/// Aggregated results from suite execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub results: Vec<ScenarioReport>,
}
