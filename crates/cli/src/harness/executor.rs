use anyhow::Result;
use hangarboard_core::model::{
    ExpectedSlot, Scenario, ScenarioErrorDetail, ScenarioErrorType, ScenarioReport,
    ScenarioStatus, StepDisposition, StepReport,
};
use hangarboard_core::operations::{apply, notice_for, CommandOutcome};
use hangarboard_core::{AppState, CoreError, GridConfig, GridView, SlotStatus};
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

use super::comparator::compare_grid;
use super::parser::parse_scenario;

/// Execute a single booking scenario against a fresh application state.
pub fn execute_scenario(scenario: &Scenario) -> ScenarioReport {
    let mut report = ScenarioReport {
        run_id: Uuid::now_v7(),
        scenario_name: scenario.name.clone(),
        status: ScenarioStatus::Pass,
        steps: Vec::new(),
        mismatches: Vec::new(),
        error: None,
        actual_snapshot: None,
    };

    let config = GridConfig::new(
        scenario.grid.hangars.clone(),
        scenario.grid.start_date,
        scenario.grid.days,
    );
    let mut state = AppState::with_undo_capacity(config, scenario.config.undo_capacity);

    for (index, command) in scenario.commands.iter().enumerate() {
        let result = apply(&mut state, command);
        let notice = notice_for(&result);
        let disposition = match &result {
            Ok(CommandOutcome::Applied { .. }) => StepDisposition::Applied,
            Ok(CommandOutcome::ConfirmationRequired { .. }) => StepDisposition::ConfirmationRequired,
            Ok(CommandOutcome::Noop { .. }) => StepDisposition::Noop,
            Err(_) => StepDisposition::Rejected,
        };
        report.steps.push(StepReport {
            index,
            action: command.action().to_string(),
            disposition,
            notice,
        });

        // Validation rejections are legitimate scripted outcomes; a key that
        // fails to decode means the script itself is inconsistent.
        if let Err(CoreError::Key(error)) = result {
            report.status = ScenarioStatus::Error;
            report.error = Some(ScenarioErrorDetail {
                error_type: ScenarioErrorType::ExecutionError,
                message: error.to_string(),
                details: None,
            });
            return report;
        }
    }

    let view = state.view();
    let mismatches = compare_grid(&view, &scenario.expected, scenario.config.match_mode);
    if !mismatches.is_empty() {
        report.status = ScenarioStatus::Fail;
        report.mismatches = mismatches;
        if scenario.config.snapshot_on_failure {
            report.actual_snapshot = Some(snapshot_slots(&view));
        }
    }

    report
}

/// Execute every scenario in order, turning parse failures into error
/// results rather than aborting the suite.
pub fn execute_suite(scenario_paths: &[PathBuf]) -> Result<hangarboard_core::model::SuiteReport> {
    let mut results = Vec::with_capacity(scenario_paths.len());

    for path in scenario_paths {
        let result = match parse_scenario(path) {
            Ok(scenario) => execute_scenario(&scenario),
            Err(error) => ScenarioReport {
                run_id: Uuid::now_v7(),
                scenario_name: path.display().to_string(),
                status: ScenarioStatus::Error,
                steps: Vec::new(),
                mismatches: Vec::new(),
                error: Some(ScenarioErrorDetail {
                    error_type: ScenarioErrorType::ParseError,
                    message: error.to_string(),
                    details: Some(format!("{error:?}")),
                }),
                actual_snapshot: None,
            },
        };
        results.push(result);
    }

    let passed = count_status(&results, ScenarioStatus::Pass);
    let failed = count_status(&results, ScenarioStatus::Fail);
    let errors = count_status(&results, ScenarioStatus::Error);

    Ok(hangarboard_core::model::SuiteReport {
        total: results.len(),
        passed,
        failed,
        errors,
        results,
    })
}

fn count_status(results: &[ScenarioReport], status: ScenarioStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}

/// Discover scenario files (.yaml/.yml) under a directory, sorted by path.
pub fn discover_scenarios(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Booked or selected slots of the rendered grid, in expectation format.
pub fn snapshot_slots(view: &GridView) -> Vec<ExpectedSlot> {
    view.slots
        .iter()
        .filter(|slot| slot.status == SlotStatus::Booked || slot.selected)
        .map(|slot| ExpectedSlot {
            hangar: slot.key.hangar.clone(),
            date: slot.key.date,
            status: slot.status,
            label: slot.label.clone(),
            selected: slot.selected,
        })
        .collect()
}
