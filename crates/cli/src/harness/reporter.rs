use anyhow::{Context, Result};
use hangarboard_core::model::{
    ExpectedSlot, ScenarioReport, ScenarioStatus, StepDisposition, SuiteReport,
};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Report a scenario result in human-readable format
pub fn report_result(report: &ScenarioReport, verbose: bool) {
    println!("Scenario: {}", report.scenario_name);

    match report.status {
        ScenarioStatus::Pass => {
            println!("Status: PASS");
            println!();
            println!("✓ Final grid matches the expectation");
        }
        ScenarioStatus::Fail => {
            println!("Status: FAIL");
            println!();
            println!("Slot mismatches ({}):", report.mismatches.len());
            for (shown, mismatch) in report.mismatches.iter().enumerate() {
                if !verbose && shown == 5 {
                    println!(
                        "  ... and {} more mismatches (use --verbose to see all)",
                        report.mismatches.len() - shown
                    );
                    break;
                }
                println!(
                    "  ✗ {} on {}: {:?} (expected {:?}, actual {:?})",
                    mismatch.hangar, mismatch.date, mismatch.kind, mismatch.expected, mismatch.actual
                );
            }
        }
        ScenarioStatus::Error => {
            println!("Status: ERROR");
            println!();
            if let Some(error) = &report.error {
                println!("Error: {}", error.message);
                if verbose {
                    if let Some(details) = &error.details {
                        println!();
                        println!("Details:");
                        println!("{details}");
                    }
                }
            }
        }
    }

    if verbose && !report.steps.is_empty() {
        println!();
        println!("Steps:");
        for step in &report.steps {
            let marker = match step.disposition {
                StepDisposition::Applied => "✓",
                StepDisposition::ConfirmationRequired => "?",
                StepDisposition::Noop => "-",
                StepDisposition::Rejected => "✗",
            };
            println!(
                "  {marker} [{}] {}: {}",
                step.index, step.action, step.notice.message
            );
        }
    }
}

/// Report a scenario result as JSON on stdout
pub fn report_result_json(report: &ScenarioReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Report suite results in human-readable format
pub fn report_suite_result(suite: &SuiteReport) {
    println!("Scenario Suite Results");
    println!("======================");
    println!();
    println!("Total:  {}", suite.total);
    println!("Passed: {} ({:.1}%)", suite.passed, percentage(suite.passed, suite.total));
    println!("Failed: {} ({:.1}%)", suite.failed, percentage(suite.failed, suite.total));
    println!("Errors: {} ({:.1}%)", suite.errors, percentage(suite.errors, suite.total));

    let problems: Vec<&ScenarioReport> = suite
        .results
        .iter()
        .filter(|result| result.status != ScenarioStatus::Pass)
        .collect();
    if !problems.is_empty() {
        println!();
        for result in problems {
            let tag = match result.status {
                ScenarioStatus::Fail => "FAIL",
                ScenarioStatus::Error => "ERROR",
                ScenarioStatus::Pass => unreachable!(),
            };
            println!("  {tag}: {}", result.scenario_name);
        }
    }
}

/// Report suite results as JSON on stdout
pub fn report_suite_result_json(suite: &SuiteReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(suite)?);
    Ok(())
}

fn percentage(part: usize, total: usize) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Serialize)]
struct SnapshotDoc<'a> {
    slots: &'a [ExpectedSlot],
}

/// Save the actual grid of a failed scenario beside the scenario file, in
/// the expectation format so it can be pasted back into the YAML.
pub fn save_snapshot(report: &ScenarioReport, scenario_path: &Path) -> Result<()> {
    let Some(slots) = &report.actual_snapshot else {
        return Ok(());
    };

    let snapshot_dir = scenario_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(".snapshots");
    std::fs::create_dir_all(&snapshot_dir)
        .with_context(|| format!("Failed to create snapshot dir: {}", snapshot_dir.display()))?;

    let stem = scenario_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("scenario");
    let snapshot_path = snapshot_dir.join(format!("{stem}-actual.yaml"));

    let content = serde_yaml::to_string(&SnapshotDoc { slots })?;
    std::fs::write(&snapshot_path, content)
        .with_context(|| format!("Failed to write snapshot: {}", snapshot_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hangarboard_core::SlotStatus;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn failed_report() -> ScenarioReport {
        ScenarioReport {
            run_id: Uuid::now_v7(),
            scenario_name: "failing".to_string(),
            status: ScenarioStatus::Fail,
            steps: Vec::new(),
            mismatches: Vec::new(),
            error: None,
            actual_snapshot: Some(vec![ExpectedSlot {
                hangar: "Hangar 1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                status: SlotStatus::Booked,
                label: "Inspection".to_string(),
                selected: false,
            }]),
        }
    }

    #[test]
    fn save_snapshot_writes_expectation_shaped_yaml() {
        let dir = TempDir::new().unwrap();
        let scenario_path = dir.path().join("failing.yaml");
        std::fs::write(&scenario_path, "name: failing\n").unwrap();

        save_snapshot(&failed_report(), &scenario_path).unwrap();

        let snapshot_path = dir.path().join(".snapshots/failing-actual.yaml");
        let content = std::fs::read_to_string(snapshot_path).unwrap();
        assert!(content.contains("Hangar 1"));
        assert!(content.contains("Inspection"));
        assert!(content.contains("booked"));
    }

    #[test]
    fn save_snapshot_without_snapshot_data_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let scenario_path = dir.path().join("passing.yaml");
        let mut report = failed_report();
        report.actual_snapshot = None;

        save_snapshot(&report, &scenario_path).unwrap();
        assert!(!dir.path().join(".snapshots").exists());
    }
}
