use anyhow::{bail, Result};
use clap::Parser;
use hangarboard_core::model::{ScenarioErrorDetail, ScenarioErrorType, ScenarioReport, ScenarioStatus};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::harness::{
    discover_scenarios, execute_scenario, execute_suite as run_suite, parse_scenario,
    report_result, report_result_json, report_suite_result, report_suite_result_json,
    save_snapshot, OutputFormat,
};

const DEFAULT_SUITE_DIR: &str = "tests/scenarios";

enum ExecutionTarget<'a> {
    Suite(&'a Path),
    Single(&'a Path),
}

/// Execute booking scenarios
#[derive(Debug, Parser)]
pub struct RunCommand {
    /// Path to the scenario YAML file (for single scenario mode)
    #[arg(value_name = "SCENARIO")]
    pub scenario_path: Option<PathBuf>,

    /// Execute all scenarios in directory (suite mode)
    #[arg(long, value_name = "DIR")]
    pub suite: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable snapshot on failure
    #[arg(long)]
    pub no_snapshot: bool,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl RunCommand {
    pub fn execute(&self) -> Result<i32> {
        match self.execution_target() {
            ExecutionTarget::Suite(suite_path) => self.execute_suite(suite_path),
            ExecutionTarget::Single(scenario_path) => self.execute_single(scenario_path),
        }
    }

    fn execution_target(&self) -> ExecutionTarget<'_> {
        if let Some(suite_path) = &self.suite {
            ExecutionTarget::Suite(suite_path)
        } else if let Some(scenario_path) = &self.scenario_path {
            ExecutionTarget::Single(scenario_path)
        } else {
            ExecutionTarget::Suite(Path::new(DEFAULT_SUITE_DIR))
        }
    }

    fn execute_single(&self, scenario_path: &Path) -> Result<i32> {
        let output_format = self.output_format()?;

        let scenario = match parse_scenario(scenario_path) {
            Ok(scenario) => scenario,
            Err(error) => {
                let report = build_error_report(
                    scenario_path.display().to_string(),
                    ScenarioErrorType::ParseError,
                    error,
                );
                self.report_single(&report, output_format)?;
                return Ok(2);
            }
        };

        let report = execute_scenario(&scenario);
        self.report_single(&report, output_format)?;

        if !self.no_snapshot && report.status == ScenarioStatus::Fail {
            save_snapshot(&report, scenario_path)?;
        }

        Ok(match report.status {
            ScenarioStatus::Pass => 0,
            ScenarioStatus::Fail => 1,
            ScenarioStatus::Error => 2,
        })
    }

    fn execute_suite(&self, suite_path: &Path) -> Result<i32> {
        let output_format = self.output_format()?;

        let scenarios = discover_scenarios(suite_path)?;
        if scenarios.is_empty() {
            eprintln!("No scenarios found in: {}", suite_path.display());
            return Ok(2);
        }

        if output_format == OutputFormat::Human {
            println!(
                "Discovered {} scenarios in: {}",
                scenarios.len(),
                suite_path.display()
            );
            println!();
        }

        let suite_report = run_suite(&scenarios)?;
        self.report_suite(&suite_report, output_format)?;

        if !self.no_snapshot {
            for (scenario_path, report) in scenarios.iter().zip(suite_report.results.iter()) {
                if report.status == ScenarioStatus::Fail {
                    save_snapshot(report, scenario_path)?;
                }
            }
        }

        Ok(if suite_report.errors > 0 {
            2
        } else if suite_report.failed > 0 {
            1
        } else {
            0
        })
    }

    fn output_format(&self) -> Result<OutputFormat> {
        match self.output.to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unsupported output format: {other}. Use human or json."),
        }
    }

    fn report_single(&self, report: &ScenarioReport, output_format: OutputFormat) -> Result<()> {
        match output_format {
            OutputFormat::Human => report_result(report, self.verbose),
            OutputFormat::Json => report_result_json(report)?,
        }
        Ok(())
    }

    fn report_suite(
        &self,
        suite_report: &hangarboard_core::model::SuiteReport,
        output_format: OutputFormat,
    ) -> Result<()> {
        match output_format {
            OutputFormat::Human => report_suite_result(suite_report),
            OutputFormat::Json => report_suite_result_json(suite_report)?,
        }
        Ok(())
    }
}

fn build_error_report(
    scenario_name: String,
    error_type: ScenarioErrorType,
    error: anyhow::Error,
) -> ScenarioReport {
    ScenarioReport {
        run_id: Uuid::now_v7(),
        scenario_name,
        status: ScenarioStatus::Error,
        steps: Vec::new(),
        mismatches: Vec::new(),
        error: Some(ScenarioErrorDetail {
            error_type,
            message: error.to_string(),
            details: Some(format!("{error:?}")),
        }),
        actual_snapshot: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn command(scenario: Option<PathBuf>, suite: Option<PathBuf>) -> RunCommand {
        RunCommand {
            scenario_path: scenario,
            suite,
            verbose: false,
            no_snapshot: true,
            output: "human".to_string(),
        }
    }

    fn workspace_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    #[test]
    fn execution_target_defaults_to_suite_directory() {
        let cmd = command(None, None);
        match cmd.execution_target() {
            ExecutionTarget::Suite(path) => assert_eq!(path, Path::new(DEFAULT_SUITE_DIR)),
            ExecutionTarget::Single(_) => panic!("expected suite target"),
        }
    }

    #[test]
    fn execution_target_prefers_explicit_scenario() {
        let scenario = PathBuf::from("scenario.yaml");
        let cmd = command(Some(scenario.clone()), None);
        match cmd.execution_target() {
            ExecutionTarget::Single(path) => assert_eq!(path, scenario.as_path()),
            ExecutionTarget::Suite(_) => panic!("expected single target"),
        }
    }

    #[test]
    fn unsupported_output_format_is_rejected() {
        let mut cmd = command(None, None);
        cmd.output = "junit".to_string();
        assert!(cmd.output_format().is_err());
    }

    #[test]
    fn execute_single_passing_fixture_returns_exit_code_0() {
        let fixture = workspace_root().join("tests/scenarios/quickstart.yaml");
        assert!(fixture.is_file());

        let cmd = command(Some(fixture), None);
        assert_eq!(cmd.execute().unwrap(), 0);
    }

    #[test]
    fn execute_single_failing_fixture_returns_exit_code_1() {
        let fixture = workspace_root().join("tests/scenarios/exact-mismatch-demo.yaml");
        assert!(fixture.is_file());

        let cmd = command(Some(fixture), None);
        assert_eq!(cmd.execute().unwrap(), 1);
    }

    #[test]
    fn execute_single_missing_scenario_file_returns_exit_code_2() {
        let dir = tempdir().unwrap();
        let cmd = command(Some(dir.path().join("missing.yaml")), None);
        assert_eq!(cmd.execute().unwrap(), 2);
    }

    #[test]
    fn execute_single_malformed_scenario_file_returns_exit_code_2() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.yaml");
        fs::write(&path, "name: [\n").unwrap();

        let cmd = command(Some(path), None);
        assert_eq!(cmd.execute().unwrap(), 2);
    }

    #[test]
    fn execute_single_with_json_output_returns_exit_code_0() {
        let fixture = workspace_root().join("tests/scenarios/block-and-undo.yaml");
        let mut cmd = command(Some(fixture), None);
        cmd.output = "json".to_string();
        assert_eq!(cmd.execute().unwrap(), 0);
    }

    #[test]
    fn execute_suite_reports_failure_exit_code_for_mixed_results() {
        let dir = tempdir().unwrap();
        let suite_dir = dir.path().join("suite");
        fs::create_dir_all(&suite_dir).unwrap();

        for name in ["quickstart.yaml", "exact-mismatch-demo.yaml"] {
            let source = workspace_root().join("tests/scenarios").join(name);
            fs::copy(source, suite_dir.join(name)).unwrap();
        }

        let cmd = command(None, Some(suite_dir));
        assert_eq!(cmd.execute().unwrap(), 1);
    }

    #[test]
    fn execute_suite_with_empty_directory_returns_exit_code_2() {
        let dir = tempdir().unwrap();
        let cmd = command(None, Some(dir.path().to_path_buf()));
        assert_eq!(cmd.execute().unwrap(), 2);
    }

    #[test]
    fn failing_scenario_saves_a_snapshot_unless_disabled() {
        let dir = tempdir().unwrap();
        let source = workspace_root().join("tests/scenarios/exact-mismatch-demo.yaml");
        let scenario_path = dir.path().join("exact-mismatch-demo.yaml");
        fs::copy(source, &scenario_path).unwrap();

        let mut cmd = command(Some(scenario_path.clone()), None);
        cmd.no_snapshot = false;
        assert_eq!(cmd.execute().unwrap(), 1);

        let snapshot = dir.path().join(".snapshots/exact-mismatch-demo-actual.yaml");
        assert!(snapshot.is_file());
    }
}
