use anyhow::{Context, Result};
use hangarboard_core::model::Scenario;
use std::path::Path;

/// Parse a booking scenario from a YAML file, with file location and field
/// paths in every error message.
pub fn parse_scenario(path: &Path) -> Result<Scenario> {
    if !path.exists() {
        anyhow::bail!(
            "Scenario file not found: {}\nPlease check the file path and try again.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read scenario file: {}\nPlease check file permissions.",
            path.display()
        )
    })?;

    // serde_path_to_error pinpoints the offending field on a type mismatch.
    let deserializer = serde_yaml::Deserializer::from_str(&content);
    let scenario: Scenario = serde_path_to_error::deserialize(deserializer).with_context(|| {
        format!(
            "Failed to parse YAML from: {}\n\
             This usually means there's a syntax error or missing required field.",
            path.display()
        )
    })?;

    scenario.validate().with_context(|| {
        format!(
            "Validation failed for scenario: {}\n\
             The YAML was parsed successfully but contains invalid data.",
            path.display()
        )
    })?;

    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::parse_scenario;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_scenario_reports_missing_file_with_context() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.yaml");

        let error = parse_scenario(&missing).unwrap_err().to_string();
        assert!(error.contains("Scenario file not found"));
        assert!(error.contains(&missing.display().to_string()));
    }

    #[test]
    fn parse_scenario_reports_yaml_parse_errors_with_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.yaml");
        fs::write(&path, "name: [\n").unwrap();

        let error = parse_scenario(&path).unwrap_err().to_string();
        assert!(error.contains("Failed to parse YAML"));
        assert!(error.contains(&path.display().to_string()));
    }

    #[test]
    fn parse_scenario_reports_validation_errors_with_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid-structure.yaml");
        fs::write(
            &path,
            r#"
name: "no commands"
grid:
  hangars: ["Hangar 1"]
  start_date: "2024-01-01"
  days: 7
commands: []
expected:
  slots: []
"#,
        )
        .unwrap();

        let error = parse_scenario(&path).unwrap_err().to_string();
        assert!(error.contains("Validation failed for scenario"));
        assert!(error.contains(&path.display().to_string()));
    }

    #[test]
    fn parse_scenario_accepts_a_complete_scenario() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("valid.yaml");
        fs::write(
            &path,
            r#"
name: "single booking"
grid:
  hangars: ["Hangar 1", "Hangar 2"]
  start_date: "2024-01-01"
  days: 7
commands:
  - action: create
    hangar: "Hangar 1"
    date: "2024-01-01"
    description: "Inspection"
expected:
  slots:
    - hangar: "Hangar 1"
      date: "2024-01-01"
      status: booked
      label: "Inspection"
      selected: true
"#,
        )
        .unwrap();

        let scenario = parse_scenario(&path).unwrap();
        assert_eq!(scenario.name, "single booking");
        assert_eq!(scenario.commands.len(), 1);
        assert_eq!(scenario.expected.slots.len(), 1);
    }
}
