use crate::rules::{registry, Diagnostic, Severity};
use anyhow::Result;
use serde::Serialize;

/// SARIF (Static Analysis Results Interchange Format) output for GitHub integration
pub fn report(diagnostics: &[Diagnostic]) -> Result<()> {
    let sarif = SarifReport::from_diagnostics(diagnostics);
    let json = serde_json::to_string_pretty(&sarif)?;
    println!("{}", json);
    Ok(())
}

#[derive(Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
struct SarifDriver {
    name: &'static str,
    version: &'static str,
    #[serde(rename = "informationUri")]
    information_uri: &'static str,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
struct SarifRule {
    id: String,
    name: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
    #[serde(rename = "startColumn")]
    start_column: usize,
}

impl SarifReport {
    fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        // Every registered rule is declared in the driver, matched or not
        let rules: Vec<SarifRule> = registry::all_rules()
            .iter()
            .map(|rule| SarifRule {
                id: rule.id().to_string(),
                name: rule.name().to_string(),
                short_description: SarifMessage {
                    text: rule.description().to_string(),
                },
            })
            .collect();

        let results: Vec<SarifResult> = diagnostics
            .iter()
            .map(|d| SarifResult {
                rule_id: d.rule_id.to_string(),
                level: match d.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                    Severity::Info => "note",
                },
                message: SarifMessage {
                    text: d.message.clone(),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: d.file_path.to_string_lossy().to_string(),
                        },
                        region: SarifRegion {
                            start_line: d.line,
                            start_column: d.column,
                        },
                    },
                }],
            })
            .collect();

        SarifReport {
            schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json",
            version: "2.1.0",
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "cargo-approx",
                        version: env!("CARGO_PKG_VERSION"),
                        information_uri: "https://github.com/cargo-approx/cargo-approx",
                        rules,
                    },
                },
                results,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_report_shape() {
        let diagnostics = vec![Diagnostic {
            rule_id: "approx-constant",
            severity: Severity::Warning,
            message: "Approximate value of `std::f64::consts::PI` found. Consider using it directly.".to_string(),
            file_path: PathBuf::from("src/geometry.rs"),
            line: 7,
            column: 14,
            end_line: Some(7),
            end_column: Some(18),
            suggestion: None,
        }];

        let sarif = SarifReport::from_diagnostics(&diagnostics);
        let json = serde_json::to_string(&sarif).unwrap();

        assert!(json.contains(r#""version":"2.1.0""#));
        assert!(json.contains(r#""name":"cargo-approx""#));
        assert!(json.contains(r#""ruleId":"approx-constant""#));
        assert!(json.contains(r#""level":"warning""#));
        assert!(json.contains(r#""startLine":7"#));
    }

    #[test]
    fn test_all_rules_declared_even_without_results() {
        let sarif = SarifReport::from_diagnostics(&[]);
        assert_eq!(sarif.runs.len(), 1);
        assert!(sarif.runs[0].results.is_empty());
        let ids: Vec<_> = sarif.runs[0]
            .tool
            .driver
            .rules
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert!(ids.contains(&"approx-constant"));
        assert!(ids.contains(&"constant-condition"));
    }
}
