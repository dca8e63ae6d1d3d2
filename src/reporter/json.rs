use crate::rules::Diagnostic;
use anyhow::Result;

pub fn report(diagnostics: &[Diagnostic]) -> Result<()> {
    println!("{}", format(diagnostics)?);
    Ok(())
}

/// Format diagnostics as JSON string without printing.
pub fn format(diagnostics: &[Diagnostic]) -> Result<String> {
    Ok(serde_json::to_string_pretty(diagnostics)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;
    use std::path::PathBuf;

    fn test_diagnostic() -> Diagnostic {
        Diagnostic {
            rule_id: "approx-constant",
            message: "Approximate value of `std::f64::consts::PI` found. Consider using it directly.".to_string(),
            severity: Severity::Warning,
            file_path: PathBuf::from("test.rs"),
            line: 10,
            column: 5,
            end_line: Some(10),
            end_column: Some(9),
            suggestion: Some("Replace the literal with `std::f64::consts::PI`".to_string()),
        }
    }

    #[test]
    fn test_format_empty_diagnostics() {
        let result = format(&[]).unwrap();
        assert_eq!(result, "[]");
    }

    #[test]
    fn test_format_single_diagnostic() {
        let result = format(&[test_diagnostic()]).unwrap();

        assert!(result.contains(r#""rule_id": "approx-constant""#));
        assert!(result.contains("std::f64::consts::PI"));
        assert!(result.contains(r#""severity": "warning""#));
        assert!(result.contains(r#""line": 10"#));
        assert!(result.contains(r#""column": 5"#));
    }

    #[test]
    fn test_format_is_valid_json() {
        let result = format(&[test_diagnostic()]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }
}
