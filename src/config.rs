use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::Severity;

/// Maximum config file size (1 MB) - prevents memory exhaustion from malformed files
const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Name of the config file looked up next to the analyzed path
pub const CONFIG_FILE_NAME: &str = "cargo-approx.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules: HashMap<String, RuleSeverity>,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Deny,
    Warn,
    Allow,
}

impl From<RuleSeverity> for Option<Severity> {
    fn from(rs: RuleSeverity) -> Option<Severity> {
        match rs {
            RuleSeverity::Deny => Some(Severity::Error),
            RuleSeverity::Warn => Some(Severity::Warning),
            RuleSeverity::Allow => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_color")]
    pub color: String,
}

fn default_format() -> String {
    "console".to_string()
}

fn default_color() -> String {
    "auto".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Load config from cargo-approx.toml in the given path, or return default
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the project directory containing cargo-approx.toml
    ///
    /// # Errors
    ///
    /// Returns an error if the path doesn't exist or if the config file
    /// exists but cannot be parsed.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }

        // If path is a file, use its parent directory for config lookup
        let dir_path = if path.is_file() {
            path.parent().unwrap_or(path)
        } else {
            path
        };

        let config_path = dir_path.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let metadata = std::fs::metadata(&config_path)?;
            if metadata.len() > MAX_CONFIG_SIZE {
                anyhow::bail!(
                    "Config file too large ({} bytes, max {} bytes): {}",
                    metadata.len(),
                    MAX_CONFIG_SIZE,
                    config_path.display()
                );
            }

            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;

            Self::validate_rule_ids(&config);

            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Validate that configured rule IDs exist, warning about unknown ones.
    fn validate_rule_ids(config: &Config) {
        use crate::rules::registry;

        for rule_id in config.rules.keys() {
            if !registry::has_rule(rule_id) {
                eprintln!(
                    "Warning: Unknown rule '{}' in {} (will be ignored)",
                    rule_id, CONFIG_FILE_NAME
                );
            }
        }
    }

    /// Get the effective severity for a rule
    pub fn rule_severity(&self, rule_id: &str, default: Severity) -> Option<Severity> {
        match self.rules.get(rule_id) {
            Some(RuleSeverity::Allow) => None,
            Some(RuleSeverity::Warn) => Some(Severity::Warning),
            Some(RuleSeverity::Deny) => Some(Severity::Error),
            None => Some(default),
        }
    }

    /// Generate default TOML config
    pub fn default_toml() -> &'static str {
        r#"# cargo-approx configuration

[rules]
# Set rule severity: "deny" (error), "warn" (warning), "allow" (ignore)
# approx-constant = "warn"
# constant-condition = "warn"

[output]
format = "console"  # "console", "json", "sarif"
color = "auto"      # "auto", "always", "never"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert_eq!(config.output.format, "console");
        assert_eq!(config.output.color, "auto");
    }

    #[test]
    fn test_rule_severity_default() {
        let config = Config::default();
        assert_eq!(
            config.rule_severity("approx-constant", Severity::Warning),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_rule_severity_deny() {
        let mut config = Config::default();
        config
            .rules
            .insert("approx-constant".to_string(), RuleSeverity::Deny);
        assert_eq!(
            config.rule_severity("approx-constant", Severity::Warning),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_rule_severity_allow() {
        let mut config = Config::default();
        config
            .rules
            .insert("approx-constant".to_string(), RuleSeverity::Allow);
        assert_eq!(
            config.rule_severity("approx-constant", Severity::Warning),
            None
        );
    }

    #[test]
    fn test_load_or_default_nonexistent_path() {
        let result = Config::load_or_default(Path::new("/nonexistent/path"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_default(tmp.path()).unwrap();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_load_or_default_with_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_content = r#"
[rules]
approx-constant = "deny"
constant-condition = "allow"
"#;
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let config = Config::load_or_default(tmp.path()).unwrap();
        assert_eq!(
            config.rule_severity("approx-constant", Severity::Warning),
            Some(Severity::Error)
        );
        assert_eq!(
            config.rule_severity("constant-condition", Severity::Warning),
            None
        );
    }

    #[test]
    fn test_load_or_default_with_file_path() {
        let tmp = TempDir::new().unwrap();
        let config_content = r#"
[rules]
approx-constant = "warn"
"#;
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), config_content).unwrap();
        let file_path = tmp.path().join("some_file.rs");
        std::fs::write(&file_path, "").unwrap();

        // Should find config from parent directory when given a file
        let config = Config::load_or_default(&file_path).unwrap();
        assert_eq!(
            config.rule_severity("approx-constant", Severity::Error),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_load_invalid_config() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), "invalid { toml").unwrap();
        let result = Config::load_or_default(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(Config::default_toml()).unwrap();
        assert!(config.rules.is_empty());
        assert_eq!(config.output.format, "console");
    }

    #[test]
    fn test_rule_severity_from_conversion() {
        assert_eq!(
            Option::<Severity>::from(RuleSeverity::Deny),
            Some(Severity::Error)
        );
        assert_eq!(
            Option::<Severity>::from(RuleSeverity::Warn),
            Some(Severity::Warning)
        );
        assert_eq!(Option::<Severity>::from(RuleSeverity::Allow), None);
    }
}
