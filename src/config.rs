//! Service configuration
//!
//! Loaded from a YAML file at startup. Every section has defaults, so a
//! missing or partial file still yields a runnable service.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directory::PatientRecord;
use crate::monitor::ToleranceConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub monitor: ToleranceConfig,
    /// Patient records registered in the directory at startup
    pub patients: Vec<PatientRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Validation(String),
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.monitor.temperature_drop <= 0.0 {
        return Err(ConfigError::Validation(
            "monitor.temperature_drop must be positive".to_string(),
        ));
    }
    if config.api.port == 0 {
        return Err(ConfigError::Validation(
            "api.port must be nonzero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.monitor.temperature_drop, 1.5);
        assert_eq!(config.monitor.fever_threshold, 37.0);
        assert!(config.patients.is_empty());
    }

    #[test]
    fn full_document_parses() {
        let content = r#"
api:
  host: 0.0.0.0
  port: 8080
monitor:
  temperature_drop: 2.0
  fever_threshold: 38.0
patients:
  - id: "1"
    first_name: Koly
    last_name: Petrov
    birth_date: "2025-03-05"
    baseline:
      normal_temperature: 36.6
      normal_blood_pressure:
        systolic: 120
        diastolic: 80
"#;

        let config = parse_config(content).unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.monitor.temperature_drop, 2.0);
        assert_eq!(config.patients.len(), 1);
        assert_eq!(config.patients[0].baseline.normal_blood_pressure.systolic, 120);
    }

    #[test]
    fn nonpositive_temperature_drop_is_rejected() {
        let result = parse_config("monitor:\n  temperature_drop: 0.0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
