//! Service configuration management

use anyhow::{Context, Result};
use roster_optimizer::BudgetConfig;
use scoring_engine::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside a data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Main service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Scoring toggles and chips
    pub scoring: ScoringConfig,

    /// Roster spending caps
    pub budget: BudgetConfig,

    /// Service-level settings
    pub service: ServiceSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Data directory holding `input/` and `output/`
    pub data_dir: PathBuf,

    /// Round input file, relative to the data directory
    pub round_file: PathBuf,

    /// Report directory, relative to the data directory
    pub output_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            round_file: PathBuf::from("input/round.json"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl ServiceSettings {
    pub fn round_path(&self) -> PathBuf {
        self.data_dir.join(&self.round_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_dir)
    }
}

/// Load configuration from an optional TOML file, then environment variables
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let mut config = match path {
        Some(path) => {
            tracing::debug!("Loading configuration from file: {:?}", path);
            load_from_file(path)?
        }
        None => ServiceConfig::default(),
    };

    // Override with environment variables
    load_from_env(&mut config)?;

    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path) -> Result<ServiceConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {:?}", path))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse configuration file: {:?}", path))
}

/// Load configuration from environment variables
fn load_from_env(config: &mut ServiceConfig) -> Result<()> {
    config.scoring = config
        .scoring
        .clone()
        .with_env_overrides()
        .context("Invalid scoring override in environment")?;
    config.budget = config
        .budget
        .clone()
        .with_env_overrides()
        .context("Invalid budget override in environment")?;

    if let Ok(data_dir) = std::env::var("F1_DATA_DIR") {
        config.service.data_dir = PathBuf::from(data_dir);
    }

    if let Ok(level) = std::env::var("F1_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("F1_LOG_FORMAT") {
        config.logging.format = format;
    }

    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &ServiceConfig) -> Result<()> {
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow::anyhow!("Invalid log level: {}", config.logging.level)),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" => {}
        _ => return Err(anyhow::anyhow!("Invalid log format: {}", config.logging.format)),
    }

    let budget = &config.budget;
    for (name, cap) in [
        ("max_drivers_cost", budget.max_drivers_cost),
        ("max_constructors_cost", budget.max_constructors_cost),
        ("max_total_cost", budget.max_total_cost),
    ] {
        if cap.is_sign_negative() {
            return Err(anyhow::anyhow!("Invalid budget {}: {}", name, cap));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [scoring]
            qualifying_only = true

            [budget]
            max_total_cost = 101.5
            "#,
        )
        .unwrap();

        assert!(config.scoring.qualifying_only);
        assert!(!config.scoring.chips.extra_drs);
        assert_eq!(config.budget.max_total_cost, dec!(101.5));
        assert_eq!(config.budget.max_drivers_cost, dec!(100));
        assert_eq!(config.service, ServiceSettings::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_serialized_config_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = ServiceConfig::default();
        config.scoring.chips.extra_drs = true;
        config.budget.max_constructors_cost = dec!(42.3);
        config.logging.format = "json".to_string();

        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ServiceConfig::default();
        assert!(validate_config(&config).is_ok());

        config.logging.level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.logging.format = "xml".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.budget.max_total_cost = dec!(-0.1);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_paths_are_relative_to_data_dir() {
        let settings = ServiceSettings { data_dir: PathBuf::from("/tmp/f1"), ..Default::default() };
        assert_eq!(settings.round_path(), PathBuf::from("/tmp/f1/input/round.json"));
        assert_eq!(settings.output_path(), PathBuf::from("/tmp/f1/output"));
    }
}
