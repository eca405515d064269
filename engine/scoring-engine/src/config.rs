use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};

/// Configuration for a scoring pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score the qualifying session only (race results are ignored)
    pub qualifying_only: bool,

    /// Chips played this round
    pub chips: ChipConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipConfig {
    /// Extra DRS: best driver scores x3 and the runner-up x2, instead of x2 for the best only
    pub extra_drs: bool,
}

impl ScoringConfig {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `F1_QUALIFYING_ONLY` and `F1_EXTRA_DRS` if they are set
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(value) = env_flag("F1_QUALIFYING_ONLY")? {
            self.qualifying_only = value;
        }
        if let Some(value) = env_flag("F1_EXTRA_DRS")? {
            self.chips.extra_drs = value;
        }
        Ok(self)
    }
}

fn env_flag(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(raw) => parse_flag(&raw)
            .map(Some)
            .ok_or_else(|| ScoringError::InvalidConfig { key: key.to_string(), value: raw }),
        Err(_) => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scores_full_weekend() {
        let config = ScoringConfig::default();
        assert!(!config.qualifying_only);
        assert!(!config.chips.extra_drs);
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("F1_EXTRA_DRS", "yes");
        let config = ScoringConfig::from_env().unwrap();
        assert!(config.chips.extra_drs);
        assert!(!config.qualifying_only);

        std::env::set_var("F1_QUALIFYING_ONLY", "sometimes");
        let err = ScoringConfig::from_env().unwrap_err();
        std::env::remove_var("F1_EXTRA_DRS");
        std::env::remove_var("F1_QUALIFYING_ONLY");

        assert_eq!(
            err,
            ScoringError::InvalidConfig {
                key: "F1_QUALIFYING_ONLY".to_string(),
                value: "sometimes".to_string()
            }
        );
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
