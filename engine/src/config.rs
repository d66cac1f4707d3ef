use std::path::Path;

use serde::{Deserialize, Serialize};

const DEFAULT_RESET_DELAY_SECS: u64 = 3;
const MAX_RESET_DELAY_SECS: u64 = 300;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub reset_delay_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reset_delay_secs: DEFAULT_RESET_DELAY_SECS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.reset_delay_secs == 0 {
            return Err("Reset delay must be at least 1 second".to_string());
        }
        if self.reset_delay_secs > MAX_RESET_DELAY_SECS {
            return Err(format!(
                "Reset delay ({}) cannot exceed {} seconds",
                self.reset_delay_secs, MAX_RESET_DELAY_SECS
            ));
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    // A missing file means defaults; a file that exists but cannot be read
    // or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_matches_game_over_display_time() {
        let config = EngineConfig::default();
        assert_eq!(config.reset_delay_secs, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml() {
        let config = EngineConfig::from_yaml("reset_delay_secs: 5").unwrap();
        assert_eq!(config.reset_delay_secs, 5);
    }

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let config = EngineConfig::from_yaml("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_zero_delay_is_rejected() {
        let config = EngineConfig {
            reset_delay_secs: 0,
        };
        assert!(config.validate().is_err());
        assert!(EngineConfig::from_yaml("reset_delay_secs: 0").is_err());
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = EngineConfig {
            reset_delay_secs: 301,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load("/nonexistent/tictactoe-engine.yaml").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
