//! Application configuration.
//!
//! The configuration is an optional JSON file, by default
//! `$XDG_CONFIG_HOME/hyprgroup/config.json`.  Every section and every key
//! may be omitted and falls back to its compiled-in default.
//!
//! # Example
//!
//! ```json
//! {
//!   "grouping": { "repeat": 3 },
//!   "dispatch": {
//!     "strategy": "batched",
//!     "max_batch_bytes": 8192
//!   }
//! }
//! ```

use crate::executor::Strategy;
use crate::planner::DEFAULT_REPEAT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// How windows are pulled into the group.
    #[serde(default)]
    pub grouping: GroupingConfig,

    /// How the plan is sent to the compositor.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Attach attempts per window.  Hyprland occasionally leaves a window
    /// outside the group after one `focuswindow` + `moveintogroup` round,
    /// so the round is repeated this many times.
    pub repeat: u32,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            repeat: DEFAULT_REPEAT,
        }
    }
}

/// Which dispatch strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// One `[[BATCH]]` exchange per `max_batch_bytes` of commands.
    #[default]
    Batched,
    /// One exchange per command.
    Sequential,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub strategy: StrategyKind,
    /// Upper bound on a single batch payload, marker included.  Longer
    /// plans are split across several exchanges.
    pub max_batch_bytes: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Batched,
            max_batch_bytes: 8192,
        }
    }
}

impl DispatchConfig {
    /// The executor strategy described by this section.
    pub fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyKind::Batched => Strategy::Batched {
                max_bytes: self.max_batch_bytes,
            },
            StrategyKind::Sequential => Strategy::Sequential,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "grouping": { "repeat": 5 },
            "dispatch": { "strategy": "sequential", "max_batch_bytes": 1024 }
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.grouping.repeat, 5);
        assert_eq!(cfg.dispatch.strategy, StrategyKind::Sequential);
        assert_eq!(cfg.dispatch.max_batch_bytes, 1024);
        assert_eq!(cfg.dispatch.strategy(), Strategy::Sequential);
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.grouping.repeat, DEFAULT_REPEAT);
        assert_eq!(cfg.dispatch.strategy, StrategyKind::Batched);
        assert_eq!(cfg.dispatch.max_batch_bytes, 8192);
        assert_eq!(
            cfg.dispatch.strategy(),
            Strategy::Batched { max_bytes: 8192 }
        );
    }

    #[test]
    fn deserialize_partial_dispatch() {
        let json = r#"{ "dispatch": { "max_batch_bytes": 512 } }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.dispatch.max_batch_bytes, 512);
        assert_eq!(cfg.dispatch.strategy, StrategyKind::Batched);
        assert_eq!(cfg.grouping.repeat, DEFAULT_REPEAT);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let json = r#"{ "dispatch": { "strategy": "parallel" } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "grouping": {}, "future_section": { "key": 42 } }"#;
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "hyprgroup-missing-{}.json",
            std::process::id()
        ));
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("config error: failed to read"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "hyprgroup-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "grouping": { "repeat": 1 } }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.grouping.repeat, 1);
        let _ = std::fs::remove_file(&path);
    }
}
