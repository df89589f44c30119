use anyhow::{Context, Result};
use monty_game::DEFAULT_TRIALS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trial count acceptance sweeps never go below.
pub const ACCEPTANCE_MIN_TRIALS: usize = 10_000;

/// Run settings loadable from a JSON file. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "RunConfig::default_trials")]
    pub trials: usize,
    #[serde(default)]
    pub seeds: Vec<String>,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default = "RunConfig::default_tolerance")]
    pub tolerance: f64,
}

impl RunConfig {
    const fn default_trials() -> usize {
        DEFAULT_TRIALS
    }

    const fn default_tolerance() -> f64 {
        0.03
    }

    /// Read a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Trial count after acceptance mode has had its say.
    #[must_use]
    pub fn effective_trials(&self, acceptance: bool) -> usize {
        if acceptance {
            if self.trials < ACCEPTANCE_MIN_TRIALS {
                log::info!(
                    "acceptance mode: raising trials from {} to {ACCEPTANCE_MIN_TRIALS}",
                    self.trials
                );
            }
            self.trials.max(ACCEPTANCE_MIN_TRIALS)
        } else {
            self.trials
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials: Self::default_trials(),
            seeds: Vec::new(),
            parallel: false,
            tolerance: Self::default_tolerance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = RunConfig::from_json("{}").unwrap();
        assert_eq!(cfg, RunConfig::default());
        assert_eq!(cfg.trials, 100);
    }

    #[test]
    fn partial_config_overrides_fields() {
        let cfg =
            RunConfig::from_json(r#"{"trials": 500, "seeds": ["7", "8"], "parallel": true}"#)
                .unwrap();
        assert_eq!(cfg.trials, 500);
        assert_eq!(cfg.seeds, vec!["7".to_string(), "8".to_string()]);
        assert!(cfg.parallel);
        assert!((cfg.tolerance - 0.03).abs() < f64::EPSILON);
    }

    #[test]
    fn acceptance_raises_small_trial_counts() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.effective_trials(false), 100);
        assert_eq!(cfg.effective_trials(true), ACCEPTANCE_MIN_TRIALS);
        let big = RunConfig {
            trials: 50_000,
            ..RunConfig::default()
        };
        assert_eq!(big.effective_trials(true), 50_000);
    }

    #[test]
    fn load_reports_missing_file() {
        let missing = std::env::temp_dir().join("monty-sim-config-does-not-exist.json");
        let err = RunConfig::load(&missing).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
