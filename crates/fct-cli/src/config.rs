//! Limits table for the self-test sequence.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// One measurement step: which switch channel to read and what passes.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Step name, used in the log.
    pub name: String,

    /// Switch unit channel the measurement routes through.
    pub channel: u16,

    /// Upper bound; absent means unconstrained above.
    #[serde(default)]
    pub max: Option<f64>,

    /// Lower bound; absent means unconstrained below.
    #[serde(default)]
    pub min: Option<f64>,

    /// Value the mock instrument answers during the dry run.
    pub sim: f64,
}

/// Limits file: log base name plus the measurement steps.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsFile {
    /// Base name of the daily log file.
    #[serde(default = "default_base_name")]
    pub base_name: String,

    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

fn default_base_name() -> String {
    "selftest".to_string()
}

impl LimitsFile {
    /// Load a limits table from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading limits file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing limits file {}", path.display()))
    }

    /// Built-in table used when no file is given: a pair of supply rails.
    pub fn builtin() -> Self {
        Self {
            base_name: default_base_name(),
            steps: vec![
                Step {
                    name: "rail_3v3".to_string(),
                    channel: 103,
                    max: Some(3.4),
                    min: Some(3.2),
                    sim: 3.31,
                },
                Step {
                    name: "rail_12v".to_string(),
                    channel: 104,
                    max: Some(12.6),
                    min: Some(11.4),
                    sim: 12.05,
                },
            ],
        }
    }
}
