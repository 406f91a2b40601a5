//! Scoring configuration loaded from JSON

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_true() -> bool {
    true
}

/// Parameters of a deformation scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Buffer width in meters; `None` disables buffering (full weight)
    #[serde(default)]
    pub buffer_m: Option<f64>,

    /// Densify the contour to half the buffer width before scoring
    #[serde(default = "default_true")]
    pub densify: bool,

    /// Score grid points on the rayon thread pool
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Grid spacing in degrees when the grid is generated from the contour
    #[serde(default)]
    pub grid_step_deg: Option<f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            buffer_m: None,
            densify: true,
            parallel: true,
            grid_step_deg: None,
        }
    }
}

impl ScoringConfig {
    /// Parses and validates a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks that every configured distance is positive and finite
    pub fn validate(&self) -> Result<()> {
        check_positive("buffer_m", self.buffer_m)?;
        check_positive("grid_step_deg", self.grid_step_deg)
    }
}

fn check_positive(name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(Error::InvalidParameter(format!(
            "{} must be positive, got {}",
            name, v
        ))),
        _ => Ok(()),
    }
}
