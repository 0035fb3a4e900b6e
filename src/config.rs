use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration problems are rejected when the detector is built,
/// never during per-step computation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("window_size must be a positive integer, got {0}")]
    WindowSize(usize),
    #[error("threshold must be a positive finite number, got {0}")]
    Threshold(f64),
    #[error("alpha must be in (0, 1], got {0}")]
    Alpha(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Number of recent values the z-score statistics are computed over.
    pub window_size: usize,
    /// A value is flagged when |z| strictly exceeds this.
    pub threshold: f64,
    /// Smoothing factor for the running EWMA.
    pub alpha: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_size: 50,
            threshold: 2.0,
            alpha: 0.3,
        }
    }
}

impl DetectorConfig {
    pub fn new(window_size: usize, threshold: f64, alpha: f64) -> Self {
        Self {
            window_size,
            threshold,
            alpha,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::WindowSize(self.window_size));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(ConfigError::Alpha(self.alpha));
        }
        Ok(())
    }
}
