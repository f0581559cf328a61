use serde::{Deserialize, Serialize};

use crate::tracker_interface::{Aoi, Fixation};

/// Shared parameters for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub dispersion_threshold: f64,
    pub min_fixation_duration_ms: f64,
    pub video_start_time: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dispersion_threshold: 0.03,
            min_fixation_duration_ms: 100.0,
            video_start_time: 0.0,
        }
    }
}

impl AnalysisConfig {
    /// Contract check applied before any computation runs.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.dispersion_threshold.is_finite() || self.dispersion_threshold < 0.0 {
            return Err(AnalysisError::InvalidParameters(format!(
                "dispersion threshold {} must be finite and non-negative",
                self.dispersion_threshold
            )));
        }
        if !self.min_fixation_duration_ms.is_finite() || self.min_fixation_duration_ms <= 0.0 {
            return Err(AnalysisError::InvalidParameters(format!(
                "minimum fixation duration {} ms must be finite and positive",
                self.min_fixation_duration_ms
            )));
        }
        if !self.video_start_time.is_finite() {
            return Err(AnalysisError::InvalidParameters(
                "video start time must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Common error type for analysis execution.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error("invalid AOI: {0}")]
    InvalidAoi(String),
    #[error("invalid gaze data: {0}")]
    InvalidGazeData(String),
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type CoreResult<T> = Result<T, AnalysisError>;

/// Trait describing the metric analyzers fed by the fixation detector.
pub trait MetricAnalyzer {
    type Output;
    fn analyze(&self, fixations: &[Fixation], aois: &[Aoi]) -> Self::Output;
}
