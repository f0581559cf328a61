use serde::{Deserialize, Serialize};

use crate::prelude::{AnalysisError, CoreResult};

/// Stimulus kind a session was recorded against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StimulusType {
    Video,
    Image,
}

/// Describes the viewing session a recording was captured in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub name: String,
    pub stimulus: StimulusType,
    pub duration_s: Option<f64>,
    pub sample_rate_hz: Option<f64>,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_start: Option<f64>,
}

/// One raw observation from the upstream tracker.
///
/// `x`/`y` are normalized stimulus-relative coordinates and are not clamped:
/// values outside [0, 1] represent off-stimulus gaze and flow through the
/// analytics untouched. `screen_x`/`screen_y` are absolute display
/// coordinates kept for export only; no metric reads them. `frame_number` is
/// derived upstream and non-authoritative; ordering always follows
/// `timestamp`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GazePoint {
    pub timestamp: f64,
    pub frame_number: u64,
    pub x: f64,
    pub y: f64,
    pub screen_x: f64,
    pub screen_y: f64,
}

impl GazePoint {
    /// Boundary check: a non-finite timestamp or position would silently
    /// poison every downstream aggregate, so the whole sample is refused.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.timestamp.is_finite() {
            return Err(AnalysisError::InvalidGazeData(format!(
                "non-finite timestamp at frame {}",
                self.frame_number
            )));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(AnalysisError::InvalidGazeData(format!(
                "non-finite coordinates at frame {}",
                self.frame_number
            )));
        }
        Ok(())
    }
}

/// Full recording payload handed over by the capture pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazeRecording {
    pub points: Vec<GazePoint>,
    pub metadata: SessionMetadata,
}

impl GazeRecording {
    pub fn new(points: Vec<GazePoint>, metadata: SessionMetadata) -> Self {
        Self { points, metadata }
    }
}
