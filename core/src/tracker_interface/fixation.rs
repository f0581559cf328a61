use serde::{Deserialize, Serialize};

use crate::math::geometry::GeometryHelper;
use crate::tracker_interface::GazePoint;

/// A temporally stable gaze cluster emitted by the detector.
///
/// Ids are 1-based and assigned in detection order. `points` is the
/// contiguous run of raw samples the cluster was built from; it is owned by
/// the fixation and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixation {
    pub id: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub duration_ms: f64,
    pub x: f64,
    pub y: f64,
    pub point_count: usize,
    pub points: Vec<GazePoint>,
}

impl Fixation {
    /// Builds a fixation from a time-ordered sample run: start/end from the
    /// first/last sample, centroid over the whole run.
    pub fn from_run(id: usize, points: Vec<GazePoint>) -> Self {
        let start_time = points.first().map(|p| p.timestamp).unwrap_or(0.0);
        let end_time = points.last().map(|p| p.timestamp).unwrap_or(0.0);
        let (x, y) = GeometryHelper::centroid(&points);
        Self {
            id,
            start_time,
            end_time,
            duration_ms: (end_time - start_time) * 1000.0,
            x,
            y,
            point_count: points.len(),
            points,
        }
    }
}
