use serde::{Deserialize, Serialize};

use crate::tracker_interface::Fixation;

/// Marker radius range in normalized stimulus units. The replay UI scales
/// these to pixels.
const MIN_RADIUS: f64 = 0.01;
const MAX_RADIUS: f64 = 0.05;

/// One rendered fixation: centroid position plus a radius scaled by how long
/// the fixation lasted relative to the rest of the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FixationMarker {
    pub fixation_id: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// One saccade line between two consecutive fixations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SaccadeSegment {
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
}

/// Plotting-ready scanpath primitives. Pure data; drawing happens in the
/// replay UI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanpathPlot {
    pub markers: Vec<FixationMarker>,
    pub segments: Vec<SaccadeSegment>,
}

impl ScanpathPlot {
    pub fn from_fixations(fixations: &[Fixation]) -> Self {
        let mut ordered: Vec<&Fixation> = fixations.iter().collect();
        ordered.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        let min_duration = ordered
            .iter()
            .map(|f| f.duration_ms)
            .fold(f64::INFINITY, f64::min);
        let max_duration = ordered
            .iter()
            .map(|f| f.duration_ms)
            .fold(f64::NEG_INFINITY, f64::max);
        let span = max_duration - min_duration;

        let markers = ordered
            .iter()
            .map(|f| {
                // With a single duration value the interpolation has no span;
                // every marker sits at the midpoint radius.
                let t = if span > 0.0 {
                    (f.duration_ms - min_duration) / span
                } else {
                    0.5
                };
                FixationMarker {
                    fixation_id: f.id,
                    x: f.x,
                    y: f.y,
                    radius: MIN_RADIUS + t * (MAX_RADIUS - MIN_RADIUS),
                }
            })
            .collect();

        let segments = ordered
            .windows(2)
            .map(|pair| SaccadeSegment {
                from_x: pair[0].x,
                from_y: pair[0].y,
                to_x: pair[1].x,
                to_y: pair[1].y,
            })
            .collect();

        Self { markers, segments }
    }
}
