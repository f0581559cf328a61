use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::analysis::aoi_match::{AoiMatcher, OUTSIDE_AOIS};
use crate::math::geometry::GeometryHelper;
use crate::math::stats::StatsHelper;
use crate::prelude::MetricAnalyzer;
use crate::telemetry::log::LogManager;
use crate::tracker_interface::{Aoi, Fixation};

/// Square transition-count matrix over AOI labels. Row = source label,
/// column = destination label; the final label is always the outside bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionMatrix {
    pub labels: Vec<String>,
    pub counts: Array2<u64>,
}

impl TransitionMatrix {
    fn new(labels: Vec<String>) -> Self {
        let size = labels.len();
        Self {
            labels,
            counts: Array2::zeros((size, size)),
        }
    }

    pub fn count(&self, from: &str, to: &str) -> u64 {
        let from_index = self.labels.iter().position(|l| l == from);
        let to_index = self.labels.iter().position(|l| l == to);
        match (from_index, to_index) {
            (Some(i), Some(j)) => self.counts[[i, j]],
            _ => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Aggregate scanpath description for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanpathMetrics {
    pub total_length: f64,
    pub fixation_count: usize,
    pub total_duration_ms: f64,
    pub mean_fixation_duration_ms: f64,
    pub mean_saccade_amplitude: f64,
    pub saccade_amplitudes: Vec<f64>,
    pub aoi_sequence: Vec<String>,
    pub transition_matrix: TransitionMatrix,
}

pub struct ScanpathAnalyzer {
    logger: LogManager,
}

impl ScanpathAnalyzer {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }
}

impl Default for ScanpathAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricAnalyzer for ScanpathAnalyzer {
    type Output = ScanpathMetrics;

    fn analyze(&self, fixations: &[Fixation], aois: &[Aoi]) -> ScanpathMetrics {
        let mut ordered: Vec<&Fixation> = fixations.iter().collect();
        ordered.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        let mut amplitudes = Vec::new();
        for pair in ordered.windows(2) {
            amplitudes.push(GeometryHelper::distance(
                pair[0].x, pair[0].y, pair[1].x, pair[1].y,
            ));
        }
        let total_length: f64 = amplitudes.iter().sum();

        let mut labels: Vec<String> = aois.iter().map(|a| a.name.clone()).collect();
        labels.push(OUTSIDE_AOIS.to_string());
        let outside_index = aois.len();
        let mut transition_matrix = TransitionMatrix::new(labels);

        // Single-winner assignment per fixation; the outside bucket takes the
        // rest.
        let assigned: Vec<usize> = ordered
            .iter()
            .map(|f| AoiMatcher::match_index(f, aois).unwrap_or(outside_index))
            .collect();

        // Transitions count every consecutive pair of raw labels...
        for pair in assigned.windows(2) {
            transition_matrix.counts[[pair[0], pair[1]]] += 1;
        }

        // ...while the visit sequence collapses consecutive repeats only;
        // returning to an AOI later keeps every visit (A, B, A stays three
        // entries).
        let mut aoi_sequence: Vec<String> = Vec::new();
        for &index in &assigned {
            let name = &transition_matrix.labels[index];
            if aoi_sequence.last() != Some(name) {
                aoi_sequence.push(name.clone());
            }
        }

        let total_duration_ms: f64 = ordered.iter().map(|f| f.duration_ms).sum();
        let fixation_count = ordered.len();
        let mean_fixation_duration_ms = if fixation_count == 0 {
            0.0
        } else {
            total_duration_ms / fixation_count as f64
        };
        let mean_saccade_amplitude = StatsHelper::mean(&amplitudes);

        self.logger.record(&format!(
            "ScanpathAnalyzer length {:.4} transitions {}",
            total_length,
            transition_matrix.total()
        ));

        ScanpathMetrics {
            total_length,
            fixation_count,
            total_duration_ms,
            mean_fixation_duration_ms,
            mean_saccade_amplitude,
            saccade_amplitudes: amplitudes,
            aoi_sequence,
            transition_matrix,
        }
    }
}
