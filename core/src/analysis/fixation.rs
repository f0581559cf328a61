use crate::math::geometry::GeometryHelper;
use crate::prelude::{AnalysisConfig, CoreResult};
use crate::telemetry::log::LogManager;
use crate::tracker_interface::{Fixation, GazePoint};

/// Dispersion-threshold (I-DT) fixation detector.
///
/// A window slides over the time-sorted samples. It is first grown until it
/// spans the minimum duration, accepted only if its exact max-pairwise
/// dispersion stays within the threshold, then greedily extended one sample
/// at a time until the first violation and emitted as a single fixation. A
/// consumed window is never revisited.
pub struct FixationDetector {
    dispersion_threshold: f64,
    min_duration_ms: f64,
    logger: LogManager,
}

impl FixationDetector {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            dispersion_threshold: config.dispersion_threshold,
            min_duration_ms: config.min_fixation_duration_ms,
            logger: LogManager::new(),
        }
    }

    /// Runs I-DT over one session of raw samples. The input is re-sorted by
    /// timestamp (stable, so equal stamps keep their relative order); fewer
    /// than two samples can never span the minimum duration and yield an
    /// empty list.
    pub fn detect(&self, points: &[GazePoint]) -> CoreResult<Vec<Fixation>> {
        for point in points {
            point.validate()?;
        }
        if points.len() < 2 {
            return Ok(Vec::new());
        }

        let mut sorted: Vec<GazePoint> = points.to_vec();
        sorted.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

        let mut fixations: Vec<Fixation> = Vec::new();
        let mut window_start = 0;

        while window_start < sorted.len() {
            // Grow until the window spans the minimum duration.
            let mut window_end = window_start;
            while window_end < sorted.len()
                && Self::span_ms(&sorted[window_start], &sorted[window_end]) < self.min_duration_ms
            {
                window_end += 1;
            }
            if window_end == sorted.len() {
                // The remaining tail cannot reach the minimum duration; it is
                // discarded rather than reported as a short fixation.
                break;
            }

            if GeometryHelper::dispersion(&sorted[window_start..=window_end])
                > self.dispersion_threshold
            {
                window_start += 1;
                continue;
            }

            // Extend until the first sample whose inclusion breaks the
            // threshold. Dispersion is recomputed over the full candidate
            // window each step so boundary decisions stay exact.
            while window_end + 1 < sorted.len()
                && GeometryHelper::dispersion(&sorted[window_start..=window_end + 1])
                    <= self.dispersion_threshold
            {
                window_end += 1;
            }

            if Self::span_ms(&sorted[window_start], &sorted[window_end]) >= self.min_duration_ms {
                let run = sorted[window_start..=window_end].to_vec();
                fixations.push(Fixation::from_run(fixations.len() + 1, run));
            }
            window_start = window_end + 1;
        }

        self.logger
            .record(&format!("FixationDetector fixations {}", fixations.len()));
        Ok(fixations)
    }

    fn span_ms(first: &GazePoint, last: &GazePoint) -> f64 {
        (last.timestamp - first.timestamp) * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::AnalysisError;

    fn sample(timestamp: f64, x: f64, y: f64) -> GazePoint {
        GazePoint {
            timestamp,
            frame_number: (timestamp * 30.0) as u64,
            x,
            y,
            screen_x: x * 1920.0,
            screen_y: y * 1080.0,
        }
    }

    fn detector(threshold: f64, min_duration_ms: f64) -> FixationDetector {
        FixationDetector::new(&AnalysisConfig {
            dispersion_threshold: threshold,
            min_fixation_duration_ms: min_duration_ms,
            video_start_time: 0.0,
        })
    }

    #[test]
    fn stable_cluster_becomes_one_fixation_and_the_tail_is_discarded() {
        let points = vec![
            sample(0.0, 0.5, 0.5),
            sample(0.05, 0.51, 0.49),
            sample(0.12, 0.50, 0.50),
            sample(0.30, 0.9, 0.9),
        ];

        let fixations = detector(0.03, 100.0).detect(&points).unwrap();
        assert_eq!(fixations.len(), 1);

        let fixation = &fixations[0];
        assert_eq!(fixation.id, 1);
        assert_eq!(fixation.point_count, 3);
        assert!((fixation.duration_ms - 120.0).abs() < 1e-9);
        assert!((fixation.x - 0.50333).abs() < 1e-3);
        assert!((fixation.y - 0.49667).abs() < 1e-3);
    }

    #[test]
    fn two_clusters_yield_ordered_ids_and_start_times() {
        let mut points = Vec::new();
        for i in 0..8 {
            points.push(sample(i as f64 * 0.02, 0.3, 0.3));
        }
        for i in 0..8 {
            points.push(sample(0.5 + i as f64 * 0.02, 0.8, 0.8));
        }

        let fixations = detector(0.03, 100.0).detect(&points).unwrap();
        assert_eq!(fixations.len(), 2);
        assert_eq!(fixations[0].id, 1);
        assert_eq!(fixations[1].id, 2);
        assert!(fixations[0].start_time <= fixations[1].start_time);
        for fixation in &fixations {
            assert!(fixation.duration_ms >= 100.0 - 1e-9);
            assert!(GeometryHelper::dispersion(&fixation.points) <= 0.03);
        }
    }

    #[test]
    fn dispersion_equal_to_threshold_still_qualifies() {
        let points = vec![sample(0.0, 0.0, 0.0), sample(0.15, 0.03, 0.0)];
        let fixations = detector(0.03, 100.0).detect(&points).unwrap();
        assert_eq!(fixations.len(), 1);
        assert_eq!(fixations[0].point_count, 2);
    }

    #[test]
    fn noisy_window_slides_forward_until_a_stable_run_appears() {
        let mut points = vec![
            sample(0.0, 0.1, 0.1),
            sample(0.04, 0.9, 0.9),
            sample(0.08, 0.1, 0.8),
        ];
        for i in 0..8 {
            points.push(sample(0.2 + i as f64 * 0.02, 0.5, 0.5));
        }

        let fixations = detector(0.03, 100.0).detect(&points).unwrap();
        assert_eq!(fixations.len(), 1);
        assert!((fixations[0].x - 0.5).abs() < 1e-9);
        assert!(fixations[0].start_time >= 0.2);
    }

    #[test]
    fn fewer_than_two_points_yield_nothing() {
        let detector = detector(0.03, 100.0);
        assert!(detector.detect(&[]).unwrap().is_empty());
        assert!(detector.detect(&[sample(0.0, 0.5, 0.5)]).unwrap().is_empty());
    }

    #[test]
    fn unsorted_input_is_resorted_before_detection() {
        let points = vec![
            sample(0.12, 0.50, 0.50),
            sample(0.0, 0.5, 0.5),
            sample(0.30, 0.9, 0.9),
            sample(0.05, 0.51, 0.49),
        ];
        let fixations = detector(0.03, 100.0).detect(&points).unwrap();
        assert_eq!(fixations.len(), 1);
        assert_eq!(fixations[0].start_time, 0.0);
        assert_eq!(fixations[0].end_time, 0.12);
    }

    #[test]
    fn non_finite_sample_fails_the_call() {
        let points = vec![sample(0.0, 0.5, 0.5), sample(0.1, f64::NAN, 0.5)];
        let result = detector(0.03, 100.0).detect(&points);
        assert!(matches!(result, Err(AnalysisError::InvalidGazeData(_))));
    }
}
