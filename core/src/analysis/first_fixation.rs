use serde::{Deserialize, Serialize};

use crate::analysis::aoi_match::AoiMatcher;
use crate::prelude::{AnalysisConfig, MetricAnalyzer};
use crate::telemetry::log::LogManager;
use crate::tracker_interface::{Aoi, Fixation};

/// Entry metrics for one AOI. The time and position fields stay `None` when
/// the AOI is never entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstFixationMetrics {
    pub aoi_id: u64,
    pub aoi_name: String,
    pub time_to_first_fixation_ms: Option<f64>,
    pub first_fixation_duration_ms: Option<f64>,
    pub first_fixation_x: Option<f64>,
    pub first_fixation_y: Option<f64>,
    pub entry_count: usize,
}

/// Computes time-to-first-fixation and entry counts, one record per AOI in
/// caller order. Assignment is single-winner: a fixation inside two
/// overlapping AOIs belongs to the first listed one only.
pub struct FirstFixationAnalyzer {
    video_start_time: f64,
    logger: LogManager,
}

impl FirstFixationAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            video_start_time: config.video_start_time,
            logger: LogManager::new(),
        }
    }
}

impl MetricAnalyzer for FirstFixationAnalyzer {
    type Output = Vec<FirstFixationMetrics>;

    fn analyze(&self, fixations: &[Fixation], aois: &[Aoi]) -> Self::Output {
        let mut ordered: Vec<&Fixation> = fixations.iter().collect();
        ordered.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        let assigned: Vec<Option<usize>> = ordered
            .iter()
            .map(|f| AoiMatcher::match_index(f, aois))
            .collect();

        let mut metrics = Vec::with_capacity(aois.len());
        for (aoi_index, aoi) in aois.iter().enumerate() {
            let mut record = FirstFixationMetrics {
                aoi_id: aoi.id,
                aoi_name: aoi.name.clone(),
                time_to_first_fixation_ms: None,
                first_fixation_duration_ms: None,
                first_fixation_x: None,
                first_fixation_y: None,
                entry_count: 0,
            };

            // was_in_aoi starts false, so a session whose very first fixation
            // lands inside the AOI counts that as entry one.
            let mut was_in_aoi = false;
            for (fixation, assignment) in ordered.iter().zip(&assigned) {
                let in_aoi = *assignment == Some(aoi_index);
                if in_aoi && !was_in_aoi {
                    record.entry_count += 1;
                }
                if in_aoi && record.time_to_first_fixation_ms.is_none() {
                    record.time_to_first_fixation_ms =
                        Some((fixation.start_time - self.video_start_time) * 1000.0);
                    record.first_fixation_duration_ms = Some(fixation.duration_ms);
                    record.first_fixation_x = Some(fixation.x);
                    record.first_fixation_y = Some(fixation.y);
                }
                was_in_aoi = in_aoi;
            }
            metrics.push(record);
        }

        let entered = metrics
            .iter()
            .filter(|m| m.time_to_first_fixation_ms.is_some())
            .count();
        self.logger.record(&format!(
            "FirstFixationAnalyzer entered {} of {}",
            entered,
            metrics.len()
        ));
        metrics
    }
}
