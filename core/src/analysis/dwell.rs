use serde::{Deserialize, Serialize};

use crate::analysis::aoi_match::{AoiMatcher, OUTSIDE_AOIS};
use crate::math::geometry::GeometryHelper;
use crate::prelude::MetricAnalyzer;
use crate::telemetry::log::LogManager;
use crate::tracker_interface::{Aoi, Fixation};

/// Dwell statistics for one AOI. `aoi_id` is `None` for the synthetic
/// outside-of-all-AOIs bucket appended after the caller's AOIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DwellTimeStats {
    pub aoi_id: Option<u64>,
    pub aoi_name: String,
    pub total_dwell_ms: f64,
    pub fixation_count: usize,
    pub mean_fixation_duration_ms: f64,
    pub percent_of_total: f64,
}

pub struct DwellTimeAggregator {
    logger: LogManager,
}

impl DwellTimeAggregator {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    fn bucket(
        aoi_id: Option<u64>,
        aoi_name: String,
        matched: &[&Fixation],
        session_total_ms: f64,
    ) -> DwellTimeStats {
        let total_dwell_ms: f64 = matched.iter().map(|f| f.duration_ms).sum();
        let fixation_count = matched.len();
        let mean_fixation_duration_ms = if fixation_count == 0 {
            0.0
        } else {
            total_dwell_ms / fixation_count as f64
        };
        let percent_of_total = if session_total_ms > 0.0 {
            total_dwell_ms / session_total_ms * 100.0
        } else {
            0.0
        };
        DwellTimeStats {
            aoi_id,
            aoi_name,
            total_dwell_ms,
            fixation_count,
            mean_fixation_duration_ms,
            percent_of_total,
        }
    }
}

impl Default for DwellTimeAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricAnalyzer for DwellTimeAggregator {
    type Output = Vec<DwellTimeStats>;

    /// Every AOI is credited independently: a fixation inside two overlapping
    /// rectangles counts toward both, so percentages can exceed 100 across
    /// overlapping AOIs. Only the outside bucket uses the single-winner rule
    /// and therefore holds exactly the fixations no AOI claims.
    fn analyze(&self, fixations: &[Fixation], aois: &[Aoi]) -> Self::Output {
        let session_total_ms: f64 = fixations.iter().map(|f| f.duration_ms).sum();

        let mut stats = Vec::with_capacity(aois.len() + 1);
        for aoi in aois {
            let matched: Vec<&Fixation> = fixations
                .iter()
                .filter(|f| GeometryHelper::contains_point(&aoi.bounds, f.x, f.y))
                .collect();
            stats.push(Self::bucket(
                Some(aoi.id),
                aoi.name.clone(),
                &matched,
                session_total_ms,
            ));
        }

        let outside: Vec<&Fixation> = fixations
            .iter()
            .filter(|f| AoiMatcher::match_fixation(f, aois).is_none())
            .collect();
        stats.push(Self::bucket(
            None,
            OUTSIDE_AOIS.to_string(),
            &outside,
            session_total_ms,
        ));

        self.logger
            .record(&format!("DwellTimeAggregator buckets {}", stats.len()));
        stats
    }
}
