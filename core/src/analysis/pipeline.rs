use serde::{Deserialize, Serialize};

use crate::analysis::aoi_match::AoiMatcher;
use crate::analysis::dwell::{DwellTimeAggregator, DwellTimeStats};
use crate::analysis::first_fixation::{FirstFixationAnalyzer, FirstFixationMetrics};
use crate::analysis::fixation::FixationDetector;
use crate::analysis::scanpath::{ScanpathAnalyzer, ScanpathMetrics};
use crate::prelude::{AnalysisConfig, CoreResult, MetricAnalyzer};
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;
use crate::tracker_interface::{Aoi, Fixation, GazePoint};

/// Combined output of one analysis run.
///
/// `fixation_aois` holds the single-winner AOI label for each entry of
/// `fixations`, in the same order. The dwell rows are the one place a
/// fixation this labeling gave to an earlier AOI can still be credited to an
/// overlapping later one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub fixations: Vec<Fixation>,
    pub fixation_aois: Vec<String>,
    pub dwell_time: Vec<DwellTimeStats>,
    pub first_fixation: Vec<FirstFixationMetrics>,
    pub scanpath: ScanpathMetrics,
}

/// End-to-end analytics entry point: a deterministic function from explicit
/// inputs to an `AnalysisResult`. Re-running with identical inputs produces
/// bit-identical output: nothing here reads the clock or a RNG.
pub struct AnalysisPipeline {
    config: AnalysisConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl AnalysisPipeline {
    pub fn new(config: AnalysisConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn run(&self, points: &[GazePoint], aois: &[Aoi]) -> CoreResult<AnalysisResult> {
        match self.execute(points, aois) {
            Ok(result) => {
                self.metrics.record_completed();
                let (completed, rejected) = self.metrics.snapshot();
                self.logger.record(&format!(
                    "AnalysisPipeline run {} complete, fixations {}, rejected {}",
                    completed,
                    result.fixations.len(),
                    rejected
                ));
                Ok(result)
            }
            Err(err) => {
                self.metrics.record_rejected();
                self.logger
                    .record_rejection(&format!("AnalysisPipeline rejected input: {}", err));
                Err(err)
            }
        }
    }

    fn execute(&self, points: &[GazePoint], aois: &[Aoi]) -> CoreResult<AnalysisResult> {
        for aoi in aois {
            aoi.validate()?;
        }

        let fixations = FixationDetector::new(&self.config).detect(points)?;
        let fixation_aois = AoiMatcher::labels(&fixations, aois);

        let dwell_time = DwellTimeAggregator::new().analyze(&fixations, aois);
        let scanpath = ScanpathAnalyzer::new().analyze(&fixations, aois);
        let first_fixation = FirstFixationAnalyzer::new(&self.config).analyze(&fixations, aois);

        Ok(AnalysisResult {
            fixations,
            fixation_aois,
            dwell_time,
            first_fixation,
            scanpath,
        })
    }
}
