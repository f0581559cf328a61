use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use gazecore::analysis::pipeline::{AnalysisPipeline, AnalysisResult};
use gazecore::report::formatter::ReportFormatter;
use gazecore::report::plot::ScanpathPlot;
use gazecore::tracker_interface::{Aoi, GazeRecording};

/// Everything one run exports: the raw result object, the four tabular
/// blocks, and the plotting primitives.
pub struct ReportBundle {
    pub result: AnalysisResult,
    pub fixations_csv: String,
    pub dwell_time_csv: String,
    pub first_fixation_csv: String,
    pub scanpath_csv: String,
    pub plot: ScanpathPlot,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, recording: &GazeRecording, aois: &[Aoi]) -> anyhow::Result<ReportBundle> {
        let pipeline = AnalysisPipeline::new(self.config.to_analysis_config())
            .context("configuring analysis pipeline")?;
        let result = pipeline
            .run(&recording.points, aois)
            .with_context(|| format!("analyzing session '{}'", recording.metadata.name))?;

        let plot = ScanpathPlot::from_fixations(&result.fixations);
        Ok(ReportBundle {
            fixations_csv: ReportFormatter::fixations_table(&result),
            dwell_time_csv: ReportFormatter::dwell_time_table(&result),
            first_fixation_csv: ReportFormatter::first_fixation_table(&result),
            scanpath_csv: ReportFormatter::scanpath_summary_table(&result),
            plot,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::{build_synthetic_session, SessionProfile};
    use crate::generator::template::point_cluster;
    use gazecore::tracker_interface::{SessionMetadata, StimulusType};

    #[test]
    fn runner_executes_a_synthetic_workflow() {
        let profile = SessionProfile::default();
        let (recording, aois) = build_synthetic_session(&profile).unwrap();

        let runner = Runner::new(WorkflowConfig::from_args(0.03, 100.0, 0.0));
        let bundle = runner.execute(&recording, &aois).unwrap();

        assert!(!bundle.result.fixations.is_empty());
        assert_eq!(bundle.result.dwell_time.len(), aois.len() + 1);
        assert_eq!(bundle.result.first_fixation.len(), aois.len());
        assert_eq!(bundle.plot.markers.len(), bundle.result.fixations.len());
        assert!(bundle
            .fixations_csv
            .starts_with("id,start_time_s,end_time_s,duration_ms,x,y,point_count,aoi\n"));
        assert!(bundle.scanpath_csv.contains("aoi_sequence,"));
    }

    #[test]
    fn gaze_away_from_every_aoi_lands_in_the_outside_bucket() {
        let (_, aois) = build_synthetic_session(&SessionProfile::default()).unwrap();
        let recording = GazeRecording::new(
            point_cluster(0.1, 0.05, 12, 0.0, 0.02),
            SessionMetadata {
                name: "corner-stare".to_string(),
                stimulus: StimulusType::Image,
                duration_s: Some(0.24),
                sample_rate_hz: Some(50.0),
                description: None,
                timestamp_start: None,
            },
        );

        let runner = Runner::new(WorkflowConfig::from_args(0.03, 100.0, 0.0));
        let bundle = runner.execute(&recording, &aois).unwrap();

        assert_eq!(bundle.result.fixations.len(), 1);
        let outside = bundle.result.dwell_time.last().unwrap();
        assert_eq!(outside.fixation_count, 1);
        assert!((outside.percent_of_total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn bad_parameters_surface_as_errors() {
        let profile = SessionProfile::default();
        let (recording, aois) = build_synthetic_session(&profile).unwrap();

        let runner = Runner::new(WorkflowConfig::from_args(-1.0, 100.0, 0.0));
        assert!(runner.execute(&recording, &aois).is_err());
    }
}
