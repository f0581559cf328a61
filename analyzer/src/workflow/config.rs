use anyhow::Context;
use gazecore::prelude::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub dispersion_threshold: f64,
    pub min_fixation_duration_ms: f64,
    #[serde(default)]
    pub video_start_time: f64,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        dispersion_threshold: f64,
        min_fixation_duration_ms: f64,
        video_start_time: f64,
    ) -> Self {
        Self {
            dispersion_threshold,
            min_fixation_duration_ms,
            video_start_time,
        }
    }

    pub fn to_analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            dispersion_threshold: self.dispersion_threshold,
            min_fixation_duration_ms: self.min_fixation_duration_ms,
            video_start_time: self.video_start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_analysis_config() {
        let cfg = WorkflowConfig::from_args(0.05, 80.0, 1.5);
        let analysis = cfg.to_analysis_config();
        assert_eq!(analysis.dispersion_threshold, 0.05);
        assert_eq!(analysis.min_fixation_duration_ms, 80.0);
        assert_eq!(analysis.video_start_time, 1.5);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"dispersion_threshold: 0.04\nmin_fixation_duration_ms: 120\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.dispersion_threshold, 0.04);
        assert_eq!(cfg.min_fixation_duration_ms, 120.0);
        assert_eq!(cfg.video_start_time, 0.0);
    }
}
