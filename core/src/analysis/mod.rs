pub mod aoi_match;
pub mod dwell;
pub mod first_fixation;
pub mod fixation;
pub mod pipeline;
pub mod scanpath;

pub use aoi_match::{AoiMatcher, OUTSIDE_AOIS};
pub use dwell::{DwellTimeAggregator, DwellTimeStats};
pub use first_fixation::{FirstFixationAnalyzer, FirstFixationMetrics};
pub use fixation::FixationDetector;
pub use pipeline::{AnalysisPipeline, AnalysisResult};
pub use scanpath::{ScanpathAnalyzer, ScanpathMetrics, TransitionMatrix};
