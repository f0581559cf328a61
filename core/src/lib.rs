//! Fixation-detection and AOI analytics core for the gaze replay platform.
//!
//! The modules turn the raw sample stream produced by the upstream tracker
//! into fixations and per-AOI research metrics, as a deterministic function
//! over explicit inputs: gaze points, user-drawn AOIs, and thresholds go in,
//! an `AnalysisResult` comes out. No hidden session state, no I/O.

pub mod analysis;
pub mod math;
pub mod prelude;
pub mod report;
pub mod telemetry;
pub mod tracker_interface;

pub use prelude::{AnalysisConfig, AnalysisError, CoreResult, MetricAnalyzer};
