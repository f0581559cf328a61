pub mod formatter;
pub mod plot;

pub use formatter::ReportFormatter;
pub use plot::{FixationMarker, SaccadeSegment, ScanpathPlot};
