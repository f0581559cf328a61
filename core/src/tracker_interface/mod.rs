pub mod aoi;
pub mod fixation;
pub mod gaze;

pub use aoi::{Aoi, AoiBounds};
pub use fixation::Fixation;
pub use gaze::{GazePoint, GazeRecording, SessionMetadata, StimulusType};
