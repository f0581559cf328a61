use anyhow::Context;
use gazecore::tracker_interface::{Aoi, GazeRecording};
use std::fs;
use std::path::Path;

pub fn load_recording<P: AsRef<Path>>(path: P) -> anyhow::Result<GazeRecording> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading gaze recording {}", path_ref.display()))?;
    let recording: GazeRecording = serde_json::from_str(&contents)
        .with_context(|| format!("parsing gaze recording {}", path_ref.display()))?;
    Ok(recording)
}

pub fn load_aois<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Aoi>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading AOI list {}", path_ref.display()))?;
    let aois: Vec<Aoi> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing AOI list {}", path_ref.display()))?;
    Ok(aois)
}
