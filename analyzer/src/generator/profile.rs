use anyhow::Context;
use gazecore::tracker_interface::{
    Aoi, AoiBounds, GazePoint, GazeRecording, SessionMetadata, StimulusType,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const PALETTE: [&str; 5] = ["#e74c3c", "#3498db", "#2ecc71", "#f1c40f", "#9b59b6"];

/// Configuration for generating a synthetic viewing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionProfile {
    pub aoi_count: usize,
    pub visits_per_aoi: usize,
    pub samples_per_fixation: usize,
    pub sample_interval_s: f64,
    pub jitter: f64,
    pub seed: u64,
    pub stimulus: StimulusType,
    pub description: Option<String>,
}

impl Default for SessionProfile {
    fn default() -> Self {
        Self {
            aoi_count: 3,
            visits_per_aoi: 2,
            samples_per_fixation: 8,
            sample_interval_s: 0.02,
            jitter: 0.005,
            seed: 0,
            stimulus: StimulusType::Video,
            description: None,
        }
    }
}

impl SessionProfile {
    fn normalized_aoi_count(&self) -> usize {
        self.aoi_count.max(1)
    }

    fn normalized_interval(&self) -> f64 {
        if self.sample_interval_s > 0.0 {
            self.sample_interval_s
        } else {
            0.02
        }
    }

    fn normalized_jitter(&self) -> f64 {
        self.jitter.abs().max(1e-6)
    }
}

/// Builds a seeded session whose gaze wanders between the AOI centers,
/// dwelling long enough at each stop for the detector to find a fixation.
/// Identical profiles produce identical recordings.
pub fn build_synthetic_session(
    profile: &SessionProfile,
) -> anyhow::Result<(GazeRecording, Vec<Aoi>)> {
    let aoi_count = profile.normalized_aoi_count();
    let samples_per_fixation = profile.samples_per_fixation.max(2);
    let total_samples = aoi_count
        .checked_mul(profile.visits_per_aoi.max(1))
        .and_then(|v| v.checked_mul(samples_per_fixation))
        .context("overflow computing sample count for generator")?;

    // Evenly spaced AOI rectangles across the stimulus width.
    let slot = 1.0 / aoi_count as f64;
    let mut aois = Vec::with_capacity(aoi_count);
    for index in 0..aoi_count {
        aois.push(Aoi::new(
            index as u64 + 1,
            format!("Region {}", index + 1),
            PALETTE[index % PALETTE.len()],
            AoiBounds {
                x: index as f64 * slot + slot * 0.15,
                y: 0.35,
                width: slot * 0.7,
                height: 0.3,
            },
        ));
    }

    let interval = profile.normalized_interval();
    let jitter = profile.normalized_jitter();
    let mut rng = StdRng::seed_from_u64(profile.seed);
    let mut points = Vec::with_capacity(total_samples);
    let mut timestamp = 0.0;
    let mut frame_number = 0u64;

    for _ in 0..profile.visits_per_aoi.max(1) {
        for aoi in &aois {
            let center_x = aoi.bounds.x + aoi.bounds.width / 2.0;
            let center_y = aoi.bounds.y + aoi.bounds.height / 2.0;
            for _ in 0..samples_per_fixation {
                let x = center_x + rng.gen_range(-jitter..jitter);
                let y = center_y + rng.gen_range(-jitter..jitter);
                points.push(GazePoint {
                    timestamp,
                    frame_number,
                    x,
                    y,
                    screen_x: x * 1920.0,
                    screen_y: y * 1080.0,
                });
                timestamp += interval;
                frame_number += 1;
            }
            // Saccade gap before the next cluster.
            timestamp += interval * 6.0;
        }
    }

    let metadata = SessionMetadata {
        name: format!("synthetic-{}", profile.seed),
        stimulus: profile.stimulus,
        duration_s: Some(timestamp),
        sample_rate_hz: Some(1.0 / interval),
        description: profile.description.clone(),
        timestamp_start: Some(0.0),
    };

    Ok((GazeRecording::new(points, metadata), aois))
}
