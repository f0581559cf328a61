use gazecore::tracker_interface::GazePoint;

/// Generates an evenly sampled cluster of gaze points around one position,
/// for quick pipeline smoke input.
#[allow(dead_code)]
pub fn point_cluster(
    center_x: f64,
    center_y: f64,
    count: usize,
    start_time: f64,
    interval_s: f64,
) -> Vec<GazePoint> {
    (0..count)
        .map(|i| GazePoint {
            timestamp: start_time + i as f64 * interval_s,
            frame_number: i as u64,
            x: center_x,
            y: center_y,
            screen_x: center_x * 1920.0,
            screen_y: center_y * 1080.0,
        })
        .collect()
}
