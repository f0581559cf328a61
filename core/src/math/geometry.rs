use crate::math::stats::StatsHelper;
use crate::tracker_interface::{AoiBounds, GazePoint};

/// Planar helpers shared by every analysis stage. All positions are
/// normalized stimulus coordinates.
pub struct GeometryHelper;

impl GeometryHelper {
    pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
    }

    /// Maximum pairwise distance over a sample run; 0 for fewer than two
    /// samples. Every pair is visited: this is the exact I-DT dispersion,
    /// not a bounding-box diagonal.
    pub fn dispersion(points: &[GazePoint]) -> f64 {
        if points.len() < 2 {
            return 0.0;
        }
        let mut max = 0.0_f64;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let d = Self::distance(points[i].x, points[i].y, points[j].x, points[j].y);
                if d > max {
                    max = d;
                }
            }
        }
        max
    }

    /// Arithmetic mean position; (0, 0) for an empty run.
    pub fn centroid(points: &[GazePoint]) -> (f64, f64) {
        if points.is_empty() {
            return (0.0, 0.0);
        }
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        (StatsHelper::mean(&xs), StatsHelper::mean(&ys))
    }

    /// Inclusive containment: points on any of the four edges count as
    /// inside, so a point on an edge shared by adjacent AOIs matches both.
    pub fn contains_point(bounds: &AoiBounds, x: f64, y: f64) -> bool {
        x >= bounds.x
            && x <= bounds.x + bounds.width
            && y >= bounds.y
            && y <= bounds.y + bounds.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> GazePoint {
        GazePoint {
            timestamp: 0.0,
            frame_number: 0,
            x,
            y,
            screen_x: 0.0,
            screen_y: 0.0,
        }
    }

    #[test]
    fn dispersion_of_repeated_point_is_zero() {
        let points = vec![point(0.4, 0.4), point(0.4, 0.4), point(0.4, 0.4)];
        assert_eq!(GeometryHelper::dispersion(&points), 0.0);
    }

    #[test]
    fn dispersion_of_unit_separation_is_one() {
        let points = vec![point(0.0, 0.0), point(1.0, 0.0)];
        assert_eq!(GeometryHelper::dispersion(&points), 1.0);
    }

    #[test]
    fn dispersion_takes_the_widest_pair() {
        let points = vec![point(0.0, 0.0), point(0.3, 0.0), point(1.0, 0.0)];
        assert_eq!(GeometryHelper::dispersion(&points), 1.0);
    }

    #[test]
    fn centroid_of_unit_square_corners() {
        let points = vec![
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(0.0, 1.0),
            point(1.0, 1.0),
        ];
        assert_eq!(GeometryHelper::centroid(&points), (0.5, 0.5));
    }

    #[test]
    fn centroid_of_empty_run_is_origin() {
        assert_eq!(GeometryHelper::centroid(&[]), (0.0, 0.0));
    }

    #[test]
    fn containment_is_inclusive_on_all_edges() {
        let bounds = AoiBounds {
            x: 0.2,
            y: 0.2,
            width: 0.4,
            height: 0.4,
        };
        assert!(GeometryHelper::contains_point(&bounds, 0.2, 0.4));
        assert!(GeometryHelper::contains_point(&bounds, 0.6, 0.4));
        assert!(GeometryHelper::contains_point(&bounds, 0.4, 0.2));
        assert!(GeometryHelper::contains_point(&bounds, 0.4, 0.6));
        assert!(GeometryHelper::contains_point(&bounds, 0.2, 0.2));
        assert!(!GeometryHelper::contains_point(&bounds, 0.61, 0.4));
    }

    #[test]
    fn off_stimulus_points_are_handled() {
        let bounds = AoiBounds {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        };
        assert!(!GeometryHelper::contains_point(&bounds, -0.1, 0.5));
        assert!(!GeometryHelper::contains_point(&bounds, 0.5, 1.2));
    }
}
