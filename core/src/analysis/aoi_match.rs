use crate::math::geometry::GeometryHelper;
use crate::tracker_interface::{Aoi, Fixation};

/// Label used everywhere a fixation falls outside every supplied AOI. One
/// spelling across all outputs, so exports can be joined on it.
pub const OUTSIDE_AOIS: &str = "Outside AOIs";

/// Resolves each fixation to the single AOI that claims it.
///
/// Overlapping AOIs resolve to the first match in caller list order, a
/// deliberate tie-break rather than an error. Dwell aggregation does
/// NOT use this resolution (every containing AOI is credited there); the
/// single winner feeds the visit sequence, transitions, and first-fixation
/// metrics.
pub struct AoiMatcher;

impl AoiMatcher {
    /// First AOI in caller order whose rectangle contains the centroid.
    pub fn match_fixation<'a>(fixation: &Fixation, aois: &'a [Aoi]) -> Option<&'a Aoi> {
        aois.iter()
            .find(|aoi| GeometryHelper::contains_point(&aoi.bounds, fixation.x, fixation.y))
    }

    /// Position of the winning AOI in the caller's list, if any.
    pub fn match_index(fixation: &Fixation, aois: &[Aoi]) -> Option<usize> {
        aois.iter()
            .position(|aoi| GeometryHelper::contains_point(&aoi.bounds, fixation.x, fixation.y))
    }

    /// Single-winner label for one fixation, with the outside sentinel.
    pub fn label(fixation: &Fixation, aois: &[Aoi]) -> String {
        Self::match_fixation(fixation, aois)
            .map(|aoi| aoi.name.clone())
            .unwrap_or_else(|| OUTSIDE_AOIS.to_string())
    }

    /// Labels for a whole run, one per fixation in the order given.
    pub fn labels(fixations: &[Fixation], aois: &[Aoi]) -> Vec<String> {
        fixations.iter().map(|f| Self::label(f, aois)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker_interface::AoiBounds;

    fn fixation_at(x: f64, y: f64) -> Fixation {
        Fixation {
            id: 1,
            start_time: 0.0,
            end_time: 0.12,
            duration_ms: 120.0,
            x,
            y,
            point_count: 1,
            points: Vec::new(),
        }
    }

    fn aoi(id: u64, name: &str, x: f64, y: f64, width: f64, height: f64) -> Aoi {
        Aoi::new(
            id,
            name,
            "#e74c3c",
            AoiBounds {
                x,
                y,
                width,
                height,
            },
        )
    }

    #[test]
    fn first_listed_aoi_wins_an_overlap() {
        let aois = vec![
            aoi(1, "A", 0.0, 0.0, 0.6, 0.6),
            aoi(2, "B", 0.0, 0.0, 0.6, 0.6),
        ];
        let matched = AoiMatcher::match_fixation(&fixation_at(0.3, 0.3), &aois).unwrap();
        assert_eq!(matched.name, "A");
    }

    #[test]
    fn unmatched_centroid_gets_the_outside_label() {
        let aois = vec![aoi(1, "A", 0.0, 0.0, 0.2, 0.2)];
        assert_eq!(AoiMatcher::label(&fixation_at(0.9, 0.9), &aois), OUTSIDE_AOIS);
        assert!(AoiMatcher::match_index(&fixation_at(0.9, 0.9), &aois).is_none());
    }

    #[test]
    fn shared_edge_matches_the_first_listed_neighbor() {
        let aois = vec![
            aoi(1, "Left", 0.0, 0.0, 0.5, 1.0),
            aoi(2, "Right", 0.5, 0.0, 0.5, 1.0),
        ];
        // x = 0.5 lies on the edge both rectangles share.
        let matched = AoiMatcher::match_fixation(&fixation_at(0.5, 0.4), &aois).unwrap();
        assert_eq!(matched.name, "Left");
    }

    #[test]
    fn labels_align_with_the_fixation_order() {
        let aois = vec![aoi(1, "A", 0.0, 0.0, 0.4, 0.4)];
        let fixations = vec![fixation_at(0.2, 0.2), fixation_at(0.8, 0.8)];
        assert_eq!(
            AoiMatcher::labels(&fixations, &aois),
            vec!["A".to_string(), OUTSIDE_AOIS.to_string()]
        );
    }
}
