use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned scoring rectangle in field percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringZone {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub points: u32,
}

impl ScoringZone {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, points: u32) -> Self {
        Self { x, y, width, height, points }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Reference layout in priority order: top corner (3), bottom corner (3), middle (1).
pub const DEFAULT_ZONES: [ScoringZone; 3] = [
    ScoringZone::new(85.0, 15.0, 10.0, 20.0, 3),
    ScoringZone::new(85.0, 65.0, 10.0, 20.0, 3),
    ScoringZone::new(85.0, 40.0, 10.0, 20.0, 1),
];

/// Points for a shot landing at (x, y).
/// A blocked shot scores nothing; otherwise the first zone containing the point wins.
pub fn score(zones: &[ScoringZone], x: f32, y: f32, blocked: bool) -> u32 {
    if blocked {
        return 0;
    }
    let target = Vec2::new(x, y);
    zones
        .iter()
        .find(|zone| zone.contains(target))
        .map_or(0, |zone| zone.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_targets() {
        assert_eq!(score(&DEFAULT_ZONES, 90.0, 17.0, false), 3);
        assert_eq!(score(&DEFAULT_ZONES, 90.0, 80.0, false), 3);
        assert_eq!(score(&DEFAULT_ZONES, 90.0, 42.0, false), 1);
        assert_eq!(score(&DEFAULT_ZONES, 90.0, 42.0, true), 0);
        assert_eq!(score(&DEFAULT_ZONES, 70.0, 50.0, false), 0);
        assert_eq!(score(&DEFAULT_ZONES, 90.0, 5.0, false), 0);
    }

    #[test]
    fn edges_are_inclusive() {
        assert_eq!(score(&DEFAULT_ZONES, 85.0, 15.0, false), 3);
        assert_eq!(score(&DEFAULT_ZONES, 95.0, 85.0, false), 3);
        assert_eq!(score(&DEFAULT_ZONES, 95.0, 60.0, false), 1);
        assert_eq!(score(&DEFAULT_ZONES, 95.01, 50.0, false), 0);
    }

    #[test]
    fn shared_edge_goes_to_the_earlier_zone() {
        // y = 35 is the top zone's bottom edge; y = 40 is where the middle zone starts.
        // Overlap the two to check order decides.
        let zones = [
            ScoringZone::new(85.0, 15.0, 10.0, 25.0, 3),
            ScoringZone::new(85.0, 40.0, 10.0, 20.0, 1),
        ];
        assert_eq!(score(&zones, 90.0, 40.0, false), 3);
        assert_eq!(score(&zones, 90.0, 40.5, false), 1);
    }

    #[test]
    fn no_zones_no_points() {
        assert_eq!(score(&[], 90.0, 17.0, false), 0);
    }

    proptest! {
        /// Property: a point inside a zone earns that zone's value
        #[test]
        fn prop_inside_zone_earns_its_value(
            index in 0usize..3,
            fx in 0.0f32..=1.0f32,
            fy in 0.0f32..=1.0f32,
        ) {
            let zone = DEFAULT_ZONES[index];
            let x = zone.x + fx * zone.width;
            let y = zone.y + fy * zone.height;
            prop_assert!(zone.contains(Vec2::new(x, y)));
            prop_assert_eq!(score(&DEFAULT_ZONES, x, y, false), zone.points);
        }

        /// Property: a block nullifies every shot
        #[test]
        fn prop_blocked_scores_zero(x in -50.0f32..150.0f32, y in -50.0f32..150.0f32) {
            prop_assert_eq!(score(&DEFAULT_ZONES, x, y, true), 0);
        }

        /// Property: points outside every zone score zero
        #[test]
        fn prop_outside_all_zones_scores_zero(x in -50.0f32..150.0f32, y in -50.0f32..150.0f32) {
            let p = Vec2::new(x, y);
            prop_assume!(DEFAULT_ZONES.iter().all(|z| !z.contains(p)));
            prop_assert_eq!(score(&DEFAULT_ZONES, x, y, false), 0);
        }
    }
}
