//! Obstacle pair and field data structures.

use crate::core::constants::{HOLE_HEIGHT, PIPE_INTERVAL_MS, PIPE_WIDTH};
use crate::core::geometry::{Bounds, Field};

/// One obstacle pair: a solid segment above and below a passable hole.
///
/// `hole_top` is the height of the hole's upper edge measured up from the
/// field floor, so the hole occupies `hole_top - HOLE_HEIGHT .. hole_top`
/// above the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    pub id: u64,
    /// Left edge in field coordinates.
    pub left: f64,
    pub hole_top: f64,
}

impl ObstaclePair {
    pub fn right(&self) -> f64 {
        self.left + PIPE_WIDTH
    }

    /// True once the pair has scrolled completely past the left boundary.
    pub fn is_off_field(&self) -> bool {
        self.right() < 0.0
    }

    /// Vertical extent of the hole in field coordinates (`y` grows downward).
    pub fn hole_span(&self, field: &Field) -> (f64, f64) {
        let upper = field.height - self.hole_top;
        (upper, upper + HOLE_HEIGHT)
    }

    /// Upper and lower segment rectangles, in that order.
    pub fn segment_bounds(&self, field: &Field) -> [Bounds; 2] {
        let (hole_upper, hole_lower) = self.hole_span(field);
        [
            Bounds::new(self.left, 0.0, self.right(), hole_upper),
            Bounds::new(self.left, hole_lower, self.right(), field.height),
        ]
    }
}

/// All live obstacle pairs plus spawn timing and the pass tally.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    /// Creation order; front is the oldest pair.
    pub pairs: Vec<ObstaclePair>,
    pub time_since_last_spawn: f64,
    pub passed_count: u32,
    pub(crate) next_id: u64,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            time_since_last_spawn: PIPE_INTERVAL_MS,
            passed_count: 0,
            next_id: 0,
        }
    }
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(left: f64, hole_top: f64) -> ObstaclePair {
        ObstaclePair {
            id: 0,
            left,
            hole_top,
        }
    }

    #[test]
    fn test_right_edge_uses_pipe_width() {
        assert_eq!(pair(100.0, 300.0).right(), 100.0 + PIPE_WIDTH);
    }

    #[test]
    fn test_off_field_only_when_right_edge_negative() {
        assert!(!pair(0.0, 300.0).is_off_field());
        assert!(!pair(-PIPE_WIDTH, 300.0).is_off_field());
        assert!(pair(-PIPE_WIDTH - 0.5, 300.0).is_off_field());
    }

    #[test]
    fn test_hole_span_is_hole_height_tall() {
        let field = Field::new(800.0, 600.0);
        let (upper, lower) = pair(0.0, 300.0).hole_span(&field);
        assert_eq!(upper, 300.0);
        assert_eq!(lower, 500.0);
        assert_eq!(lower - upper, HOLE_HEIGHT);
    }

    #[test]
    fn test_segments_surround_hole() {
        let field = Field::new(800.0, 600.0);
        let [upper, lower] = pair(200.0, 450.0).segment_bounds(&field);
        assert_eq!(upper, Bounds::new(200.0, 0.0, 320.0, 150.0));
        assert_eq!(lower, Bounds::new(200.0, 350.0, 320.0, 600.0));
    }

    #[test]
    fn test_new_field_is_ready_to_spawn() {
        let field = ObstacleField::new();
        assert!(field.pairs.is_empty());
        assert_eq!(field.passed_count, 0);
        assert_eq!(field.time_since_last_spawn, PIPE_INTERVAL_MS);
    }
}
