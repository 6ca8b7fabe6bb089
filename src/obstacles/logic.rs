//! Obstacle spawning, scrolling and retirement.

use super::types::{ObstacleField, ObstaclePair};
use crate::core::constants::{HOLE_HEIGHT, PIPE_INTERVAL_MS, PIPE_SPEED};
use crate::core::geometry::{Bounds, Field};
use rand::Rng;
use std::ops::RangeInclusive;

/// Clear the field and make the next positive-delta update spawn a pair.
pub fn setup(obstacles: &mut ObstacleField) {
    obstacles.pairs.clear();
    obstacles.time_since_last_spawn = PIPE_INTERVAL_MS;
    obstacles.passed_count = 0;
}

/// Advance every pair by `delta` milliseconds.
///
/// At most one pair is spawned per call even if `delta` spans several
/// intervals. The spawn happens before movement, so a new pair already moves
/// on the frame it appears.
pub fn update<R: Rng>(obstacles: &mut ObstacleField, field: &Field, delta: f64, rng: &mut R) {
    obstacles.time_since_last_spawn += delta;
    if obstacles.time_since_last_spawn > PIPE_INTERVAL_MS {
        obstacles.time_since_last_spawn -= PIPE_INTERVAL_MS;
        spawn_pair(obstacles, field, rng);
    }

    let mut passed = 0;
    obstacles.pairs.retain_mut(|pair| {
        if pair.is_off_field() {
            tracing::debug!(id = pair.id, "obstacle pair passed");
            passed += 1;
            return false;
        }
        pair.left -= PIPE_SPEED * delta;
        true
    });
    obstacles.passed_count += passed;
}

/// Segment rectangles of every live pair, two per pair, oldest first.
pub fn bounds(obstacles: &ObstacleField, field: &Field) -> Vec<Bounds> {
    obstacles
        .pairs
        .iter()
        .flat_map(|pair| pair.segment_bounds(field))
        .collect()
}

pub fn passed_count(obstacles: &ObstacleField) -> u32 {
    obstacles.passed_count
}

/// Inclusive integer range a new pair's `hole_top` is drawn from.
///
/// Non-empty for any field at least `MIN_FIELD_HEIGHT` tall, which config
/// validation enforces. Shorter fields collapse to the lower bound so the draw
/// cannot panic.
pub fn hole_top_range(field: &Field) -> RangeInclusive<i64> {
    let min = (HOLE_HEIGHT * 1.5).floor() as i64;
    let max = (field.height - HOLE_HEIGHT * 0.5).floor() as i64;
    min..=max.max(min)
}

fn spawn_pair<R: Rng>(obstacles: &mut ObstacleField, field: &Field, rng: &mut R) {
    let hole_top = rng.gen_range(hole_top_range(field)) as f64;
    let id = obstacles.next_id;
    obstacles.next_id += 1;
    tracing::debug!(id, hole_top, "obstacle pair spawned");
    obstacles.pairs.push(ObstaclePair {
        id,
        left: field.width,
        hole_top,
    });
}
