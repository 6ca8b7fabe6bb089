//! Avatar motion and jump handling.

use super::types::AvatarState;
use crate::core::constants::AVATAR_SPEED;
use crate::core::geometry::{Bounds, Field};

/// Place the avatar at the vertical midpoint of the field, not jumping.
///
/// Safe to call repeatedly. Jump input reaches the avatar only through the
/// game loop while a session is running, so re-running setup cannot stack
/// jump triggers.
pub fn setup(avatar: &mut AvatarState, field: &Field) {
    avatar.top = field.height / 2.0;
    avatar.time_since_last_jump = f64::INFINITY;
}

/// Advance the avatar by `delta` milliseconds.
pub fn update(avatar: &mut AvatarState, delta: f64) {
    if avatar.is_jumping() {
        avatar.top -= AVATAR_SPEED * delta;
    } else {
        avatar.top += AVATAR_SPEED * delta;
    }
    avatar.time_since_last_jump += delta;
}

/// Start a new jump window.
pub fn trigger_jump(avatar: &mut AvatarState) {
    avatar.time_since_last_jump = 0.0;
}

/// Current bounding rectangle of the avatar.
pub fn bounds(avatar: &AvatarState) -> Bounds {
    let g = &avatar.geometry;
    Bounds::new(g.left, avatar.top, g.left + g.width, avatar.bottom())
}
