//! Avatar data structures.

use crate::core::constants::{
    DEFAULT_AVATAR_HEIGHT, DEFAULT_AVATAR_LEFT, DEFAULT_AVATAR_WIDTH, JUMP_DURATION_MS,
};
use serde::{Deserialize, Serialize};

/// Fixed placement and size of the avatar, in field units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarGeometry {
    /// Left edge; constant for the whole session.
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for AvatarGeometry {
    fn default() -> Self {
        Self {
            left: DEFAULT_AVATAR_LEFT,
            width: DEFAULT_AVATAR_WIDTH,
            height: DEFAULT_AVATAR_HEIGHT,
        }
    }
}

/// Mutable avatar state owned by the game loop.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarState {
    pub geometry: AvatarGeometry,
    /// Top edge in field coordinates (grows downward).
    pub top: f64,
    /// Milliseconds since the last jump. `f64::INFINITY` until the first jump.
    pub time_since_last_jump: f64,
}

impl AvatarState {
    pub fn new(geometry: AvatarGeometry) -> Self {
        Self {
            geometry,
            top: 0.0,
            time_since_last_jump: f64::INFINITY,
        }
    }

    /// True while the avatar is rising.
    pub fn is_jumping(&self) -> bool {
        self.time_since_last_jump < JUMP_DURATION_MS
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.geometry.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_avatar_is_not_jumping() {
        let avatar = AvatarState::new(AvatarGeometry::default());
        assert!(avatar.time_since_last_jump.is_infinite());
        assert!(!avatar.is_jumping());
    }

    #[test]
    fn test_bottom_uses_geometry_height() {
        let mut avatar = AvatarState::new(AvatarGeometry {
            left: 0.0,
            width: 10.0,
            height: 25.0,
        });
        avatar.top = 100.0;
        assert_eq!(avatar.bottom(), 125.0);
    }

    #[test]
    fn test_partial_geometry_json_fills_defaults() {
        let geometry: AvatarGeometry = serde_json::from_str(r#"{"height": 30.0}"#).unwrap();
        assert_eq!(geometry.height, 30.0);
        assert_eq!(geometry.left, DEFAULT_AVATAR_LEFT);
        assert_eq!(geometry.width, DEFAULT_AVATAR_WIDTH);
    }
}
