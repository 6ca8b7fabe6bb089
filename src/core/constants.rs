// Avatar motion
pub const AVATAR_SPEED: f64 = 0.5; // units per ms, both directions
pub const JUMP_DURATION_MS: f64 = 123.0;

// Obstacle pairs
pub const HOLE_HEIGHT: f64 = 200.0;
pub const PIPE_WIDTH: f64 = 120.0;
pub const PIPE_INTERVAL_MS: f64 = 600.0;
pub const PIPE_SPEED: f64 = 1.0; // units per ms, leftward
/// Shortest field whose hole range is non-empty: half a hole of clearance
/// below, a hole and a half above.
pub const MIN_FIELD_HEIGHT: f64 = HOLE_HEIGHT * 2.0;

// Lifecycle
pub const LOSS_REVEAL_DELAY_MS: f64 = 100.0;

// Field and avatar defaults (logical units)
pub const DEFAULT_FIELD_WIDTH: f64 = 800.0;
pub const DEFAULT_FIELD_HEIGHT: f64 = 600.0;
pub const DEFAULT_AVATAR_LEFT: f64 = 50.0;
pub const DEFAULT_AVATAR_WIDTH: f64 = 60.0;
pub const DEFAULT_AVATAR_HEIGHT: f64 = 45.0;

// Host scheduler
pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const MAX_FRAME_RATE: u32 = 240;
