//! Integration test: game loop lifecycle
//!
//! Drives the public `Game` API with explicit timestamps the way the terminal
//! host does: start input, animation frames, due timers, restart.

use flappy::core::constants::{AVATAR_SPEED, PIPE_INTERVAL_MS, PIPE_WIDTH};
use flappy::core::geometry::Field;
use flappy::obstacles::ObstaclePair;
use flappy::{FrameOutcome, Game, GameConfig, GameInput, LoopPhase, LossReason};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME_MS: f64 = 20.0;

/// A field wide enough that no obstacle reaches the avatar in a short run.
fn wide_config() -> GameConfig {
    GameConfig {
        field: Field::new(2000.0, 1200.0),
        seed: Some(11),
        ..GameConfig::default()
    }
}

fn seeded_game(config: &GameConfig) -> Game {
    Game::with_rng(config, StdRng::seed_from_u64(11))
}

/// Start a session and deliver the priming frame at `t0`.
fn start_at(game: &mut Game, t0: f64) {
    assert!(game.handle_input(GameInput::Other));
    assert_eq!(game.on_animation_frame(t0), FrameOutcome::Primed);
}

/// Deliver frames every `FRAME_MS` until the session is lost or `max` frames
/// have run. Returns every outcome and the timestamp of the last frame.
fn run_frames(game: &mut Game, t0: f64, max: usize) -> (Vec<FrameOutcome>, f64) {
    let mut outcomes = Vec::new();
    let mut t = t0;
    for _ in 0..max {
        if !game.wants_frame() {
            break;
        }
        t += FRAME_MS;
        outcomes.push(game.on_animation_frame(t));
    }
    (outcomes, t)
}

// =============================================================================
// End-to-end session
// =============================================================================

#[test]
fn test_falling_session_loses_once_without_passing_pipes() {
    let mut game = seeded_game(&wide_config());
    start_at(&mut game, 0.0);

    // Exactly one spawn interval of frames: one pair on the field.
    let frames_per_interval = (PIPE_INTERVAL_MS / FRAME_MS) as usize;
    let (first, t) = run_frames(&mut game, 0.0, frames_per_interval);
    assert_eq!(first.len(), frames_per_interval);
    assert!(first
        .iter()
        .all(|o| matches!(o, FrameOutcome::Continued { .. })));
    assert_eq!(game.obstacles.pairs.len(), 1);
    assert!(game.is_running());

    // Keep falling until the avatar drops out of the field.
    let (rest, lost_at) = run_frames(&mut game, t, 1000);
    let losses: Vec<_> = first
        .iter()
        .chain(rest.iter())
        .filter(|o| matches!(o, FrameOutcome::Lost(_)))
        .collect();
    assert_eq!(losses.len(), 1);
    assert_eq!(rest.last(), Some(&FrameOutcome::Lost(LossReason::BelowField)));
    assert!(game.avatar_bounds().bottom > game.field.height);
    assert_eq!(game.passed_count(), 0);

    // 56 frames of 10 units each take the bottom from 645 past 1200.
    assert_eq!(lost_at, 56.0 * FRAME_MS);

    // Loop is suspended; further frames do nothing.
    assert_eq!(game.phase, LoopPhase::Idle { start_armed: false });
    assert_eq!(game.on_animation_frame(lost_at + FRAME_MS), FrameOutcome::Skipped);
}

#[test]
fn test_reveal_after_delay_then_restart() {
    let mut game = seeded_game(&wide_config());
    start_at(&mut game, 0.0);
    let (_, lost_at) = run_frames(&mut game, 0.0, 1000);

    game.run_due_timers(lost_at + 50.0);
    assert!(!game.overlay.title_visible);
    assert!(!game.handle_input(GameInput::Flap), "start not yet re-armed");

    game.run_due_timers(lost_at + 100.0);
    assert!(game.overlay.title_visible);
    assert_eq!(game.overlay.subtitle.as_deref(), Some("0 Pipes"));

    // Restart re-initialises both controllers.
    assert!(game.handle_input(GameInput::Flap));
    assert!(game.is_running());
    assert_eq!(game.session, 2);
    assert_eq!(game.avatar.top, 600.0);
    assert!(game.obstacles.pairs.is_empty());
    assert_eq!(game.passed_count(), 0);
    assert_eq!(game.loop_state.last_frame_timestamp, None);

    // Fresh session primes on its first frame, however late it arrives.
    assert_eq!(game.on_animation_frame(lost_at + 5000.0), FrameOutcome::Primed);
    assert_eq!(game.avatar.top, 600.0);
}

// =============================================================================
// Jumping
// =============================================================================

#[test]
fn test_jumping_keeps_avatar_aloft_longer() {
    let config = wide_config();

    let mut falling = seeded_game(&config);
    start_at(&mut falling, 0.0);
    let (falling_frames, _) = run_frames(&mut falling, 0.0, 1000);

    let mut flapping = seeded_game(&config);
    start_at(&mut flapping, 0.0);
    let mut t = 0.0;
    let mut frames = 0;
    while flapping.wants_frame() && frames < 80 {
        // Tap every tenth frame: seven frames up, three down.
        if frames % 10 == 0 {
            flapping.handle_input(GameInput::Flap);
        }
        t += FRAME_MS;
        flapping.on_animation_frame(t);
        frames += 1;
    }
    assert!(flapping.is_running());
    assert_eq!(frames, 80);
    assert!(frames > falling_frames.len());
}

#[test]
fn test_jump_rises_by_speed_times_delta() {
    let mut game = seeded_game(&wide_config());
    start_at(&mut game, 0.0);
    game.handle_input(GameInput::Flap);
    let before = game.avatar.top;
    game.on_animation_frame(FRAME_MS);
    assert_eq!(game.avatar.top, before - AVATAR_SPEED * FRAME_MS);
}

// =============================================================================
// Passing obstacles
// =============================================================================

#[test]
fn test_pair_scrolled_off_counts_as_passed() {
    let mut game = seeded_game(&wide_config());
    start_at(&mut game, 0.0);
    game.obstacles.time_since_last_spawn = 0.0;
    game.obstacles.pairs.push(ObstaclePair {
        id: 500,
        left: -PIPE_WIDTH - 1.0,
        hole_top: 700.0,
    });

    game.on_animation_frame(FRAME_MS);
    assert_eq!(game.passed_count(), 1);
    assert!(game.obstacles.pairs.iter().all(|p| p.id != 500));
    assert!(game.obstacle_bounds().is_empty());
}

#[test]
fn test_flying_through_hole_is_safe() {
    let mut game = seeded_game(&wide_config());
    start_at(&mut game, 0.0);
    game.obstacles.time_since_last_spawn = 0.0;
    // Avatar spans y 600..645; hole spans 500..700 for hole_top = 700.
    game.obstacles.pairs.push(ObstaclePair {
        id: 500,
        left: 40.0,
        hole_top: 700.0,
    });
    let outcome = game.on_animation_frame(FRAME_MS);
    assert!(matches!(outcome, FrameOutcome::Continued { .. }));
}

#[test]
fn test_hitting_segment_is_collision() {
    let mut game = seeded_game(&wide_config());
    start_at(&mut game, 0.0);
    game.obstacles.time_since_last_spawn = 0.0;
    // Hole spans 900..1100: the avatar at 600 is inside the upper segment.
    game.obstacles.pairs.push(ObstaclePair {
        id: 500,
        left: 40.0,
        hole_top: 300.0,
    });
    assert_eq!(
        game.on_animation_frame(FRAME_MS),
        FrameOutcome::Lost(LossReason::Collision)
    );
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_holes() {
    let config = wide_config();
    let mut a = Game::new(&config);
    let mut b = Game::new(&config);
    for game in [&mut a, &mut b] {
        start_at(game, 0.0);
        run_frames(game, 0.0, 40);
    }
    let holes = |g: &Game| g.obstacles.pairs.iter().map(|p| p.hole_top).collect::<Vec<_>>();
    assert_eq!(holes(&a), holes(&b));
    assert!(!holes(&a).is_empty());
}
