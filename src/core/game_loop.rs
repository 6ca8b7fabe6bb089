//! Frame-driven game loop and session lifecycle.
//!
//! The host calls [`Game::on_animation_frame`] with monotonic millisecond
//! timestamps whenever [`Game::wants_frame`] is true, and
//! [`Game::run_due_timers`] on every pass of its own loop. Input reaches the
//! game through [`Game::handle_input`].
//!
//! ```text
//! Idle{armed} --start--> Running --loss--> Idle{unarmed} --100ms--> Idle{armed}
//! ```

use crate::avatar::{self, AvatarState};
use crate::config::GameConfig;
use crate::core::constants::LOSS_REVEAL_DELAY_MS;
use crate::core::geometry::{Bounds, Field};
use crate::input::GameInput;
use crate::obstacles::{self, ObstacleField};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lifecycle phase of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Not simulating. The start input is only honoured once armed.
    Idle { start_armed: bool },
    Running,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    AboveField,
    BelowField,
    Collision,
}

/// What a single animation-frame callback did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// No frame was outstanding or the loop is idle; nothing happened.
    Skipped,
    /// First frame of a session: timestamp recorded, nothing simulated.
    Primed,
    /// Simulated one step of `delta` ms and requested the next frame.
    Continued { delta: f64 },
    /// Simulated one step and the session was lost.
    Lost(LossReason),
}

/// Frame bookkeeping owned by the loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopState {
    /// `None` until the first frame after a (re)start.
    pub last_frame_timestamp: Option<f64>,
    pub frame_requested: bool,
}

/// Title and subtitle visibility, managed by the lifecycle and read by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub title_visible: bool,
    pub subtitle: Option<String>,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            title_visible: true,
            subtitle: None,
        }
    }
}

/// Deferred post-loss transition, tagged with the session it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScheduledReveal {
    due_at: f64,
    session: u32,
}

/// Check whether the avatar has left the field or hit an obstacle.
pub fn loss_reason(
    avatar: &Bounds,
    obstacles: &[Bounds],
    field_height: f64,
) -> Option<LossReason> {
    if avatar.top < 0.0 {
        Some(LossReason::AboveField)
    } else if avatar.bottom > field_height {
        Some(LossReason::BelowField)
    } else if obstacles.iter().any(|rect| avatar.intersects(rect)) {
        Some(LossReason::Collision)
    } else {
        None
    }
}

pub fn is_lost(avatar: &Bounds, obstacles: &[Bounds], field_height: f64) -> bool {
    loss_reason(avatar, obstacles, field_height).is_some()
}

/// Whole game: both controllers, the loop state machine and its RNG.
pub struct Game<R: Rng = StdRng> {
    pub field: Field,
    pub avatar: AvatarState,
    pub obstacles: ObstacleField,
    pub loop_state: LoopState,
    pub phase: LoopPhase,
    pub overlay: Overlay,
    /// Number of sessions started so far; the current session's id.
    pub session: u32,
    pub last_loss: Option<LossReason>,
    session_started_at: Option<f64>,
    pending_reveal: Option<ScheduledReveal>,
    rng: R,
}

impl Game<StdRng> {
    /// Build a game from config, seeding the RNG from `config.seed` if set.
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        let field = config.field;
        let mut avatar = AvatarState::new(config.avatar);
        avatar::setup(&mut avatar, &field);
        Self {
            field,
            avatar,
            obstacles: ObstacleField::new(),
            loop_state: LoopState::default(),
            phase: LoopPhase::Idle { start_armed: true },
            overlay: Overlay::default(),
            session: 0,
            last_loss: None,
            session_started_at: None,
            pending_reveal: None,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    /// True when the host should deliver an animation frame.
    pub fn wants_frame(&self) -> bool {
        self.is_running() && self.loop_state.frame_requested
    }

    pub fn passed_count(&self) -> u32 {
        obstacles::passed_count(&self.obstacles)
    }

    pub fn avatar_bounds(&self) -> Bounds {
        avatar::bounds(&self.avatar)
    }

    pub fn obstacle_bounds(&self) -> Vec<Bounds> {
        obstacles::bounds(&self.obstacles, &self.field)
    }

    /// Route one input signal according to the current phase.
    ///
    /// Returns true if the input had an effect.
    pub fn handle_input(&mut self, input: GameInput) -> bool {
        match (self.phase, input) {
            (LoopPhase::Idle { start_armed: true }, GameInput::Flap | GameInput::Other) => {
                self.start();
                true
            }
            (LoopPhase::Running, GameInput::Flap) => {
                avatar::trigger_jump(&mut self.avatar);
                true
            }
            _ => false,
        }
    }

    /// Consume the armed start trigger and begin a new session.
    fn start(&mut self) {
        self.pending_reveal = None;
        self.session += 1;
        self.overlay.title_visible = false;
        self.last_loss = None;
        self.session_started_at = None;

        avatar::setup(&mut self.avatar, &self.field);
        obstacles::setup(&mut self.obstacles);

        self.loop_state = LoopState {
            last_frame_timestamp: None,
            frame_requested: true,
        };
        self.phase = LoopPhase::Running;
        tracing::info!(session = self.session, "session started");
    }

    /// Animation-frame callback.
    pub fn on_animation_frame(&mut self, timestamp: f64) -> FrameOutcome {
        if !self.wants_frame() {
            return FrameOutcome::Skipped;
        }
        self.loop_state.frame_requested = false;

        let Some(last) = self.loop_state.last_frame_timestamp else {
            self.loop_state.last_frame_timestamp = Some(timestamp);
            self.session_started_at = Some(timestamp);
            self.loop_state.frame_requested = true;
            return FrameOutcome::Primed;
        };

        let delta = (timestamp - last).max(0.0);
        avatar::update(&mut self.avatar, delta);
        obstacles::update(&mut self.obstacles, &self.field, delta, &mut self.rng);

        let avatar = self.avatar_bounds();
        let obstacle_rects = self.obstacle_bounds();
        if let Some(reason) = loss_reason(&avatar, &obstacle_rects, self.field.height) {
            self.lose(reason, timestamp);
            return FrameOutcome::Lost(reason);
        }

        self.loop_state.last_frame_timestamp = Some(timestamp);
        self.loop_state.frame_requested = true;
        FrameOutcome::Continued { delta }
    }

    fn lose(&mut self, reason: LossReason, timestamp: f64) {
        self.phase = LoopPhase::Idle { start_armed: false };
        self.loop_state.frame_requested = false;
        self.last_loss = Some(reason);
        self.pending_reveal = Some(ScheduledReveal {
            due_at: timestamp + LOSS_REVEAL_DELAY_MS,
            session: self.session,
        });

        let duration_ms = self
            .session_started_at
            .map(|start| timestamp - start)
            .unwrap_or_default();
        tracing::info!(
            session = self.session,
            ?reason,
            passed = self.passed_count(),
            duration_ms,
            "session lost"
        );
    }

    /// Fire the post-loss reveal once its deadline has passed.
    pub fn run_due_timers(&mut self, now: f64) {
        let Some(reveal) = self.pending_reveal else {
            return;
        };
        if now < reveal.due_at {
            return;
        }
        self.pending_reveal = None;

        if reveal.session != self.session || self.is_running() {
            tracing::debug!(session = reveal.session, "stale reveal discarded");
            return;
        }

        self.overlay.title_visible = true;
        self.overlay.subtitle = Some(format!("{} Pipes", self.passed_count()));
        self.phase = LoopPhase::Idle { start_armed: true };
        tracing::debug!(session = reveal.session, "results revealed");
    }

    /// Deadline of the pending reveal, if one is scheduled.
    pub fn reveal_due_at(&self) -> Option<f64> {
        self.pending_reveal.map(|reveal| reveal.due_at)
    }
}
