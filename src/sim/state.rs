//! Game state and core simulation types
//!
//! One session = one [`GameState`] value. Restart discards the value and
//! rebuilds it; nothing is patched field by field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball fell past the bottom edge
    GameOver,
    /// Every brick destroyed
    GameClear,
}

impl GamePhase {
    /// Terminal phases halt the simulation until an explicit restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::GameClear)
    }
}

/// The playing field, supplied by the host once at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

/// The player's paddle
///
/// Vertical position is fixed; input only ever slides it horizontally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position
    pub pos: Vec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_START_X, PADDLE_Y),
        }
    }
}

impl Paddle {
    /// Step horizontally by the per-tick input direction (-1, 0 or +1)
    ///
    /// The clamp applies unconditionally, with or without input.
    pub fn steer(&mut self, dir: f32) {
        self.pos.x = (self.pos.x + dir * PADDLE_STEP).clamp(PADDLE_MIN_X, PADDLE_MAX_X);
    }

    /// Get the paddle as a [`Rect`] for collision detection
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_VX, BALL_START_VY),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Current speed magnitude
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Freeze in place (entering a terminal state)
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
    }
}

/// Cosmetic brick tier, one per pair of rows. No gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickTier {
    Red,
    Orange,
    Yellow,
    Green,
}

impl BrickTier {
    /// Tier for a grid row, counted from the top
    pub fn for_row(row: usize) -> Self {
        if row < 2 {
            BrickTier::Red
        } else if row < 4 {
            BrickTier::Orange
        } else if row < 6 {
            BrickTier::Yellow
        } else {
            BrickTier::Green
        }
    }

    /// Display color, 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            BrickTier::Red => 0xff0000,
            BrickTier::Orange => 0xff8800,
            BrickTier::Yellow => 0xffff00,
            BrickTier::Green => 0x00ff00,
        }
    }
}

/// A destructible brick. Destroyed bricks leave the grid entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Center position
    pub pos: Vec2,
    pub tier: BrickTier,
}

impl Brick {
    /// Get the brick as a [`Rect`] for collision detection
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, BRICK_WIDTH, BRICK_HEIGHT)
    }
}

/// Running session score. Monotonic within a session; no decrement exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn add(&mut self, amount: u64) {
        self.0 += amount;
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Simulation events produced by a tick, for boundary collaborators
/// (sound, effects, logging). Data only; the core never performs I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the left, right or top wall
    WallBounce,
    /// Ball deflected off the paddle
    PaddleBounce,
    /// A brick was destroyed and scored
    BrickDestroyed { tier: BrickTier },
    /// Ball crossed the bottom edge; session lost
    BallLost,
    /// Last brick destroyed; session won
    Cleared,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Field bounds, fixed for the session
    pub field: PlayField,
    /// Current phase
    pub phase: GamePhase,
    /// Session score
    pub score: Score,
    /// Player paddle
    pub paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Live bricks, row-major from the top-left
    pub bricks: Vec<Brick>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh session on the given field
    pub fn new(field: PlayField) -> Self {
        Self {
            field,
            phase: GamePhase::Playing,
            score: Score::default(),
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: build_brick_grid(),
            time_ticks: 0,
        }
    }

    /// Discard and rebuild the whole session: fresh entities, zero score,
    /// back to Playing. The only way out of a terminal phase.
    pub fn restart(&mut self) {
        log::info!(
            "session restart from {:?} (final score {})",
            self.phase,
            self.score.value()
        );
        *self = Self::new(self.field);
    }

    /// Enter GameOver. No-op unless currently Playing, so repeated bottom
    /// crossings cannot re-trigger it. Returns whether the transition fired.
    pub(crate) fn enter_game_over(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.ball.stop();
        true
    }

    /// Enter GameClear, same guard as [`Self::enter_game_over`]
    pub(crate) fn enter_game_clear(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.phase = GamePhase::GameClear;
        self.ball.stop();
        true
    }
}

/// Build the initial 8x10 brick grid, row-major from the top-left
pub fn build_brick_grid() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            bricks.push(Brick {
                pos: Vec2::new(
                    col as f32 * BRICK_SPACING_X + GRID_ORIGIN_X,
                    row as f32 * BRICK_SPACING_Y + GRID_ORIGIN_Y,
                ),
                tier: BrickTier::for_row(row),
            });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_grid_is_full() {
        let state = GameState::new(PlayField::default());
        assert_eq!(state.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(state.bricks.len(), 80);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score.value(), 0);
    }

    #[test]
    fn test_tier_per_row_pair() {
        let bricks = build_brick_grid();
        for (i, brick) in bricks.iter().enumerate() {
            let row = i / BRICK_COLS;
            let expected = match row {
                0 | 1 => BrickTier::Red,
                2 | 3 => BrickTier::Orange,
                4 | 5 => BrickTier::Yellow,
                _ => BrickTier::Green,
            };
            assert_eq!(brick.tier, expected, "row {}", row);
        }
    }

    #[test]
    fn test_grid_layout_anchoring() {
        let bricks = build_brick_grid();
        assert_eq!(bricks[0].pos, Vec2::new(80.0, 80.0));
        // last column of first row
        assert_eq!(bricks[9].pos, Vec2::new(9.0 * 75.0 + 80.0, 80.0));
        // first column of last row
        assert_eq!(bricks[70].pos, Vec2::new(80.0, 7.0 * 30.0 + 80.0));
    }

    #[test]
    fn test_terminal_transitions_fire_once() {
        let mut state = GameState::new(PlayField::default());
        assert!(state.enter_game_over());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.ball.vel, Vec2::ZERO);

        // Already terminal: both guards refuse
        assert!(!state.enter_game_over());
        assert!(!state.enter_game_clear());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_restart_rebuilds_session() {
        let mut state = GameState::new(PlayField::default());
        state.score.add(120);
        state.bricks.truncate(3);
        state.ball.pos = Vec2::new(10.0, 10.0);
        state.enter_game_over();

        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score.value(), 0);
        assert_eq!(state.bricks.len(), 80);
        assert_eq!(state.ball.pos, Vec2::new(BALL_START_X, BALL_START_Y));
        assert_eq!(state.ball.vel, Vec2::new(150.0, -150.0));
        assert_eq!(state.paddle.pos, Vec2::new(PADDLE_START_X, PADDLE_Y));
    }

    #[test]
    fn test_score_has_no_decrement() {
        let mut score = Score::default();
        score.add(10);
        score.add(10);
        assert_eq!(score.value(), 20);
        score.reset();
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_game_state_round_trip_preserves_session() {
        let mut state = GameState::new(PlayField::default());
        state.score.add(30);
        state.bricks.remove(0);
        state.time_ticks = 417;

        let json = serde_json::to_string(&state).expect("serialize game state");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize game state");

        assert_eq!(restored.phase, state.phase);
        assert_eq!(restored.score, state.score);
        assert_eq!(restored.time_ticks, state.time_ticks);
        assert_eq!(restored.bricks.len(), state.bricks.len());
        assert_eq!(restored.ball.pos, state.ball.pos);
        assert_eq!(restored.ball.vel, state.ball.vel);
        assert_eq!(restored.paddle.pos, state.paddle.pos);
    }
}
