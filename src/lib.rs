//! Brick Blitz - a classic grid breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `scene`: Display-data projection consumed by a renderer
//!
//! The simulation is a pure fixed-timestep core: a host owns the frame
//! driver, samples input once per tick, calls [`sim::tick`], and observes
//! the resulting state. Nothing in here draws, polls devices, or blocks.

pub mod scene;
pub mod sim;

pub use scene::Scene;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz nominal cadence, owned by the host)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - fixed height near the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_START_X: f32 = 400.0;
    pub const PADDLE_Y: f32 = 550.0;
    /// Horizontal travel per tick while a direction is held
    pub const PADDLE_STEP: f32 = 8.0;
    /// Clamp range for the paddle center
    pub const PADDLE_MIN_X: f32 = 50.0;
    pub const PADDLE_MAX_X: f32 = 750.0;
    /// Horizontal deflection per unit of contact offset from paddle center
    pub const PADDLE_STEER: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 400.0;
    pub const BALL_START_Y: f32 = 500.0;
    /// Initial velocity, up and to the right
    pub const BALL_START_VX: f32 = 150.0;
    pub const BALL_START_VY: f32 = -150.0;

    /// Brick grid layout: 8 rows x 10 columns anchored at the grid origin
    pub const BRICK_ROWS: usize = 8;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_SPACING_X: f32 = 75.0;
    pub const BRICK_SPACING_Y: f32 = 30.0;
    pub const GRID_ORIGIN_X: f32 = 80.0;
    pub const GRID_ORIGIN_Y: f32 = 80.0;
    /// Points per destroyed brick
    pub const BRICK_SCORE: u64 = 10;
}
