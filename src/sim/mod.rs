//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Fixed entity construction (no RNG anywhere)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_rect_collision, reflect_velocity};
pub use rect::Rect;
pub use state::{
    Ball, Brick, BrickTier, GameEvent, GamePhase, GameState, Paddle, PlayField, Score,
    build_brick_grid,
};
pub use tick::{TickInput, tick};
