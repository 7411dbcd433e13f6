//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically: sample input,
//! move the paddle, integrate the ball, then resolve collisions in a fixed
//! order (walls, paddle, bricks) before evaluating terminal conditions.

use super::collision::{ball_rect_collision, reflect_velocity};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input snapshot for a single tick (deterministic)
///
/// Held keys are sampled state, not buffered events; `restart` is the only
/// one-shot signal and is consumed exclusively in a terminal phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left key currently held
    pub left_held: bool,
    /// Right key currently held
    pub right_held: bool,
    /// Primary click (restart trigger)
    pub restart: bool,
}

impl TickInput {
    /// Directional signal for the paddle: -1, +1 or 0.
    /// Left wins when both keys are held.
    pub fn direction(&self) -> f32 {
        if self.left_held {
            -1.0
        } else if self.right_held {
            1.0
        } else {
            0.0
        }
    }
}

/// Advance the session by one fixed timestep, returning the events produced
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Terminal phases suspend everything except the restart trigger
    if state.phase.is_terminal() {
        if input.restart {
            state.restart();
        }
        return events;
    }

    state.time_ticks += 1;

    // Paddle moves first so the ball collides against its post-input position
    state.paddle.steer(input.direction());

    // Integrate ball
    state.ball.pos += state.ball.vel * dt;

    resolve_walls(state, &mut events);
    // A bottom crossing ends the session before paddle/brick resolution
    if state.phase.is_terminal() {
        return events;
    }
    resolve_paddle(state, &mut events);
    resolve_bricks(state, &mut events);

    // An empty grid wins the session, before the next tick can move the
    // ball again
    if state.bricks.is_empty() && state.enter_game_clear() {
        events.push(GameEvent::Cleared);
    }

    events
}

/// Wall collision: left/top/right reflect elastically, bottom loses the ball
///
/// Reflection only applies while moving into the wall, so a lingering
/// overlap cannot negate the component twice.
fn resolve_walls(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    let r = ball.radius;

    if ball.pos.x - r < 0.0 && ball.vel.x < 0.0 {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = r;
        events.push(GameEvent::WallBounce);
    }
    if ball.pos.x + r > state.field.width && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = state.field.width - r;
        events.push(GameEvent::WallBounce);
    }
    if ball.pos.y - r < 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
        events.push(GameEvent::WallBounce);
    }

    // No reflection at the bottom: crossing it loses the ball
    if ball.pos.y + r > state.field.height && state.enter_game_over() {
        events.push(GameEvent::BallLost);
    }
}

/// Paddle collision: contact offset steers vx, vy always returns upward
fn resolve_paddle(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let contact = ball_rect_collision(state.ball.pos, state.ball.radius, &state.paddle.rect());
    if !contact.hit {
        return;
    }

    // Signed distance from paddle center, deliberately unclamped: edge hits
    // launch the ball well above its nominal speed
    let offset = state.ball.pos.x - state.paddle.pos.x;
    state.ball.vel.x = offset * PADDLE_STEER;
    state.ball.vel.y = -state.ball.vel.y.abs();
    events.push(GameEvent::PaddleBounce);
}

/// Brick collision: every overlapping brick is destroyed and scored, and
/// each independently reflects the axis of smaller penetration
fn resolve_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let GameState {
        ball,
        bricks,
        score,
        ..
    } = state;
    let pos = ball.pos;
    let radius = ball.radius;

    bricks.retain(|brick| {
        let contact = ball_rect_collision(pos, radius, &brick.rect());
        if !contact.hit {
            return true;
        }
        ball.vel = reflect_velocity(ball.vel, contact.normal);
        score.add(BRICK_SCORE);
        events.push(GameEvent::BrickDestroyed { tier: brick.tier });
        false
    });
}
