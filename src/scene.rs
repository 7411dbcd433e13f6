//! Display-data projection of the simulation state
//!
//! The renderer owns pixels; the core owns data. Once per tick the host
//! builds a [`Scene`] from the current state and hands it to whatever draws
//! (canvas, terminal, test harness). The core never emits drawing primitives.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Paddle fill color, 0xRRGGBB
const PADDLE_COLOR: u32 = 0x6666ff;
/// Ball fill color
const BALL_COLOR: u32 = 0xffffff;

/// A filled rectangle to draw
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneRect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// A filled circle to draw
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneCircle {
    pub center: Vec2,
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Everything a display surface needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// Paddle first, then every live brick
    pub rects: Vec<SceneRect>,
    pub ball: SceneCircle,
    /// Live score overlay
    pub score_label: String,
    /// Banner shown only in a terminal phase
    pub banner: Option<&'static str>,
}

impl Scene {
    /// Project the current session state into display data
    pub fn from_state(state: &GameState) -> Self {
        let mut rects = Vec::with_capacity(state.bricks.len() + 1);
        rects.push(SceneRect {
            center: state.paddle.pos,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: PADDLE_COLOR,
        });
        for brick in &state.bricks {
            rects.push(SceneRect {
                center: brick.pos,
                width: BRICK_WIDTH,
                height: BRICK_HEIGHT,
                color: brick.tier.color(),
            });
        }

        Self {
            rects,
            ball: SceneCircle {
                center: state.ball.pos,
                radius: state.ball.radius,
                color: BALL_COLOR,
            },
            score_label: format!("Score: {}", state.score.value()),
            banner: match state.phase {
                GamePhase::Playing => None,
                GamePhase::GameOver => Some("Game Over / Click to restart"),
                GamePhase::GameClear => Some("Game Clear / Click to restart"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PlayField;

    #[test]
    fn test_scene_carries_every_entity() {
        let state = GameState::new(PlayField::default());
        let scene = Scene::from_state(&state);

        // Paddle plus 80 bricks
        assert_eq!(scene.rects.len(), 81);
        assert_eq!(scene.rects[0].color, PADDLE_COLOR);
        assert_eq!(scene.rects[1].color, 0xff0000); // top row is red
        assert_eq!(scene.ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_score_label_tracks_value() {
        let mut state = GameState::new(PlayField::default());
        assert_eq!(Scene::from_state(&state).score_label, "Score: 0");

        state.score.add(30);
        assert_eq!(Scene::from_state(&state).score_label, "Score: 30");
    }

    #[test]
    fn test_banner_only_in_terminal_phase() {
        let mut state = GameState::new(PlayField::default());
        assert_eq!(Scene::from_state(&state).banner, None);

        state.enter_game_over();
        assert_eq!(
            Scene::from_state(&state).banner,
            Some("Game Over / Click to restart")
        );

        state.restart();
        state.bricks.clear();
        state.enter_game_clear();
        assert_eq!(
            Scene::from_state(&state).banner,
            Some("Game Clear / Click to restart")
        );
    }
}
