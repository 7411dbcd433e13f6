//! Brick Blitz entry point
//!
//! Headless demo driver: auto-plays one session at the fixed timestep,
//! logging what the boundary collaborators would observe. A real host wires
//! the same loop to a window, a keyboard and a renderer.

use brick_blitz::consts::SIM_DT;
use brick_blitz::scene::Scene;
use brick_blitz::sim::{GameEvent, GameState, PlayField, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Brick Blitz (headless) starting...");

    let mut state = GameState::new(PlayField::default());

    // Track the ball: hold whichever key moves the paddle under it
    let max_ticks = 60 * 120; // two minutes of simulated play
    for _ in 0..max_ticks {
        let input = TickInput {
            left_held: state.ball.pos.x < state.paddle.pos.x - 4.0,
            right_held: state.ball.pos.x > state.paddle.pos.x + 4.0,
            restart: false,
        };

        for event in tick(&mut state, &input, SIM_DT) {
            match event {
                GameEvent::BrickDestroyed { tier } => {
                    log::debug!(
                        "brick destroyed ({:?}), score {}",
                        tier,
                        state.score.value()
                    );
                }
                GameEvent::BallLost => log::info!("ball lost past the bottom edge"),
                GameEvent::Cleared => log::info!("field cleared"),
                GameEvent::WallBounce | GameEvent::PaddleBounce => {}
            }
        }

        if state.phase.is_terminal() {
            break;
        }
    }

    let scene = Scene::from_state(&state);
    println!("{}", scene.score_label);
    if let Some(banner) = scene.banner {
        println!("{banner}");
    }
    log::info!(
        "finished in {:?} after {} ticks, {} bricks left",
        state.phase,
        state.time_ticks,
        state.bricks.len()
    );
}
