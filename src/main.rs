//! Paddle Duel entry point
//!
//! Headless demo match: a simple ball-tracking controller drives the player
//! paddle against the built-in opponent, then the final snapshot is printed
//! as JSON. Pass a seed as the first argument to replay a specific match.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use paddle_duel::consts::TICK_DT;
use paddle_duel::sim::{MatchPhase, MatchState};
use paddle_duel::{FixedStepDriver, MatchConfig};

/// Ten minutes of simulated play at 60 frames per second
const MAX_FRAMES: u32 = 60 * 60 * 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(0xDEC0DE);
    log::info!("paddle-duel headless demo, seed {seed}");

    let mut state = MatchState::new(MatchConfig::default())?;
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut driver = FixedStepDriver::new();

    for _ in 0..MAX_FRAMES {
        let snapshot = state.snapshot();
        let input = driver.input_mut();
        match snapshot.phase {
            MatchPhase::Idle => input.start = true,
            MatchPhase::Active => {
                // Track the ball, leaving a little slack so play stays imperfect
                let paddle_center = snapshot.player_paddle.center().y;
                let ball_center = snapshot.ball.center().y;
                input.move_up = ball_center < paddle_center - 10.0;
                input.move_down = ball_center > paddle_center + 10.0;
            }
            MatchPhase::Finished => break,
        }
        driver.advance(&mut state, TICK_DT, &mut rng);
    }

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}
