//! Roto Roids headless demo
//!
//! Runs the simulation core without a renderer: a small autopilot plays for
//! a fixed number of ticks, round/enemy events go to the log, and the final
//! HUD snapshot is printed as JSON.
//!
//! Usage: `roto-roids [seed] [ticks]`

use roto_roids::consts::SIM_DT;
use roto_roids::sim::{FieldBounds, GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);

    log::info!("seed {seed}, running {ticks} ticks");
    let mut state = GameState::new(seed, FieldBounds::new(1280.0, 720.0));
    let mut input = TickInput::default();

    for _ in 0..ticks {
        autopilot(&state, &mut input);
        tick(&mut state, &mut input, SIM_DT);
        if state.score.phase() == GamePhase::GameOver {
            break;
        }
    }

    match serde_json::to_string_pretty(&state.hud()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize HUD: {err}"),
    }
}

/// Swing toward the nearest active meteor and shoot once roughly aligned
fn autopilot(state: &GameState, input: &mut TickInput) {
    let ship = &state.ship;
    let nearest = state
        .rounds
        .meteors()
        .iter()
        .filter(|m| m.active)
        .min_by(|a, b| {
            let da = a.pos.distance_squared(ship.pos);
            let db = b.pos.distance_squared(ship.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    *input = TickInput::default();
    if let Some(meteor) = nearest {
        let to_target = meteor.pos - ship.pos;
        let desired = to_target.y.atan2(to_target.x);
        let delta = wrap_angle(desired - ship.heading);
        // Feed the turn in as a rotary-style one-shot delta
        input.rotation_delta = delta.clamp(-0.08, 0.08);
        input.fire = delta.abs() < 0.2;
    }
}

/// Normalize an angle difference to [-pi, pi)
fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}
