//! Fixed timestep simulation tick
//!
//! One synchronous `tick` per rendering frame: input snapshot, kinematics,
//! collision pass, outcome application, round/enemy bookkeeping. Collision
//! outcomes are applied in the same tick that detected them.

use super::collision;
use super::meteors;
use super::score::GamePhase;
use super::state::GameState;
use crate::consts::*;

/// Input snapshot for a single tick (polled once by the host)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// One-shot rotation delta from a rotary controller; the core zeroes it
    /// after application so it cannot apply twice
    pub rotation_delta: f32,
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// Brake (down key)
    pub slow_down: bool,
    /// Fire; doubles as the restart control at GameOver
    pub fire: bool,
    pub shield: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &mut TickInput, dt: f32) {
    state.time_ticks += 1;

    // GameOver is a normal end-state: everything holds still until an
    // explicit restart
    if state.score.phase() == GamePhase::GameOver {
        if input.fire {
            input.fire = false;
            state.restart();
        }
        state.popups.update();
        return;
    }

    // Input application
    if input.rotation_delta != 0.0 {
        state.ship.rotate(input.rotation_delta);
        input.rotation_delta = 0.0;
    }
    if input.turn_left {
        state.ship.rotate_left(dt);
    }
    if input.turn_right {
        state.ship.rotate_right(dt);
    }
    state.ship.thrusting = input.thrust;
    if input.thrust {
        state.ship.thrust(dt);
    } else if input.slow_down {
        state.ship.slow_down(dt);
    }
    state.ship.shield = input.shield;
    if input.fire && state.ship.active {
        state.photons.fire(
            state.ship.pos,
            state.ship.direction(),
            PHOTON_SPEED,
            state.bounds.max_photon_range(),
        );
    }

    // Advance kinematics
    state.ship.update(dt, state.bounds);
    state
        .photons
        .advance(dt, state.bounds.width, state.bounds.height);
    state.rounds.update(dt, state.bounds);
    let target = state.ship.active.then_some(state.ship.pos);
    state.enemy.update(dt, state.bounds, target, &mut state.rng);

    // Collision pass; outcomes applied synchronously below
    let outcome = collision::resolve(
        &mut state.ship,
        &mut state.photons,
        &mut state.rounds,
        &mut state.enemy,
    );

    for hit in &outcome.hits {
        state.score.update_score(hit.points);
        state.popups.display(hit.pos, hit.points);
        let children = meteors::split(hit.tier, hit.pos, &mut state.rng);
        state.rounds.add_children(children);
    }
    if outcome.enemy_destroyed {
        state.score.update_score(ENEMY_BONUS);
        state.popups.display(state.enemy.ship.pos, ENEMY_BONUS);
    }
    if outcome.ship_destroyed {
        state.score.decrement_life();
    }

    // Respawn at the field center while lives remain; at GameOver the ship
    // stays down until restart
    if !state.ship.active && state.score.lives() > 0 {
        state.ship.respawn_at(state.bounds.center());
    }

    // Round transition, at most once per tick
    if state.rounds.is_complete() {
        state.photons.clear();
        state.enemy.reset(state.time_ticks);
        state
            .rounds
            .start_round(&mut state.score, state.bounds, &mut state.rng);
    }

    // Enemy spawn timing
    state
        .enemy
        .maybe_activate(state.time_ticks, state.bounds, &mut state.rng);

    state.popups.update();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::meteors::{Meteor, MeteorTier};
    use crate::sim::state::FieldBounds;
    use glam::Vec2;

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, FieldBounds::new(1280.0, 720.0))
    }

    /// Park a stationary player photon inside the given position
    fn plant_photon(state: &mut GameState, pos: Vec2) {
        let slot = &mut state.photons.slots_mut()[1];
        slot.pos = pos;
        slot.vel = Vec2::ZERO;
        slot.traveled = 0.0;
        slot.max_range = 10_000.0;
        slot.active = true;
    }

    /// Pin the spawned rocks to known, well-separated spots so scenarios
    /// are position-exact
    fn park_meteors(state: &mut GameState) {
        for (i, meteor) in state.rounds.meteors_mut().iter_mut().enumerate() {
            meteor.pos = Vec2::new(120.0 + 200.0 * i as f32, 620.0);
            meteor.vel = Vec2::ZERO;
        }
    }

    /// Park a stationary meteor of the given tier, far from the ship
    fn plant_meteor(state: &mut GameState, tier: MeteorTier, pos: Vec2) {
        state.rounds.add_children(vec![Meteor {
            pos,
            vel: Vec2::ZERO,
            tier,
            active: true,
        }]);
    }

    #[test]
    fn test_large_hit_splits_into_two_medium() {
        let mut state = new_state(1);
        park_meteors(&mut state);
        let target_pos = state.rounds.meteors()[0].pos;
        plant_photon(&mut state, target_pos);
        let score_before = state.score.score();

        tick(&mut state, &mut TickInput::default(), SIM_DT);

        assert_eq!(state.score.score(), score_before + MeteorTier::Large.score());
        let mediums = state
            .rounds
            .meteors()
            .iter()
            .filter(|m| m.active && m.tier == MeteorTier::Medium)
            .count();
        let larges = state
            .rounds
            .meteors()
            .iter()
            .filter(|m| m.active && m.tier == MeteorTier::Large)
            .count();
        assert_eq!(mediums, 2);
        assert_eq!(larges, 4);
        assert_eq!(state.rounds.active_count(), 6);
        // A popup was emitted at the hit location
        assert!(!state.popups.entries().is_empty());
    }

    #[test]
    fn test_small_hit_leaves_no_children() {
        let mut state = new_state(2);
        park_meteors(&mut state);
        // Keep the regular rocks alive so the round does not complete
        let small_pos = Vec2::new(50.0, 50.0);
        plant_meteor(&mut state, MeteorTier::Small, small_pos);
        plant_photon(&mut state, small_pos);
        let before = state.rounds.active_count();
        let score_before = state.score.score();

        tick(&mut state, &mut TickInput::default(), SIM_DT);

        assert_eq!(state.rounds.active_count(), before - 1);
        assert_eq!(state.score.score(), score_before + MeteorTier::Small.score());
        assert_eq!(state.score.level(), 1);
    }

    #[test]
    fn test_clearing_last_meteor_starts_next_round() {
        let mut state = new_state(3);
        for meteor in state.rounds.meteors_mut() {
            meteor.active = false;
        }

        tick(&mut state, &mut TickInput::default(), SIM_DT);

        // Level 2 round: 4 + 2 fresh Large meteors
        assert_eq!(state.score.level(), 2);
        assert_eq!(state.rounds.active_count(), 6);
        assert!(
            state
                .rounds
                .meteors()
                .iter()
                .all(|m| m.tier == MeteorTier::Large)
        );
    }

    #[test]
    fn test_ship_meteor_collision_costs_one_life_and_splits() {
        let mut state = new_state(4);
        park_meteors(&mut state);
        let ship_pos = state.ship.pos;
        state.rounds.meteors_mut()[0].pos = ship_pos;

        tick(&mut state, &mut TickInput::default(), SIM_DT);

        assert_eq!(state.score.lives(), STARTING_LIVES - 1);
        // The dead Large spawned two Medium children
        let mediums = state
            .rounds
            .meteors()
            .iter()
            .filter(|m| m.active && m.tier == MeteorTier::Medium)
            .count();
        assert_eq!(mediums, 2);
        // Lives remain, so the ship came back at the field center
        assert!(state.ship.active);
        assert_eq!(state.ship.pos, state.bounds.center());
    }

    #[test]
    fn test_simultaneous_hits_cost_one_life() {
        let mut state = new_state(5);
        park_meteors(&mut state);
        let ship_pos = state.ship.pos;
        plant_meteor(&mut state, MeteorTier::Small, ship_pos);
        plant_meteor(&mut state, MeteorTier::Small, ship_pos + Vec2::new(4.0, 0.0));

        tick(&mut state, &mut TickInput::default(), SIM_DT);

        assert_eq!(state.score.lives(), STARTING_LIVES - 1);
    }

    #[test]
    fn test_enemy_shootdown_awards_bonus() {
        let mut state = new_state(6);
        park_meteors(&mut state);
        state.enemy.ship.active = true;
        state.enemy.ship.pos = Vec2::new(200.0, 200.0);
        state.enemy.ship.vel = Vec2::ZERO;
        plant_photon(&mut state, Vec2::new(200.0, 200.0));
        let score_before = state.score.score();

        tick(&mut state, &mut TickInput::default(), SIM_DT);

        assert!(!state.enemy.ship.active);
        assert_eq!(state.score.score(), score_before + ENEMY_BONUS);
        assert!(
            state
                .popups
                .entries()
                .iter()
                .any(|p| p.points == ENEMY_BONUS)
        );
    }

    #[test]
    fn test_rotation_delta_is_one_shot() {
        let mut state = new_state(7);
        let heading = state.ship.heading;
        let mut input = TickInput {
            rotation_delta: 0.5,
            ..Default::default()
        };

        tick(&mut state, &mut input, SIM_DT);
        assert!((state.ship.heading - heading - 0.5).abs() < 1e-6);
        assert_eq!(input.rotation_delta, 0.0);

        // Re-running with the cleared input must not rotate again
        tick(&mut state, &mut input, SIM_DT);
        assert!((state.ship.heading - heading - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_fire_input_spawns_photon() {
        let mut state = new_state(8);
        let mut input = TickInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &mut input, SIM_DT);
        assert_eq!(state.photons.active_count(), 1);

        // Held fire is gated by the cooldown
        tick(&mut state, &mut input, SIM_DT);
        assert_eq!(state.photons.active_count(), 1);
    }

    #[test]
    fn test_game_over_persists_until_restart() {
        let mut state = new_state(9);
        park_meteors(&mut state);
        // Burn down to the last life, then feed the ship to a rock
        for _ in 0..STARTING_LIVES - 1 {
            state.score.decrement_life();
        }
        let ship_pos = state.ship.pos;
        plant_meteor(&mut state, MeteorTier::Small, ship_pos);

        tick(&mut state, &mut TickInput::default(), SIM_DT);
        assert_eq!(state.score.phase(), GamePhase::GameOver);
        assert!(!state.ship.active);
        let score_at_death = state.score.score();

        // Ticks keep flowing but nothing changes
        for _ in 0..30 {
            tick(&mut state, &mut TickInput::default(), SIM_DT);
        }
        assert_eq!(state.score.phase(), GamePhase::GameOver);
        assert!(!state.ship.active);
        assert_eq!(state.score.score(), score_at_death);

        // Fire restarts the session
        let mut input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &mut input, SIM_DT);
        assert_eq!(state.score.phase(), GamePhase::Playing);
        assert_eq!(state.score.score(), 0);
        assert_eq!(state.score.lives(), STARTING_LIVES);
        assert_eq!(state.score.level(), 1);
        assert_eq!(state.rounds.active_count(), 5);
        assert!(state.ship.active);
        // The restart press was consumed, not treated as a shot
        assert!(!input.fire);
    }

    #[test]
    fn test_determinism_under_same_seed() {
        let mut a = new_state(99);
        let mut b = new_state(99);

        let script = [
            TickInput {
                thrust: true,
                ..Default::default()
            },
            TickInput {
                fire: true,
                turn_left: true,
                ..Default::default()
            },
            TickInput {
                rotation_delta: 0.3,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for step in &script {
            for _ in 0..60 {
                tick(&mut a, &mut step.clone(), SIM_DT);
                tick(&mut b, &mut step.clone(), SIM_DT);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score.score(), b.score.score());
        assert_eq!(a.rounds.meteors().len(), b.rounds.meteors().len());
        assert_eq!(a.ship.pos, b.ship.pos);
        assert_eq!(a.ship.heading, b.ship.heading);
    }
}
