//! Pairwise collision detection
//!
//! One pass per tick, in a fixed order. Outcomes come back as a direct
//! return value and are consumed by the orchestrator in the same call stack;
//! there is no event queue and no subscribers.

use serde::{Deserialize, Serialize};

use glam::Vec2;

use super::enemy::EnemyController;
use super::meteors::MeteorTier;
use super::photons::{PhotonKind, PhotonPool};
use super::rounds::RoundManager;
use super::state::Ship;
use crate::consts::*;

/// A resolved meteor hit: tier, location, points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    pub tier: MeteorTier,
    pub pos: Vec2,
    pub points: u32,
}

/// Everything the collision pass decided this tick
#[derive(Debug, Clone, Default)]
pub struct CollisionOutcome {
    /// Meteor hits, in detection order
    pub hits: Vec<HitEvent>,
    /// The ship was destroyed; a flag, not a count - any number of
    /// same-tick sources costs exactly one life
    pub ship_destroyed: bool,
    /// The enemy ship was shot down
    pub enemy_destroyed: bool,
}

/// Run the collision pass over the current tick's snapshot.
///
/// Order matters for which score adjustments land first:
/// 1. player photons vs meteors
/// 2. enemy photons vs ship
/// 3. player photons vs enemy ship
/// 4. ship vs meteors
///
/// Hit meteors deactivate immediately, so nothing is hit twice in one tick.
pub fn resolve(
    ship: &mut Ship,
    photons: &mut PhotonPool,
    rounds: &mut RoundManager,
    enemy: &mut EnemyController,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    // 1. Player photons vs meteors: point-in-circle, both deactivate
    for meteor in rounds.meteors_mut().iter_mut().filter(|m| m.active) {
        for photon in photons.slots_mut().iter_mut().filter(|p| p.active) {
            debug_assert!(photon.kind != PhotonKind::Enemy);
            if meteor.contains_point(photon.pos) {
                meteor.active = false;
                photon.active = false;
                outcome.hits.push(HitEvent {
                    tier: meteor.tier,
                    pos: meteor.pos,
                    points: meteor.tier.score(),
                });
                break;
            }
        }
    }

    // 2. Enemy photons vs ship: the hitting photon is consumed
    if ship.active && enemy.photon_collides_with_ship(ship.pos, SHIP_RADIUS) {
        ship.active = false;
        outcome.ship_destroyed = true;
    }

    // 3. Player photons vs enemy ship. The photon flies on; only the enemy
    // deactivates, and contains_point goes false with it.
    for photon in photons.slots().iter().filter(|p| p.active) {
        if enemy.ship.contains_point(photon.pos) {
            enemy.shoot_down();
            outcome.enemy_destroyed = true;
        }
    }

    // 4. Ship vs meteors. Every overlapping meteor is destroyed and scored,
    // but the ship costs one life total.
    if ship.active {
        let ship_pos = ship.pos;
        for meteor in rounds.meteors_mut().iter_mut().filter(|m| m.active) {
            if meteor.overlaps_circle(ship_pos, SHIP_RADIUS) {
                meteor.active = false;
                outcome.hits.push(HitEvent {
                    tier: meteor.tier,
                    pos: meteor.pos,
                    points: meteor.tier.score(),
                });
                ship.active = false;
                outcome.ship_destroyed = true;
            }
        }
    }

    outcome
}
