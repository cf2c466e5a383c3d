//! Scripted enemy ship and its firing sub-system
//!
//! The enemy stays dormant until the configured interval has elapsed, then
//! crosses the field once, firing aimed shots from its own photon pool. It
//! deactivates itself when it leaves the far edge; the only external thing
//! that flips its active flag is the collision outcome.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::photons::{Photon, PhotonPool};
use super::state::FieldBounds;
use crate::consts::*;
use crate::secs_to_ticks;

/// The opponent ship proper
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShip {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl EnemyShip {
    /// Point-in-shape query (player photon vs enemy)
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.active && self.pos.distance_squared(point) <= ENEMY_SHIP_RADIUS * ENEMY_SHIP_RADIUS
    }
}

/// Timed activation plus the shooter sub-system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyController {
    pub ship: EnemyShip,
    photons: PhotonPool,
    /// Tick of the last activation (or round start)
    last_shown: u64,
    /// Ticks until the next shot while active
    fire_cooldown: u64,
}

impl EnemyController {
    pub fn new() -> Self {
        Self {
            ship: EnemyShip {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                active: false,
            },
            photons: PhotonPool::enemy(),
            last_shown: 0,
            fire_cooldown: 0,
        }
    }

    /// Activate when dormant and the interval has elapsed; resets the
    /// last-shown timestamp
    pub fn maybe_activate(&mut self, now: u64, bounds: FieldBounds, rng: &mut impl Rng) {
        if self.ship.active {
            return;
        }
        if now.saturating_sub(self.last_shown) <= secs_to_ticks(ENEMY_SHIP_INTERVAL_SECS) {
            return;
        }

        let from_left = rng.random_range(0..2) == 0;
        let y = rng.random_range(0.1..0.9) * bounds.height;
        self.ship.pos = if from_left {
            Vec2::new(-ENEMY_SHIP_RADIUS, y)
        } else {
            Vec2::new(bounds.width + ENEMY_SHIP_RADIUS, y)
        };
        self.ship.vel = Vec2::new(
            if from_left {
                ENEMY_SHIP_SPEED
            } else {
                -ENEMY_SHIP_SPEED
            },
            0.0,
        );
        self.ship.active = true;
        self.last_shown = now;
        self.fire_cooldown = secs_to_ticks(ENEMY_FIRE_INTERVAL_SECS);
        log::info!("enemy ship activated at tick {now}");
    }

    /// Advance crossing motion, self-deactivation, firing, and the pool
    pub fn update(&mut self, dt: f32, bounds: FieldBounds, target: Option<Vec2>, rng: &mut impl Rng) {
        if self.ship.active {
            // No wrap: the ship crosses once and leaves
            self.ship.pos += self.ship.vel * dt;

            let off_right = self.ship.vel.x > 0.0 && self.ship.pos.x > bounds.width + ENEMY_SHIP_RADIUS;
            let off_left = self.ship.vel.x < 0.0 && self.ship.pos.x < -ENEMY_SHIP_RADIUS;
            if off_right || off_left {
                self.ship.active = false;
            } else {
                self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
                if self.fire_cooldown == 0 {
                    self.fire_at(target, bounds, rng);
                    self.fire_cooldown = secs_to_ticks(ENEMY_FIRE_INTERVAL_SECS);
                }
            }
        }

        self.photons.advance(dt, bounds.width, bounds.height);
    }

    fn fire_at(&mut self, target: Option<Vec2>, bounds: FieldBounds, rng: &mut impl Rng) {
        // Aim at the ship with a little spread; fire straight ahead when the
        // ship is down
        let dir = match target {
            Some(pos) => {
                let aim = (pos - self.ship.pos).normalize_or_zero();
                let spread = rng.random_range(-0.15..0.15f32);
                let (sin, cos) = spread.sin_cos();
                Vec2::new(aim.x * cos - aim.y * sin, aim.x * sin + aim.y * cos)
            }
            None => self.ship.vel.normalize_or_zero(),
        };
        if dir == Vec2::ZERO {
            return;
        }
        self.photons
            .fire(self.ship.pos, dir, ENEMY_PHOTON_SPEED, bounds.max_photon_range());
    }

    /// Does any enemy photon sit inside the given circle? The hitting photon
    /// is consumed.
    pub fn photon_collides_with_ship(&mut self, center: Vec2, radius: f32) -> bool {
        for photon in self.photons.slots_mut().iter_mut().filter(|p| p.active) {
            if photon.pos.distance_squared(center) <= radius * radius {
                photon.active = false;
                return true;
            }
        }
        false
    }

    /// Collision outcome: the player shot the enemy down
    pub fn shoot_down(&mut self) {
        self.ship.active = false;
    }

    /// Round reset: dormant ship, empty pool, interval restarts from `now`
    pub fn reset(&mut self, now: u64) {
        self.ship.active = false;
        self.photons.clear();
        self.last_shown = now;
    }

    pub fn photons(&self) -> &[Photon] {
        self.photons.slots()
    }
}

impl Default for EnemyController {
    fn default() -> Self {
        Self::new()
    }
}
