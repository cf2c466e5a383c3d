//! Game state and core simulation types
//!
//! [`GameState`] exclusively owns every entity collection; all mutation
//! happens inside the owning tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::EnemyController;
use super::photons::PhotonPool;
use super::rounds::RoundManager;
use super::score::{HudState, ScoreKeeper, ScorePopups};
use crate::consts::*;
use crate::{heading_vec, wrap_position};

/// Viewport-derived field dimensions, provided by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl FieldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Field reference position (ship spawn)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Maximum projectile travel distance: half the larger dimension
    pub fn max_photon_range(&self) -> f32 {
        0.5 * self.width.max(self.height)
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading angle in radians (0 = +x)
    pub heading: f32,
    pub vel: Vec2,
    pub active: bool,
    /// Display/physics flags; neither alters collision geometry
    pub shield: bool,
    pub thrusting: bool,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            heading: -std::f32::consts::FRAC_PI_2, // Pointing up
            vel: Vec2::ZERO,
            active: true,
            shield: false,
            thrusting: false,
        }
    }

    /// Apply a one-shot rotation delta (rotary controller)
    pub fn rotate(&mut self, delta: f32) {
        self.heading += delta;
    }

    pub fn rotate_left(&mut self, dt: f32) {
        self.heading -= SHIP_TURN_RATE * dt;
    }

    pub fn rotate_right(&mut self, dt: f32) {
        self.heading += SHIP_TURN_RATE * dt;
    }

    /// Accelerate along the heading, capped at the speed limit
    pub fn thrust(&mut self, dt: f32) {
        self.vel += heading_vec(self.heading) * SHIP_THRUST_ACCEL * dt;
        let speed = self.vel.length();
        if speed > SHIP_MAX_SPEED {
            self.vel *= SHIP_MAX_SPEED / speed;
        }
    }

    /// Brake (down key)
    pub fn slow_down(&mut self, dt: f32) {
        self.vel *= (1.0 - SHIP_BRAKE * dt).max(0.0);
    }

    /// Facing direction as a unit vector
    pub fn direction(&self) -> Vec2 {
        heading_vec(self.heading)
    }

    /// Integrate and wrap at the field edges
    pub fn update(&mut self, dt: f32, bounds: FieldBounds) {
        if self.active {
            self.pos = wrap_position(self.pos + self.vel * dt, bounds.width, bounds.height);
        }
    }

    /// Put the ship back into play at the given position, at rest
    pub fn respawn_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.active = true;
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub bounds: FieldBounds,
    /// Simulation tick counter; all interval timers compare against this
    pub time_ticks: u64,
    pub ship: Ship,
    pub photons: PhotonPool,
    pub rounds: RoundManager,
    pub enemy: EnemyController,
    pub score: ScoreKeeper,
    pub popups: ScorePopups,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New session: ship at the field center, round one spawned
    pub fn new(seed: u64, bounds: FieldBounds) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut score = ScoreKeeper::new();
        let mut rounds = RoundManager::new();
        rounds.start_round(&mut score, bounds, &mut rng);

        Self {
            seed,
            bounds,
            time_ticks: 0,
            ship: Ship::new(bounds.center()),
            photons: PhotonPool::player(),
            rounds,
            enemy: EnemyController::new(),
            score,
            popups: ScorePopups::default(),
            rng,
        }
    }

    /// Explicit restart from GameOver: discard prior state, fresh round one
    pub fn restart(&mut self) {
        log::info!("restart requested, final score {}", self.score.score());
        self.score.restart();
        self.popups.clear();
        self.photons = PhotonPool::player();
        self.enemy.reset(self.time_ticks);
        self.ship = Ship::new(self.bounds.center());
        self.rounds
            .start_round(&mut self.score, self.bounds, &mut self.rng);
    }

    /// HUD snapshot for collaborators
    pub fn hud(&self) -> HudState {
        self.score.hud()
    }
}
