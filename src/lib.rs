//! Roto Roids - fixed-tick simulation core for an Asteroids-style shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, rounds, score)
//! - `render`: Push-only draw interface consumed by an external renderer
//!
//! Rendering, input devices and windowing live outside this crate; callers
//! feed a [`sim::TickInput`] snapshot per tick and drain draw state through
//! [`render::RenderSink`].

pub mod render;
pub mod sim;

pub use sim::{GameState, TickInput, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player photon pool capacity (slots are reused, never appended)
    pub const PHOTON_POOL_SIZE: usize = 20;
    /// Pool slot permanently reserved for the tracer variant
    pub const TRACER_SLOT: usize = 0;
    /// Player photon speed (pixels/s)
    pub const PHOTON_SPEED: f32 = 420.0;
    /// Minimum interval between player shots (150 ms at 60 Hz)
    pub const PHOTON_COOLDOWN_TICKS: u32 = 9;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 14.0;
    pub const SHIP_TURN_RATE: f32 = 4.2; // radians/s
    pub const SHIP_THRUST_ACCEL: f32 = 240.0; // pixels/s²
    pub const SHIP_MAX_SPEED: f32 = 340.0;
    /// Braking strength for the slow-down input (fraction of velocity/s)
    pub const SHIP_BRAKE: f32 = 2.2;

    /// Lives at game start
    pub const STARTING_LIVES: u8 = 3;
    /// Meteors spawned per round is this plus the level number
    pub const BASE_METEOR_COUNT: u32 = 4;

    /// Enemy ship
    pub const ENEMY_SHIP_INTERVAL_SECS: f32 = 15.0;
    pub const ENEMY_FIRE_INTERVAL_SECS: f32 = 1.5;
    pub const ENEMY_SHIP_SPEED: f32 = 120.0;
    pub const ENEMY_SHIP_RADIUS: f32 = 18.0;
    /// Points for shooting down the enemy ship
    pub const ENEMY_BONUS: u32 = 2000;
    /// Enemy photon pool capacity
    pub const ENEMY_PHOTON_POOL_SIZE: usize = 5;
    pub const ENEMY_PHOTON_SPEED: f32 = 260.0;

    /// Score popup lifetime (1 second at 60 Hz)
    pub const SCORE_POPUP_TICKS: u32 = 60;
}

/// Unit vector for a heading angle (radians, 0 = +x)
#[inline]
pub fn heading_vec(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Wrap a position onto the toroidal field `[0, width) x [0, height)`
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(pos.x.rem_euclid(width), pos.y.rem_euclid(height))
}

/// Convert a wall-clock interval to whole simulation ticks
#[inline]
pub fn secs_to_ticks(secs: f32) -> u64 {
    (secs / consts::SIM_DT).round() as u64
}
