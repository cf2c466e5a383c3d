//! Meteor size tiers and the split rule
//!
//! Tiers form a linear chain Large -> Medium -> Small -> Terminal. Behavior
//! is a constant table lookup per tier; `Terminal` is the explicit
//! no-further-meteor variant and never appears on the field.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::wrap_position;

/// Meteor size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeteorTier {
    Large,
    Medium,
    Small,
    /// End of the chain: no score, no children, never spawned
    Terminal,
}

impl MeteorTier {
    /// Points awarded when a meteor of this tier is destroyed
    pub fn score(self) -> u32 {
        match self {
            MeteorTier::Large => 20,
            MeteorTier::Medium => 50,
            MeteorTier::Small => 100,
            MeteorTier::Terminal => 0,
        }
    }

    /// Collision radius (pixels)
    pub fn radius(self) -> f32 {
        match self {
            MeteorTier::Large => 48.0,
            MeteorTier::Medium => 28.0,
            MeteorTier::Small => 14.0,
            MeteorTier::Terminal => 0.0,
        }
    }

    /// Drift speed range (pixels/s); smaller rocks move faster
    pub fn speed_range(self) -> (f32, f32) {
        match self {
            MeteorTier::Large => (40.0, 90.0),
            MeteorTier::Medium => (60.0, 130.0),
            MeteorTier::Small => (90.0, 180.0),
            MeteorTier::Terminal => (0.0, 0.0),
        }
    }

    /// Next-smaller tier. Total over all tiers; Terminal maps to itself.
    pub fn successor(self) -> MeteorTier {
        match self {
            MeteorTier::Large => MeteorTier::Medium,
            MeteorTier::Medium => MeteorTier::Small,
            MeteorTier::Small => MeteorTier::Terminal,
            MeteorTier::Terminal => MeteorTier::Terminal,
        }
    }
}

/// A drifting meteor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Meteor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: MeteorTier,
    pub active: bool,
}

impl Meteor {
    /// Spawn an active meteor with a random drift direction and speed
    pub fn spawn(tier: MeteorTier, pos: Vec2, rng: &mut impl Rng) -> Self {
        debug_assert!(tier != MeteorTier::Terminal, "Terminal tier is never spawned");
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let (lo, hi) = tier.speed_range();
        let speed = rng.random_range(lo..hi);
        Self {
            pos,
            vel: crate::heading_vec(angle) * speed,
            tier,
            active: true,
        }
    }

    /// Integrate drift and wrap at the field edges
    pub fn update(&mut self, dt: f32, width: f32, height: f32) {
        if self.active {
            self.pos = wrap_position(self.pos + self.vel * dt, width, height);
        }
    }

    /// Point-in-shape test against the meteor's collision circle
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.tier.radius() * self.tier.radius()
    }

    /// Circle-overlap test (ship vs meteor)
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let reach = self.tier.radius() + radius;
        self.pos.distance_squared(center) <= reach * reach
    }
}

/// Split a destroyed meteor into its children.
///
/// Non-terminal parents yield exactly two children of the successor tier at
/// the parent's position with independent random velocities; a parent whose
/// successor is Terminal yields none.
pub fn split(parent_tier: MeteorTier, pos: Vec2, rng: &mut impl Rng) -> Vec<Meteor> {
    let child_tier = parent_tier.successor();
    if child_tier == MeteorTier::Terminal {
        return Vec::new();
    }
    vec![
        Meteor::spawn(child_tier, pos, rng),
        Meteor::spawn(child_tier, pos, rng),
    ]
}
