//! Round (wave) progression
//!
//! The round manager owns the active meteor set. A round is complete exactly
//! when no active meteor remains; starting the next round bumps the level
//! and spawns `BASE_METEOR_COUNT + level` Large meteors dispersed around the
//! field edge with independent random velocities.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::meteors::{Meteor, MeteorTier};
use super::score::ScoreKeeper;
use super::state::FieldBounds;
use crate::consts::*;

/// Owner of the active meteor collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundManager {
    meteors: Vec<Meteor>,
}

impl RoundManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the next round: increment the level, then replace the meteor
    /// set with `BASE_METEOR_COUNT + level` Large meteors.
    pub fn start_round(
        &mut self,
        score: &mut ScoreKeeper,
        bounds: FieldBounds,
        rng: &mut impl Rng,
    ) {
        score.increment_level();
        let count = BASE_METEOR_COUNT + score.level();

        self.meteors.clear();
        for _ in 0..count {
            let pos = edge_point(bounds, rng);
            self.meteors.push(Meteor::spawn(MeteorTier::Large, pos, rng));
        }
        log::info!("round start: level {}, {} meteors", score.level(), count);
    }

    /// True iff every meteor in the collection is inactive
    pub fn is_complete(&self) -> bool {
        self.meteors.iter().all(|m| !m.active)
    }

    /// Advance meteor drift
    pub fn update(&mut self, dt: f32, bounds: FieldBounds) {
        for meteor in &mut self.meteors {
            meteor.update(dt, bounds.width, bounds.height);
        }
    }

    /// Append split children produced by a hit this tick
    pub fn add_children(&mut self, children: Vec<Meteor>) {
        self.meteors.extend(children);
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    pub fn meteors_mut(&mut self) -> &mut [Meteor] {
        &mut self.meteors
    }

    pub fn active_count(&self) -> usize {
        self.meteors.iter().filter(|m| m.active).count()
    }
}

/// Random point on the field boundary, so new rocks start away from the
/// ship's respawn position at the center
fn edge_point(bounds: FieldBounds, rng: &mut impl Rng) -> Vec2 {
    let t = rng.random_range(0.0..2.0 * (bounds.width + bounds.height));
    if t < bounds.width {
        Vec2::new(t, 0.0)
    } else if t < bounds.width + bounds.height {
        Vec2::new(bounds.width, t - bounds.width)
    } else if t < 2.0 * bounds.width + bounds.height {
        Vec2::new(t - bounds.width - bounds.height, bounds.height)
    } else {
        Vec2::new(0.0, t - 2.0 * bounds.width - bounds.height)
    }
}
