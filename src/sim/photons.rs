//! Pooled projectile ("photon") entities
//!
//! Photons live in a fixed-capacity pool: firing reuses the first inactive
//! slot and a saturated pool drops the shot. Slots are never appended, so
//! capacity violations are structurally impossible. One slot is permanently
//! the tracer variant and is reactivated in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::wrap_position;

/// Projectile variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotonKind {
    Standard,
    /// Alternate visual treatment, pinned to one pool slot
    Tracer,
    /// Fired by the enemy ship
    Enemy,
}

/// A pooled projectile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Photon {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Distance covered since firing
    pub traveled: f32,
    /// Deactivates once `traveled` exceeds this
    pub max_range: f32,
    pub active: bool,
    pub kind: PhotonKind,
}

impl Photon {
    fn idle(kind: PhotonKind) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            traveled: 0.0,
            max_range: 0.0,
            active: false,
            kind,
        }
    }
}

/// Fixed-capacity reusable projectile pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotonPool {
    slots: Vec<Photon>,
    /// Ticks until the next shot is accepted
    cooldown: u32,
}

impl PhotonPool {
    /// Player pool: 20 slots, slot [`TRACER_SLOT`] is the tracer variant
    pub fn player() -> Self {
        debug_assert!(TRACER_SLOT < PHOTON_POOL_SIZE);
        let mut slots = vec![Photon::idle(PhotonKind::Standard); PHOTON_POOL_SIZE];
        slots[TRACER_SLOT].kind = PhotonKind::Tracer;
        Self { slots, cooldown: 0 }
    }

    /// Enemy pool: smaller, every slot the enemy-fired variant
    pub fn enemy() -> Self {
        Self {
            slots: vec![Photon::idle(PhotonKind::Enemy); ENEMY_PHOTON_POOL_SIZE],
            cooldown: 0,
        }
    }

    /// Activate the first inactive slot with the given kinematics.
    ///
    /// Returns `false` when the shot was dropped (pool saturated or cooldown
    /// still running) - that is a no-op, not an error.
    pub fn fire(&mut self, origin: Vec2, dir: Vec2, speed: f32, max_range: f32) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        let Some(slot) = self.slots.iter_mut().find(|p| !p.active) else {
            return false;
        };
        // Reactivate in place; the slot keeps its variant tag
        slot.pos = origin;
        slot.vel = dir * speed;
        slot.traveled = 0.0;
        slot.max_range = max_range;
        slot.active = true;
        self.cooldown = PHOTON_COOLDOWN_TICKS;
        true
    }

    /// Integrate active slots, retiring any that exceed their range bound
    pub fn advance(&mut self, dt: f32, width: f32, height: f32) {
        self.cooldown = self.cooldown.saturating_sub(1);
        for photon in self.slots.iter_mut().filter(|p| p.active) {
            photon.pos = wrap_position(photon.pos + photon.vel * dt, width, height);
            photon.traveled += photon.vel.length() * dt;
            if photon.traveled > photon.max_range {
                photon.active = false;
            }
        }
    }

    /// Deactivate every slot and reset the cooldown (round reset)
    pub fn clear(&mut self) {
        for photon in &mut self.slots {
            photon.active = false;
        }
        self.cooldown = 0;
    }

    pub fn slots(&self) -> &[Photon] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Photon] {
        &mut self.slots
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }
}
