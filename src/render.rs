//! Push-only draw interface
//!
//! The renderer is an external collaborator. [`present`] walks the current
//! state and pushes draw calls into a [`RenderSink`]; the core never queries
//! the sink for anything.

use glam::Vec2;

use crate::sim::{GameState, HudState, MeteorTier, PhotonKind};

/// Draw-command consumer implemented by the host renderer
pub trait RenderSink {
    fn draw_ship(&mut self, pos: Vec2, heading: f32, shield: bool, thrusting: bool);
    fn draw_enemy_ship(&mut self, pos: Vec2);
    fn draw_photon(&mut self, pos: Vec2, kind: PhotonKind);
    fn draw_meteor(&mut self, pos: Vec2, tier: MeteorTier);
    fn draw_score_popup(&mut self, pos: Vec2, points: u32, ticks_left: u32);
    fn draw_hud(&mut self, hud: HudState);
}

/// Push one frame's draw state: ships, photons, meteors, then HUD overlays
pub fn present(state: &GameState, sink: &mut impl RenderSink) {
    if state.ship.active {
        sink.draw_ship(
            state.ship.pos,
            state.ship.heading,
            state.ship.shield,
            state.ship.thrusting,
        );
    }
    if state.enemy.ship.active {
        sink.draw_enemy_ship(state.enemy.ship.pos);
    }

    for photon in state.photons.slots().iter().filter(|p| p.active) {
        sink.draw_photon(photon.pos, photon.kind);
    }
    for photon in state.enemy.photons().iter().filter(|p| p.active) {
        sink.draw_photon(photon.pos, photon.kind);
    }

    for meteor in state.rounds.meteors().iter().filter(|m| m.active) {
        sink.draw_meteor(meteor.pos, meteor.tier);
    }

    for popup in state.popups.entries() {
        sink.draw_score_popup(popup.pos, popup.points, popup.ticks_left);
    }
    sink.draw_hud(state.hud());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FieldBounds;

    /// Records draw calls for assertions
    #[derive(Default)]
    struct Recorder {
        ships: usize,
        enemies: usize,
        photons: Vec<PhotonKind>,
        meteors: Vec<MeteorTier>,
        popups: usize,
        hud: Option<HudState>,
    }

    impl RenderSink for Recorder {
        fn draw_ship(&mut self, _pos: Vec2, _heading: f32, _shield: bool, _thrusting: bool) {
            self.ships += 1;
        }
        fn draw_enemy_ship(&mut self, _pos: Vec2) {
            self.enemies += 1;
        }
        fn draw_photon(&mut self, _pos: Vec2, kind: PhotonKind) {
            self.photons.push(kind);
        }
        fn draw_meteor(&mut self, _pos: Vec2, tier: MeteorTier) {
            self.meteors.push(tier);
        }
        fn draw_score_popup(&mut self, _pos: Vec2, _points: u32, _ticks_left: u32) {
            self.popups += 1;
        }
        fn draw_hud(&mut self, hud: HudState) {
            self.hud = Some(hud);
        }
    }

    #[test]
    fn test_present_pushes_active_entities_and_hud() {
        let state = GameState::new(11, FieldBounds::new(1280.0, 720.0));
        let mut sink = Recorder::default();
        present(&state, &mut sink);

        assert_eq!(sink.ships, 1);
        assert_eq!(sink.enemies, 0); // Dormant at session start
        assert_eq!(sink.meteors.len(), 5);
        assert!(sink.meteors.iter().all(|t| *t == MeteorTier::Large));
        assert!(sink.photons.is_empty());

        let hud = sink.hud.unwrap();
        assert_eq!(hud.level, 1);
        assert_eq!(hud.score, 0);
    }

    #[test]
    fn test_present_skips_inactive_ship() {
        let mut state = GameState::new(11, FieldBounds::new(1280.0, 720.0));
        state.ship.active = false;
        let mut sink = Recorder::default();
        present(&state, &mut sink);
        assert_eq!(sink.ships, 0);
        // HUD always renders
        assert!(sink.hud.is_some());
    }
}
