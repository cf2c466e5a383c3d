//! Score, lives, level and game-phase bookkeeping
//!
//! Plus the transient "points scored here" popups the renderer floats over
//! the field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Coarse game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Lives hit zero; state persists until an explicit restart
    GameOver,
}

/// Monotonic score/lives/level counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: u32,
    lives: u8,
    level: u32,
    phase: GamePhase,
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreKeeper {
    /// Fresh game: no score, full lives, level 0 (the first round start
    /// increments it to 1)
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            level: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Award points; deltas are never negative in this game
    pub fn update_score(&mut self, delta: u32) {
        self.score += delta;
    }

    /// Lose one life, floored at 0; reaching 0 flips the phase to GameOver
    pub fn decrement_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("game over at score {} (level {})", self.score, self.level);
        }
    }

    /// Called exactly once per round start
    pub fn increment_level(&mut self) {
        self.level += 1;
    }

    /// Reset everything to initial values
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Snapshot for HUD rendering
    pub fn hud(&self) -> HudState {
        HudState {
            score: self.score,
            lives: self.lives,
            level: self.level,
            phase: self.phase,
        }
    }
}

/// Serializable HUD snapshot handed to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudState {
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
}

/// A floating score-display entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScorePopup {
    pub pos: Vec2,
    pub points: u32,
    pub ticks_left: u32,
}

/// Active score popups, aged out each tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorePopups {
    entries: Vec<ScorePopup>,
}

impl ScorePopups {
    pub fn display(&mut self, pos: Vec2, points: u32) {
        self.entries.push(ScorePopup {
            pos,
            points,
            ticks_left: SCORE_POPUP_TICKS,
        });
    }

    pub fn update(&mut self) {
        for popup in &mut self.entries {
            popup.ticks_left = popup.ticks_left.saturating_sub(1);
        }
        self.entries.retain(|p| p.ticks_left > 0);
    }

    pub fn entries(&self) -> &[ScorePopup] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lives_floor_and_game_over() {
        let mut keeper = ScoreKeeper::new();
        assert_eq!(keeper.lives(), STARTING_LIVES);
        assert_eq!(keeper.phase(), GamePhase::Playing);

        for _ in 0..STARTING_LIVES {
            keeper.decrement_life();
        }
        assert_eq!(keeper.lives(), 0);
        assert_eq!(keeper.phase(), GamePhase::GameOver);

        // Further decrements stay floored, state persists
        keeper.decrement_life();
        assert_eq!(keeper.lives(), 0);
        assert_eq!(keeper.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut keeper = ScoreKeeper::new();
        keeper.update_score(1234);
        keeper.increment_level();
        keeper.increment_level();
        for _ in 0..STARTING_LIVES {
            keeper.decrement_life();
        }

        keeper.restart();
        assert_eq!(keeper.score(), 0);
        assert_eq!(keeper.lives(), STARTING_LIVES);
        assert_eq!(keeper.level(), 0);
        assert_eq!(keeper.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_popups_age_out() {
        let mut popups = ScorePopups::default();
        popups.display(Vec2::new(10.0, 20.0), 100);
        assert_eq!(popups.entries().len(), 1);

        for _ in 0..SCORE_POPUP_TICKS {
            popups.update();
        }
        assert!(popups.entries().is_empty());
    }

    proptest! {
        /// GameOver is entered exactly when lives run out, and never before
        #[test]
        fn prop_phase_tracks_lives(hits in 0u8..10) {
            let mut keeper = ScoreKeeper::new();
            for _ in 0..hits {
                keeper.decrement_life();
            }
            if hits >= STARTING_LIVES {
                prop_assert_eq!(keeper.lives(), 0);
                prop_assert_eq!(keeper.phase(), GamePhase::GameOver);
            } else {
                prop_assert_eq!(keeper.lives(), STARTING_LIVES - hits);
                prop_assert_eq!(keeper.phase(), GamePhase::Playing);
            }
        }
    }
}
