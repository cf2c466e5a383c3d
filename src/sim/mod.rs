//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the game state
//! - No rendering or platform dependencies
//!
//! Single-threaded and fully synchronous: every entity collection is owned
//! by [`GameState`] and mutated only inside [`tick`].

pub mod collision;
pub mod enemy;
pub mod meteors;
pub mod photons;
pub mod rounds;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, HitEvent};
pub use enemy::{EnemyController, EnemyShip};
pub use meteors::{Meteor, MeteorTier, split};
pub use photons::{Photon, PhotonKind, PhotonPool};
pub use rounds::RoundManager;
pub use score::{GamePhase, HudState, ScoreKeeper, ScorePopup, ScorePopups};
pub use state::{FieldBounds, GameState, Ship};
pub use tick::{TickInput, tick};
