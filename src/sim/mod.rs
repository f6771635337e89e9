//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (all rates are per tick)
//! - No randomness
//! - Stable iteration order (entity list order)
//! - No rendering or platform dependencies

pub mod boss;
pub mod collision;
pub mod enemy;
pub mod input;
pub mod items;
pub mod levels;
pub mod physics;
pub mod state;
pub mod tick;

pub use boss::{BossOutcome, BossState, step_boss};
pub use collision::{Rect, lands_on};
pub use enemy::step_enemies;
pub use input::{Action, InputState};
pub use items::collect;
pub use physics::{PlayerStep, step_player};
pub use state::{
    Boss, Collectible, CollectibleKind, DamageSource, Enemy, EnemyKind, EntityStore, GameEvent,
    GameOverCause, GamePhase, GameState, Level, Platform, PlatformKind, Player,
};
pub use tick::{reset_game, start_game, tick};
