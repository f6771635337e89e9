//! Game state and core simulation types
//!
//! `GameState` is the single owned session object: the player, the entities
//! of the active level and the session counters. Every step function borrows
//! the pieces it needs from it; nothing lives in globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started yet, or returned to the menu by a reset
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Player died or fell out of the world
    GameOver,
    /// Boss defeated
    Victory,
}

impl GamePhase {
    /// Game over and victory both freeze the simulation
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

/// The three levels, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    City,
    Clouds,
    Boss,
}

impl Level {
    /// Level that follows this one; the boss level never advances
    pub fn next(&self) -> Option<Level> {
        match self {
            Level::City => Some(Level::Clouds),
            Level::Clouds => Some(Level::Boss),
            Level::Boss => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::City => "City",
            Level::Clouds => "Clouds",
            Level::Boss => "Boss",
        }
    }

    pub fn is_boss(&self) -> bool {
        *self == Level::Boss
    }
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/tick, positive is down)
    pub vel_y: f32,
    /// Set on jump, cleared on landing
    pub jumping: bool,
    pub health: i32,
    pub max_health: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}

impl Player {
    /// Fresh player at the spawn point with full health
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            jumping: false,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Apply damage, flooring health at zero. Returns the amount actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health - amount).max(0);
        before - self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Enemy movement style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Walks along platforms, turning at platform edges
    GroundPatrol,
    /// Flies across the screen, turning at the canvas sides
    FlyingPatrol,
}

/// A patrolling enemy. Enemies only deal damage and are never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (pixels/tick)
    pub vel_x: f32,
    pub kind: EnemyKind,
    pub health: i32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, width: f32, height: f32, vel_x: f32, kind: EnemyKind, health: i32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            vel_x,
            kind,
            health,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Coin,
    Crystal,
}

impl CollectibleKind {
    /// Score awarded on pickup
    pub fn points(&self) -> u64 {
        match self {
            CollectibleKind::Coin => COIN_SCORE,
            CollectibleKind::Crystal => CRYSTAL_SCORE,
        }
    }
}

/// A collectible. Collected items stay in the store as inert records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub kind: CollectibleKind,
    pub collected: bool,
}

impl Collectible {
    pub fn new(x: f32, y: f32, kind: CollectibleKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            collected: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(COLLECTIBLE_SIZE))
    }
}

/// Platform surface types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Solid,
    Cloud,
    /// Hurts the player every tick they stand on it
    Electric,
}

/// A static platform, always `PLATFORM_HEIGHT` tall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub width: f32,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, kind: PlatformKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            kind,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::new(self.width, PLATFORM_HEIGHT))
    }
}

/// The boss of the final level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Stored for display; no transition reads it
    pub phase: u32,
    /// Ticks until the boss can hit the player again
    pub attack_cooldown: u32,
}

impl Boss {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// Runtime entities of the active level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityStore {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
    pub boss: Option<Boss>,
}

impl EntityStore {
    /// True once every collectible has been picked up (vacuously true when none)
    pub fn all_collected(&self) -> bool {
        self.collectibles.iter().all(|c| c.collected)
    }

    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.collected).count()
    }
}

/// What hurt the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSource {
    Electric,
    Enemy,
    Boss,
}

/// Why the run ended in a game over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    FellOut,
    HealthDepleted,
}

/// Something that happened during the last tick (for audio/HUD feedback)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerDamaged { source: DamageSource, amount: i32 },
    CollectiblePicked { kind: CollectibleKind, points: u64 },
    BossHit { remaining: i32 },
    LevelAdvanced { from: Level, to: Level },
    GameOver { cause: GameOverCause },
    Victory,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    /// Active level
    pub level: Level,
    /// Score (never decreases during a run)
    pub score: u64,
    /// Coins picked up this run
    pub coins: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    pub player: Player,
    pub entities: EntityStore,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// A session sitting in the menu, before the first start
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn victory(&self) -> bool {
        self.phase == GamePhase::Victory
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// JSON snapshot for an out-of-process renderer or HUD
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order() {
        assert_eq!(Level::City.next(), Some(Level::Clouds));
        assert_eq!(Level::Clouds.next(), Some(Level::Boss));
        assert_eq!(Level::Boss.next(), None);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut player = Player::spawn();
        assert_eq!(player.take_damage(30), 30);
        assert_eq!(player.health, 70);
        assert_eq!(player.take_damage(100), 70);
        assert_eq!(player.health, 0);
        assert!(player.is_dead());
        assert_eq!(player.take_damage(5), 0);
    }

    #[test]
    fn test_all_collected_vacuous_for_empty_store() {
        let store = EntityStore::default();
        assert!(store.all_collected());
    }

    #[test]
    fn test_collectible_box_is_fixed_size() {
        let coin = Collectible::new(120.0, 470.0, CollectibleKind::Coin);
        let rect = coin.rect();
        assert_eq!(rect.right(), 140.0);
        assert_eq!(rect.bottom(), 490.0);
    }

    #[test]
    fn test_new_session_waits_in_menu() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(!state.game_over());
        assert!(!state.victory());
        assert_eq!(state.player.pos, Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new();
        let json = state.to_json().unwrap();
        assert!(json.contains("\"phase\":\"Menu\""));
    }
}
