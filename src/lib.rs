//! Cosmic Jumper - A three-level side-view platformer
//!
//! Core modules:
//! - `autopilot`: Seeded input script for headless demo runs
//! - `sim`: Deterministic simulation (physics, enemies, boss, progression)
//! - `runner`: Fixed-timestep driver that turns frame time into ticks
//! - `hud`: Read-only display snapshot for the HUD/menu collaborator
//! - `settings`: Key bindings and timing configuration
//! - `highscores`: In-memory history of finished runs

pub mod autopilot;
pub mod highscores;
pub mod hud;
pub mod runner;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use hud::HudSnapshot;
pub use runner::Runner;
pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (pixels, y grows downward)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_FORCE: f32 = -15.0;
    /// Horizontal displacement per tick while a direction is held
    pub const MOVE_SPEED: f32 = 5.0;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 400.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;

    /// Every platform is this tall; also the landing tolerance band
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Collectibles are 20x20 boxes
    pub const COLLECTIBLE_SIZE: f32 = 20.0;

    /// Damage per tick standing on an electric platform
    pub const ELECTRIC_DAMAGE: i32 = 5;
    /// Damage per tick touching an enemy
    pub const ENEMY_CONTACT_DAMAGE: i32 = 1;
    /// Damage dealt by the boss when its cooldown is ready
    pub const BOSS_CONTACT_DAMAGE: i32 = 10;
    /// Damage dealt to the boss per tick of player attack
    pub const PLAYER_ATTACK_DAMAGE: i32 = 5;
    /// Boss cooldown after hitting the player (0.5s at 60 Hz)
    pub const BOSS_ATTACK_COOLDOWN_TICKS: u32 = 30;

    /// Rewards
    pub const COIN_SCORE: u64 = 10;
    pub const CRYSTAL_SCORE: u64 = 50;
}
