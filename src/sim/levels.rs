//! Level catalog
//!
//! Static layouts for the three levels. A layout is copied into a fresh
//! `EntityStore` every time a level is entered; the catalog itself is never
//! mutated.

use glam::Vec2;

use super::state::{
    Boss, Collectible, CollectibleKind, Enemy, EnemyKind, EntityStore, Level, Platform,
    PlatformKind,
};
use crate::consts::CANVAS_WIDTH;

/// Ground patrol robot stats
const ROBOT_WIDTH: f32 = 35.0;
const ROBOT_HEIGHT: f32 = 40.0;
const ROBOT_HEALTH: i32 = 30;

/// Flying patrol stats
const FLYER_SIZE: f32 = 30.0;
const FLYER_HEALTH: i32 = 20;

/// Boss stats
const BOSS_HEALTH: i32 = 200;

/// Build the entity store for a level
pub fn layout(level: Level) -> EntityStore {
    match level {
        Level::City => city(),
        Level::Clouds => clouds(),
        Level::Boss => boss_arena(),
    }
}

fn city() -> EntityStore {
    use CollectibleKind::*;
    use PlatformKind::*;

    let robot = |x: f32, y: f32, vel_x: f32| {
        Enemy::new(x, y, ROBOT_WIDTH, ROBOT_HEIGHT, vel_x, EnemyKind::GroundPatrol, ROBOT_HEALTH)
    };

    EntityStore {
        platforms: vec![
            Platform::new(0.0, 500.0, 200.0, Solid),
            Platform::new(250.0, 450.0, 150.0, Electric),
            Platform::new(450.0, 400.0, 150.0, Solid),
            Platform::new(650.0, 350.0, 150.0, Electric),
            // Street level
            Platform::new(0.0, 580.0, CANVAS_WIDTH, Solid),
        ],
        enemies: vec![
            robot(300.0, 420.0, 2.0),
            robot(500.0, 370.0, -2.0),
            robot(700.0, 320.0, 2.0),
        ],
        collectibles: vec![
            Collectible::new(120.0, 470.0, Coin),
            Collectible::new(320.0, 420.0, Crystal),
            Collectible::new(520.0, 370.0, Coin),
            Collectible::new(720.0, 320.0, Crystal),
        ],
        boss: None,
    }
}

fn clouds() -> EntityStore {
    use CollectibleKind::*;

    let flyer = |x: f32, y: f32, vel_x: f32| {
        Enemy::new(x, y, FLYER_SIZE, FLYER_SIZE, vel_x, EnemyKind::FlyingPatrol, FLYER_HEALTH)
    };

    EntityStore {
        // Rising staircase of clouds, no floor
        platforms: (0..5)
            .map(|i| {
                let i = i as f32;
                Platform::new(50.0 + i * 170.0, 500.0 - i * 50.0, 120.0, PlatformKind::Cloud)
            })
            .collect(),
        enemies: vec![
            flyer(250.0, 350.0, 1.5),
            flyer(450.0, 300.0, -1.5),
            flyer(650.0, 250.0, 1.5),
        ],
        collectibles: vec![
            Collectible::new(110.0, 470.0, Coin),
            Collectible::new(280.0, 420.0, Crystal),
            Collectible::new(450.0, 370.0, Coin),
            Collectible::new(620.0, 320.0, Crystal),
            Collectible::new(790.0, 270.0, Coin),
        ],
        boss: None,
    }
}

fn boss_arena() -> EntityStore {
    EntityStore {
        platforms: vec![
            Platform::new(0.0, 550.0, CANVAS_WIDTH, PlatformKind::Solid),
            Platform::new(100.0, 450.0, 100.0, PlatformKind::Cloud),
            Platform::new(600.0, 450.0, 100.0, PlatformKind::Cloud),
        ],
        enemies: Vec::new(),
        collectibles: Vec::new(),
        boss: Some(Boss {
            pos: Vec2::new(600.0, 380.0),
            size: Vec2::new(80.0, 100.0),
            health: BOSS_HEALTH,
            max_health: BOSS_HEALTH,
            phase: 1,
            attack_cooldown: 0,
        }),
    }
}
