//! HUD snapshot
//!
//! Everything the HUD/menu overlay shows, derived from the session in one
//! place so the display layer never reaches into simulation internals.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

/// Overlay shown once a run has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    GameOver { score: u64 },
    Victory { score: u64, coins: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub health: i32,
    pub max_health: i32,
    /// 0-100
    pub health_percent: f32,
    pub coins: u32,
    pub score: u64,
    pub level_label: &'static str,
    /// 0-100, only while a boss is present
    pub boss_health_percent: Option<f32>,
    /// Collectibles still to pick up on this level
    pub remaining: usize,
    pub show_menu: bool,
    pub banner: Option<Banner>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let player = &state.player;
        let banner = match state.phase {
            GamePhase::GameOver => Some(Banner::GameOver { score: state.score }),
            GamePhase::Victory => Some(Banner::Victory {
                score: state.score,
                coins: state.coins,
            }),
            GamePhase::Menu | GamePhase::Playing => None,
        };

        Self {
            health: player.health,
            max_health: player.max_health,
            health_percent: percent(player.health, player.max_health),
            coins: state.coins,
            score: state.score,
            level_label: state.level.as_str(),
            boss_health_percent: state
                .entities
                .boss
                .as_ref()
                .map(|b| percent(b.health, b.max_health)),
            remaining: state.entities.remaining_collectibles(),
            show_menu: state.phase == GamePhase::Menu,
            banner,
        }
    }
}

fn percent(value: i32, max: i32) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    value as f32 / max as f32 * 100.0
}
