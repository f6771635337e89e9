//! Boss step
//!
//! The boss never moves. Each tick its cooldown counts down; when the player
//! touches it with the cooldown spent it strikes and rearms. Otherwise a
//! player holding attack while touching it chips away at its health, and the
//! countdown is held for that tick. The strike is checked first, so a
//! simultaneous trade favours the boss.

use serde::{Deserialize, Serialize};

use super::input::{Action, InputState};
use super::state::{Boss, Player};
use crate::consts::{BOSS_ATTACK_COOLDOWN_TICKS, BOSS_CONTACT_DAMAGE, PLAYER_ATTACK_DAMAGE};

/// Observable boss state between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossState {
    /// Cooldown spent, will strike on contact
    Ready,
    /// Rearming after a strike
    Cooldown { ticks: u32 },
    Defeated,
}

impl Boss {
    pub fn state(&self) -> BossState {
        if self.is_defeated() {
            BossState::Defeated
        } else if self.attack_cooldown > 0 {
            BossState::Cooldown {
                ticks: self.attack_cooldown,
            }
        } else {
            BossState::Ready
        }
    }
}

/// Result of one boss tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossOutcome {
    /// No exchange this tick
    Idle,
    /// Boss hit the player for `damage`
    Struck { damage: i32 },
    /// Player hit the boss
    Hit { remaining: i32 },
    /// Player's hit brought the boss to zero
    Defeated,
}

/// Advance the boss by one tick against the post-physics player
pub fn step_boss(boss: &mut Boss, player: &mut Player, input: &InputState) -> BossOutcome {
    let cooldown = boss.attack_cooldown.saturating_sub(1);

    let touching = player.rect().overlaps(&boss.rect());
    if !touching {
        boss.attack_cooldown = cooldown;
        return BossOutcome::Idle;
    }

    if cooldown == 0 {
        let damage = player.take_damage(BOSS_CONTACT_DAMAGE);
        boss.attack_cooldown = BOSS_ATTACK_COOLDOWN_TICKS;
        return BossOutcome::Struck { damage };
    }

    // A landed hit leaves the cooldown where it was
    if input.is_held(Action::Attack) {
        let remaining = boss.health - PLAYER_ATTACK_DAMAGE;
        boss.health = remaining.max(0);
        if remaining <= 0 {
            return BossOutcome::Defeated;
        }
        return BossOutcome::Hit { remaining };
    }

    boss.attack_cooldown = cooldown;
    BossOutcome::Idle
}
