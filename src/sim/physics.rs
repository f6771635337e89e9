//! Player physics step
//!
//! Semi-implicit integration against a flat list of platforms. The order of
//! operations matters and is part of the game feel:
//! 1. Horizontal move: left first, then right, each clamped to the canvas.
//! 2. Vertical move uses the velocity from the start of the tick, then
//!    gravity is added.
//! 3. Platforms are scanned in list order; the last one the player lands on
//!    decides the snapped position.
//! 4. Jump is only possible if a landing was detected in this same scan.
//! 5. Falling below the canvas ends the run.

use super::collision::{Rect, lands_on};
use super::input::{Action, InputState};
use super::state::{Platform, PlatformKind, Player};
use crate::consts::*;

/// What happened to the player during one physics step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerStep {
    /// Resting on a platform top this tick
    pub grounded: bool,
    /// Jump started this tick
    pub jumped: bool,
    /// Health lost to electric platforms this tick
    pub electric_damage: i32,
    /// Bottom of the world crossed
    pub fell_out: bool,
}

/// Advance the player by one tick
pub fn step_player(player: &mut Player, input: &InputState, platforms: &[Platform]) -> PlayerStep {
    let mut result = PlayerStep::default();
    let max_x = CANVAS_WIDTH - player.size.x;

    let mut new_x = player.pos.x;
    if input.is_held(Action::Left) {
        new_x = (new_x - MOVE_SPEED).max(0.0);
    }
    if input.is_held(Action::Right) {
        new_x = (new_x + MOVE_SPEED).min(max_x);
    }

    let old_vel_y = player.vel_y;
    let mut new_y = player.pos.y + old_vel_y;
    let mut new_vel_y = old_vel_y + GRAVITY;
    let mut jumping = player.jumping;

    for platform in platforms {
        let body = Rect::new(new_x, new_y, player.size.x, player.size.y);
        if !lands_on(&body, old_vel_y, &platform.rect()) {
            continue;
        }

        new_y = platform.pos.y - player.size.y;
        new_vel_y = 0.0;
        jumping = false;
        result.grounded = true;

        if platform.kind == PlatformKind::Electric {
            result.electric_damage += player.take_damage(ELECTRIC_DAMAGE);
        }
    }

    if input.is_held(Action::Jump) && !jumping && result.grounded {
        new_vel_y = JUMP_FORCE;
        jumping = true;
        result.jumped = true;
    }

    if new_y > CANVAS_HEIGHT {
        result.fell_out = true;
    }

    player.pos.x = new_x;
    player.pos.y = new_y;
    player.vel_y = new_vel_y;
    player.jumping = jumping;

    result
}
