//! Enemy patrol step
//!
//! Ground patrols test their projected position against every platform in the
//! level, not just the one they stand on: each platform whose span the
//! projection leaves flips the velocity and cancels the move. Flying patrols
//! only turn at the canvas sides.

use super::state::{Enemy, EnemyKind, Platform, Player};
use crate::consts::{CANVAS_WIDTH, ENEMY_CONTACT_DAMAGE};

/// Advance every enemy by one tick and apply contact damage to the player.
///
/// Contact is tested with each enemy's position from the start of the tick
/// against the player's post-physics bounds. Returns total health lost.
pub fn step_enemies(enemies: &mut [Enemy], player: &mut Player, platforms: &[Platform]) -> i32 {
    let player_rect = player.rect();
    let mut damage = 0;

    for enemy in enemies.iter_mut() {
        let touching = enemy.rect().overlaps(&player_rect);

        enemy.pos.x = match enemy.kind {
            EnemyKind::GroundPatrol => patrol_platforms(enemy, platforms),
            EnemyKind::FlyingPatrol => patrol_canvas(enemy),
        };

        if touching {
            damage += player.take_damage(ENEMY_CONTACT_DAMAGE);
        }
    }

    damage
}

/// Resolve a ground patrol's next x, flipping velocity once per violated platform
fn patrol_platforms(enemy: &mut Enemy, platforms: &[Platform]) -> f32 {
    let mut new_x = enemy.pos.x + enemy.vel_x;
    for platform in platforms {
        let right = platform.pos.x + platform.width;
        if new_x + enemy.size.x > right || new_x < platform.pos.x {
            enemy.vel_x = -enemy.vel_x;
            new_x = enemy.pos.x;
        }
    }
    new_x
}

fn patrol_canvas(enemy: &mut Enemy) -> f32 {
    let new_x = enemy.pos.x + enemy.vel_x;
    if new_x < 0.0 || new_x + enemy.size.x > CANVAS_WIDTH {
        enemy.vel_x = -enemy.vel_x;
        return enemy.pos.x;
    }
    new_x
}
