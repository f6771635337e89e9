//! Collectible pickup step

use super::collision::Rect;
use super::state::{Collectible, CollectibleKind};

/// Mark every uncollected item overlapping `player` as collected.
///
/// Returns the kinds picked up this tick, in list order. Items already
/// collected are skipped, so calling this again is a no-op for them.
pub fn collect(collectibles: &mut [Collectible], player: &Rect) -> Vec<CollectibleKind> {
    let mut picked = Vec::new();
    for item in collectibles.iter_mut().filter(|c| !c.collected) {
        if item.rect().overlaps(player) {
            item.collected = true;
            picked.push(item.kind);
        }
    }
    picked
}
