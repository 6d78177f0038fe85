//! Collision engine.
//!
//! A single primitive is used for every check: the horizontal midpoint of
//! one body must fall inside the closed x-span of the other.  The lane is
//! shared, so y is never looked at.

use crate::entities::{Bounds, Enemy, Projectile, ProtectedCharacter, SpriteId};

/// True iff `a`'s horizontal centre lies in `[b.x, b.x + b.width]`.
/// Asymmetric: `a` is treated as a point, `b` as an interval.
pub fn overlap(a: &Bounds, b: &Bounds) -> bool {
    let mid = a.center_x();
    mid >= b.x && mid <= b.right()
}

/// Result of one scan.  Derived from positions, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// An enemy reached the meditating ninja.
    pub game_over: bool,
    /// (shuriken, enemy) pairs that took each other out, in detection order.
    pub kills: Vec<(SpriteId, SpriteId)>,
}

/// First enemy (in spawn order) touching the protected character.
pub fn find_intruder<'a>(enemies: &'a [Enemy], protected: &ProtectedCharacter) -> Option<&'a Enemy> {
    enemies
        .iter()
        .find(|e| overlap(&e.sprite.bounds, &protected.bounds))
}

/// Match shurikens against enemies.  Outer loop over shurikens, inner over
/// enemies, both in insertion order; the first match wins and takes both
/// sprites out of the candidate set for the rest of the scan.
pub fn find_kills(projectiles: &[Projectile], enemies: &[Enemy]) -> Vec<(SpriteId, SpriteId)> {
    let mut kills: Vec<(SpriteId, SpriteId)> = Vec::new();
    let mut dead_enemies: Vec<SpriteId> = Vec::new();

    for projectile in projectiles {
        for enemy in enemies {
            if dead_enemies.contains(&enemy.id()) {
                continue;
            }
            if overlap(&projectile.sprite.bounds, &enemy.sprite.bounds) {
                dead_enemies.push(enemy.id());
                kills.push((projectile.id(), enemy.id()));
                break;
            }
        }
    }

    kills
}

/// Run both checks.  Once an enemy reaches the ninja the game is over and
/// no kills are scored for that frame.
pub fn scan(
    projectiles: &[Projectile],
    enemies: &[Enemy],
    protected: &ProtectedCharacter,
) -> CollisionReport {
    if find_intruder(enemies, protected).is_some() {
        return CollisionReport { game_over: true, kills: Vec::new() };
    }
    CollisionReport {
        game_over: false,
        kills: find_kills(projectiles, enemies),
    }
}
