//! The two streams of moving sprites: thrown shurikens and enemy ninjas.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::Layout;
use crate::entities::{Bounds, Direction, Enemy, MobileSprite, Projectile, Side, SpriteId};

// ── Shurikens ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectileStream {
    projectiles: Vec<Projectile>,
    next_id: u64,
}

impl ProjectileStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shuriken at the launch point for `direction`.
    pub fn spawn(&mut self, direction: Direction, layout: &Layout) -> SpriteId {
        self.spawn_at(direction, layout.shuriken_launch(direction), layout.shuriken_speed)
    }

    /// Append a shuriken at an arbitrary position.
    pub fn spawn_at(&mut self, direction: Direction, bounds: Bounds, speed: i32) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.projectiles.push(Projectile {
            sprite: MobileSprite { id, bounds, speed, heading: direction },
        });
        id
    }

    pub fn advance_all(&mut self) {
        for projectile in &mut self.projectiles {
            projectile.sprite.advance();
        }
    }

    /// Drop every projectile whose id is listed.
    pub fn remove(&mut self, ids: &[SpriteId]) {
        self.projectiles.retain(|p| !ids.contains(&p.id()));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn as_slice(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}

// ── Enemy ninjas ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnemyStream {
    enemies: Vec<Enemy>,
    next_id: u64,
}

impl EnemyStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, side: Side, layout: &Layout) -> SpriteId {
        self.spawn_at(side, layout.enemy_spawn(side), layout.enemy_speed)
    }

    pub fn spawn_at(&mut self, side: Side, bounds: Bounds, speed: i32) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.enemies.push(Enemy {
            sprite: MobileSprite { id, bounds, speed, heading: side.heading() },
            side,
        });
        id
    }

    /// Spawn on a side chosen by a fair coin flip.
    pub fn spawn_random(&mut self, layout: &Layout, rng: &mut impl Rng) -> (SpriteId, Side) {
        let side = if rng.gen_bool(0.5) { Side::Left } else { Side::Right };
        (self.spawn(side, layout), side)
    }

    pub fn advance_all(&mut self) {
        for enemy in &mut self.enemies {
            enemy.sprite.advance();
        }
    }

    pub fn remove(&mut self, ids: &[SpriteId]) {
        self.enemies.retain(|e| !ids.contains(&e.id()));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn as_slice(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

// ── Spawn timer ───────────────────────────────────────────────────────────────

/// Recurring wake-up polled once per frame.  Fires at most once per poll,
/// so a long stall never produces a burst of spawns.
#[derive(Clone, Debug)]
pub struct SpawnTimer {
    interval: Duration,
    next_due: Instant,
}

impl SpawnTimer {
    /// First firing happens one full interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, next_due: now + interval }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
