//! All game entity types: pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Direction a shuriken travels after being thrown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign applied to the speed when advancing along x.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Screen edge an enemy ninja enters from.  Enemies always walk toward
/// the centre, so `Left` moves right and `Right` moves left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn heading(self) -> Direction {
        match self {
            Side::Left => Direction::Right,
            Side::Right => Direction::Left,
        }
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in logical field units (the field is 675 × 400).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Horizontal midpoint, halving the width with integer division.
    pub fn center_x(&self) -> i32 {
        self.x.saturating_add(self.width / 2)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }
}

// ── Mobile sprites ────────────────────────────────────────────────────────────

/// Identity of a sprite within its stream.  Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub u64);

/// A sprite that slides horizontally at a constant speed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileSprite {
    pub id: SpriteId,
    pub bounds: Bounds,
    pub speed: i32,
    pub heading: Direction,
}

impl MobileSprite {
    /// Move one frame along x.  y is never touched.
    pub fn advance(&mut self) {
        self.bounds.x = self.bounds.x.saturating_add(self.speed * self.heading.sign());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projectile {
    pub sprite: MobileSprite,
}

impl Projectile {
    pub fn id(&self) -> SpriteId {
        self.sprite.id
    }

    pub fn direction(&self) -> Direction {
        self.sprite.heading
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub sprite: MobileSprite,
    pub side: Side,
}

impl Enemy {
    pub fn id(&self) -> SpriteId {
        self.sprite.id
    }
}

/// The stationary meditating ninja the player defends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtectedCharacter {
    pub bounds: Bounds,
}
