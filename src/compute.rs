//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.

use log::debug;
use rand::Rng;

use crate::collision;
use crate::config::Layout;
use crate::entities::{Difficulty, Direction, GameStatus, ProtectedCharacter};
use crate::panel::{GameKey, Panel};
use crate::streams::{EnemyStream, ProjectileStream};

/// Everything that changes during one game.  Cloneable so pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub layout: Layout,
    pub ninja: ProtectedCharacter,
    pub projectiles: ProjectileStream,
    pub enemies: EnemyStream,
    pub panel: Panel,
    pub status: GameStatus,
    pub frame: u64,
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn init_state(difficulty: Difficulty, layout: Layout, rng: &mut impl Rng) -> GameState {
    let panel = Panel::new(difficulty, rng);
    init_state_with_panel(layout, panel)
}

/// Fresh field around an existing panel.
pub fn init_state_with_panel(layout: Layout, panel: Panel) -> GameState {
    GameState {
        ninja: ProtectedCharacter { bounds: layout.ninja },
        layout,
        projectiles: ProjectileStream::new(),
        enemies: EnemyStream::new(),
        panel,
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── Input-driven state transitions ───────────────────────────────────────────

/// Throw a shuriken.  `None` when the inventory is empty: nothing changes.
pub fn fire(state: &GameState, direction: Direction) -> Option<GameState> {
    if state.status != GameStatus::Playing {
        return None;
    }
    let mut panel = state.panel.clone();
    if !panel.spend_projectile() {
        return None;
    }
    let mut projectiles = state.projectiles.clone();
    let id = projectiles.spawn(direction, &state.layout);
    debug!("shuriken {:?} thrown {:?}, {} left", id, direction, panel.inventory());
    Some(GameState {
        projectiles,
        panel,
        ..state.clone()
    })
}

/// Feed one key to the panel and the shuriken launcher.
pub fn press_key(state: &GameState, key: GameKey, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    match key {
        GameKey::FireLeft => fire(state, Direction::Left).unwrap_or_else(|| state.clone()),
        GameKey::FireRight => fire(state, Direction::Right).unwrap_or_else(|| state.clone()),
        _ => {
            let mut panel = state.panel.clone();
            panel.process_key(key, rng);
            GameState {
                panel,
                ..state.clone()
            }
        }
    }
}

/// Spawn one enemy on a random side.
pub fn spawn_enemy(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let mut enemies = state.enemies.clone();
    let (id, side) = enemies.spawn_random(&state.layout, rng);
    debug!("enemy {:?} spawned on the {:?}", id, side);
    GameState {
        enemies,
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame: move every sprite, then resolve
/// collisions.  A finished game is returned unchanged.
pub fn tick(state: &GameState) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    // ── 1. Move sprites ──────────────────────────────────────────────────────
    let mut projectiles = state.projectiles.clone();
    let mut enemies = state.enemies.clone();
    projectiles.advance_all();
    enemies.advance_all();

    // ── 2. Collisions ────────────────────────────────────────────────────────
    let report = collision::scan(projectiles.as_slice(), enemies.as_slice(), &state.ninja);

    let mut panel = state.panel.clone();
    let status = if report.game_over {
        GameStatus::GameOver
    } else {
        let (dead_projectiles, dead_enemies): (Vec<_>, Vec<_>) =
            report.kills.iter().copied().unzip();
        projectiles.remove(&dead_projectiles);
        enemies.remove(&dead_enemies);
        for (projectile, enemy) in &report.kills {
            debug!("shuriken {:?} took out enemy {:?}", projectile, enemy);
            panel.add_score();
        }
        GameStatus::Playing
    };

    GameState {
        projectiles,
        enemies,
        panel,
        status,
        frame: state.frame + 1,
        ..state.clone()
    }
}
