//! Difficulty tables, field geometry, and runtime settings.
//!
//! Everything here is fixed when a session starts and never changes after.

use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use crate::entities::{Bounds, Difficulty, Direction, Side};
use crate::question::Operation;

// ── Difficulty tables ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyConfig {
    /// Time between two enemy spawns.
    pub spawn_interval: Duration,
    /// Added to the score for every enemy a shuriken takes down.
    pub score_per_kill: u32,
    pub left_operand: RangeInclusive<i32>,
    pub right_operand: RangeInclusive<i32>,
    pub operations: &'static [Operation],
}

const EASY_OPERATIONS: &[Operation] = &[Operation::Multiply];
const HARD_OPERATIONS: &[Operation] = &[
    Operation::Add,
    Operation::Subtract,
    Operation::Multiply,
    Operation::Divide,
];

impl DifficultyConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                spawn_interval: Duration::from_millis(5000),
                score_per_kill: 5,
                left_operand: 0..=9,
                right_operand: 1..=9,
                operations: EASY_OPERATIONS,
            },
            Difficulty::Hard => Self {
                spawn_interval: Duration::from_millis(1500),
                score_per_kill: 10,
                left_operand: 0..=12,
                right_operand: 1..=12,
                operations: HARD_OPERATIONS,
            },
        }
    }
}

/// IQ the meditating ninja starts every game with.
pub const STARTING_SCORE: u32 = 75;

// ── Field geometry ────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: i32 = 675;
pub const FIELD_HEIGHT: i32 = 400;

/// Sizes, launch points, and speeds of everything on the game field.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub ninja: Bounds,
    pub gate: Bounds,
    pub shuriken_size: (i32, i32),
    pub shuriken_launch_right: (i32, i32),
    pub shuriken_launch_left: (i32, i32),
    pub shuriken_speed: i32,
    pub enemy_size: (i32, i32),
    pub enemy_spawn_right: (i32, i32),
    pub enemy_spawn_left: (i32, i32),
    pub enemy_speed: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            ninja: Bounds::new(245, 281, 110, 119),
            gate: Bounds::new(105, 105, 396, 295),
            shuriken_size: (30, 30),
            shuriken_launch_right: (335, 321),
            shuriken_launch_left: (235, 321),
            shuriken_speed: 8,
            enemy_size: (82, 99),
            enemy_spawn_right: (650, 301),
            enemy_spawn_left: (-132, 301),
            enemy_speed: 3,
        }
    }
}

impl Layout {
    pub fn shuriken_launch(&self, direction: Direction) -> Bounds {
        let (x, y) = match direction {
            Direction::Right => self.shuriken_launch_right,
            Direction::Left => self.shuriken_launch_left,
        };
        Bounds::new(x, y, self.shuriken_size.0, self.shuriken_size.1)
    }

    pub fn enemy_spawn(&self, side: Side) -> Bounds {
        let (x, y) = match side {
            Side::Right => self.enemy_spawn_right,
            Side::Left => self.enemy_spawn_left,
        };
        Bounds::new(x, y, self.enemy_size.0, self.enemy_size.1)
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

pub const DEFAULT_GAME_OVER_PAUSE: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub tuning: DifficultyConfig,
    pub layout: Layout,
    /// How long the frame loop stalls after the gong.
    pub game_over_pause: Duration,
}

impl SessionConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            tuning: DifficultyConfig::for_difficulty(difficulty),
            layout: Layout::default(),
            game_over_pause: DEFAULT_GAME_OVER_PAUSE,
        }
    }

    pub fn with_game_over_pause(mut self, pause: Duration) -> Self {
        self.game_over_pause = pause;
        self
    }
}

// ── Runtime (environment) ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub leaderboard_path: PathBuf,
    pub log_path: PathBuf,
    pub game_over_pause: Duration,
    pub frames_per_second: u32,
}

pub const DEFAULT_FRAMES_PER_SECOND: u32 = 60;

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the settings from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            leaderboard_path: leaderboard_path(var("MEDITATING_NINJA_SCORES"), var("HOME")),
            log_path: log_path(var("MEDITATING_NINJA_LOG")),
            game_over_pause: game_over_pause(var("MEDITATING_NINJA_PAUSE_MS")),
            frames_per_second: frames_per_second(var("MEDITATING_NINJA_FPS")),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }
}

pub fn leaderboard_path(scores: Option<String>, home: Option<String>) -> PathBuf {
    match scores {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(home.unwrap_or_else(|| ".".to_string()))
            .join(".meditating_ninja_scores"),
    }
}

pub fn log_path(value: Option<String>) -> PathBuf {
    value
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("meditating_ninja.log"))
}

/// Milliseconds; anything unparsable keeps the default pause.
pub fn game_over_pause(value: Option<String>) -> Duration {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_GAME_OVER_PAUSE)
}

/// Zero and unparsable values keep the default rate.
pub fn frames_per_second(value: Option<String>) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|fps| *fps > 0)
        .unwrap_or(DEFAULT_FRAMES_PER_SECOND)
}
