//! One game from first frame to the gong.
//!
//! Wraps the pure functions in `compute` with the parts that have side
//! effects: the RNG, the enemy timer, sound, the game-over stall and the
//! termination hook.

use std::thread;
use std::time::Instant;

use log::info;
use rand::rngs::StdRng;

use crate::audio::{Audio, Sound, Track};
use crate::compute::{self, GameState};
use crate::config::SessionConfig;
use crate::entities::GameStatus;
use crate::panel::GameKey;
use crate::streams::SpawnTimer;

/// Called once with the final score when the game ends.
pub type GameOverHook = Box<dyn FnOnce(u32)>;

pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    rng: StdRng,
    audio: Box<dyn Audio>,
    spawn_timer: SpawnTimer,
    on_game_over: Option<GameOverHook>,
}

impl GameSession {
    pub fn new(
        config: SessionConfig,
        mut audio: Box<dyn Audio>,
        mut rng: StdRng,
        now: Instant,
        on_game_over: GameOverHook,
    ) -> Self {
        let state = compute::init_state(config.difficulty, config.layout.clone(), &mut rng);
        let spawn_timer = SpawnTimer::new(config.tuning.spawn_interval, now);
        audio.stop_music();
        audio.play_music(Track::Battle);
        info!(
            "{:?} game started, enemies every {:?}",
            config.difficulty, config.tuning.spawn_interval
        );
        Self {
            config,
            state,
            rng,
            audio,
            spawn_timer,
            on_game_over: Some(on_game_over),
        }
    }

    /// Dispatch one key press.  A refused throw makes no sound.
    pub fn handle_key(&mut self, key: GameKey) {
        let fired = match key {
            GameKey::FireLeft | GameKey::FireRight => {
                let before = self.state.panel.inventory();
                self.state = compute::press_key(&self.state, key, &mut self.rng);
                self.state.panel.inventory() < before
            }
            _ => {
                self.state = compute::press_key(&self.state, key, &mut self.rng);
                false
            }
        };
        if fired {
            self.audio.play(Sound::Shuriken);
        }
    }

    /// Spawn an enemy if the timer is due.  Returns whether one appeared.
    pub fn poll_spawn(&mut self, now: Instant) -> bool {
        if self.state.status != GameStatus::Playing || !self.spawn_timer.poll(now) {
            return false;
        }
        self.state = compute::spawn_enemy(&self.state, &mut self.rng);
        true
    }

    /// Move everything and resolve collisions.  On game over this stalls the
    /// caller for the configured pause before the hook runs.
    pub fn step(&mut self) {
        self.state = compute::tick(&self.state);
        if self.state.status == GameStatus::GameOver {
            self.game_over();
        }
    }

    /// One full frame: input, timer, movement, collisions.
    pub fn frame(&mut self, now: Instant, keys: impl IntoIterator<Item = GameKey>) {
        for key in keys {
            self.handle_key(key);
        }
        self.poll_spawn(now);
        self.step();
    }

    fn game_over(&mut self) {
        let Some(hook) = self.on_game_over.take() else {
            return;
        };
        let score = self.state.panel.score();
        info!("game over at frame {} with score {}", self.state.frame, score);

        self.audio.stop_music();
        self.audio.play(Sound::Gong);
        if !self.config.game_over_pause.is_zero() {
            thread::sleep(self.config.game_over_pause);
        }

        hook(score);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_over(&self) -> bool {
        self.state.status == GameStatus::GameOver
    }
}
