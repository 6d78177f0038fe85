//! Meditating Ninja - answer arithmetic questions to earn shurikens and keep
//! enemy ninjas away from a meditating master.
//!
//! Core modules:
//! - `compute`: pure per-frame game logic
//! - `collision`: the midpoint-in-span overlap test and per-frame scan
//! - `panel`, `question`: score, inventory and the arithmetic questions
//! - `streams`: shuriken and enemy collections, enemy spawn timer
//! - `session`: one game with its side effects (sound, pause, hook)
//! - `leaderboard`: persisted best score per player

pub mod audio;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod leaderboard;
pub mod panel;
pub mod question;
pub mod session;
pub mod streams;

pub use compute::GameState;
pub use leaderboard::Leaderboard;
pub use session::GameSession;
