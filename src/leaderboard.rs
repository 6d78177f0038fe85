//! Best-score-per-name ranking persisted to a text file.
//!
//! File format: one player per two lines, the name on the first and the
//! score on the second.  The whole file is rewritten on every record.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// How many rows the high-score screen shows.
pub const TOP_ENTRIES: usize = 10;

#[derive(Debug)]
pub enum LeaderboardError {
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::Write { path, source } => {
                write!(f, "could not save high scores to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LeaderboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaderboardError::Write { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    path: PathBuf,
    /// File order; ranking is computed on demand.
    players: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Read the store.  A missing or malformed file gives an empty ranking.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let players = match fs::read_to_string(&path) {
            Ok(text) => match parse(&text) {
                Some(players) => {
                    info!("loaded {} high scores from {}", players.len(), path.display());
                    players
                }
                None => {
                    warn!("high score file {} is malformed, starting fresh", path.display());
                    Vec::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no high scores at {}, starting fresh", path.display());
                Vec::new()
            }
            Err(err) => {
                warn!("could not read high scores from {}: {}", path.display(), err);
                Vec::new()
            }
        };
        Self { path, players }
    }

    /// Save `score` for `name` unless a strictly better one is already
    /// stored, then rewrite the file.
    pub fn record(&mut self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        match self.players.iter_mut().find(|p| p.name == name) {
            Some(existing) if existing.score > score => return Ok(()),
            Some(existing) => existing.score = score,
            None => self.players.push(LeaderboardEntry {
                name: name.to_string(),
                score,
            }),
        }
        self.save()?;
        info!("recorded {} for {}", score, name);
        Ok(())
    }

    fn save(&self) -> Result<(), LeaderboardError> {
        let mut text = String::new();
        for player in &self.players {
            text.push_str(&player.name);
            text.push('\n');
            text.push_str(&player.score.to_string());
            text.push('\n');
        }
        fs::write(&self.path, text).map_err(|source| LeaderboardError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// All players, best score first.  Ties keep file order.
    pub fn entries(&self) -> Vec<LeaderboardEntry> {
        let mut ranked = self.players.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        let mut ranked = self.entries();
        ranked.truncate(n);
        ranked
    }

    pub fn best_for(&self, name: &str) -> Option<u32> {
        self.players.iter().find(|p| p.name == name).map(|p| p.score)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `None` when any score line fails to parse.  A trailing name without a
/// score is ignored.
fn parse(text: &str) -> Option<Vec<LeaderboardEntry>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut players: Vec<LeaderboardEntry> = Vec::new();
    for pair in lines.chunks_exact(2) {
        let name = pair[0].to_string();
        let score = pair[1].trim().parse::<u32>().ok()?;
        match players.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.score = score,
            None => players.push(LeaderboardEntry { name, score }),
        }
    }
    Some(players)
}
