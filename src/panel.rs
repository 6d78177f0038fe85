//! Score / inventory panel shown above the field.
//!
//! Owns the current question and the player's half-typed answer.

use log::debug;
use rand::Rng;

use crate::config::{DifficultyConfig, STARTING_SCORE};
use crate::entities::Difficulty;
use crate::question::Question;

/// Keys the game screen cares about, already classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    /// A decimal digit, `'0'..='9'`.
    Digit(char),
    Minus,
    Backspace,
    Submit,
    FireLeft,
    FireRight,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    difficulty: Difficulty,
    score_per_kill: u32,
    question: Question,
    input: String,
    score: u32,
    inventory: u32,
}

impl Panel {
    pub fn new(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        Self::with_question(Question::new(difficulty, rng))
    }

    /// Panel starting from a known question.
    pub fn with_question(question: Question) -> Self {
        let difficulty = question.difficulty();
        Self {
            difficulty,
            score_per_kill: DifficultyConfig::for_difficulty(difficulty).score_per_kill,
            question,
            input: String::new(),
            score: STARTING_SCORE,
            inventory: 0,
        }
    }

    pub fn process_key(&mut self, key: GameKey, rng: &mut impl Rng) {
        match key {
            GameKey::Digit(c) if c.is_ascii_digit() => self.input.push(c),
            GameKey::Minus => {
                if self.input.is_empty() {
                    self.input.push('-');
                }
            }
            GameKey::Backspace => {
                self.input.pop();
            }
            GameKey::Submit => self.submit(rng),
            _ => {}
        }
    }

    fn submit(&mut self, rng: &mut impl Rng) {
        if self.input.is_empty() || self.input == "-" {
            return;
        }

        if self.question.answer_is_correct(&self.input) {
            self.inventory += 1;
            debug!("correct answer {}, inventory now {}", self.input, self.inventory);
            self.question = Question::new(self.difficulty, rng);
        } else {
            debug!("wrong answer {} to {}", self.input, self.question);
        }

        self.input.clear();
    }

    pub fn add_score(&mut self) {
        self.score += self.score_per_kill;
    }

    /// Take one shuriken out of the inventory.  Refused (returns `false`)
    /// when the inventory is empty.
    pub fn spend_projectile(&mut self) -> bool {
        if self.inventory == 0 {
            return false;
        }
        self.inventory -= 1;
        true
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
