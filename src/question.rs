//! Arithmetic questions the player answers to earn shurikens.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::DifficultyConfig;
use crate::entities::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// `a <op> b`, or `None` on overflow or a zero divisor.
    ///
    /// Division truncates; callers only build divisions that are exact.
    pub fn apply(self, a: i32, b: i32) -> Option<i32> {
        match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
            Operation::Divide => a.checked_div(b),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "x",
            Operation::Divide => "/",
        }
    }
}

/// One immutable question.  A correct answer replaces it with a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    difficulty: Difficulty,
    a: i32,
    b: i32,
    operation: Operation,
    answer: i32,
}

impl Question {
    pub fn new(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        let tuning = DifficultyConfig::for_difficulty(difficulty);
        let operation = *tuning
            .operations
            .choose(rng)
            .unwrap_or(&Operation::Multiply);

        // Uneven divisions are redrawn until the operands divide exactly.
        loop {
            let a = rng.gen_range(tuning.left_operand.clone());
            let b = rng.gen_range(tuning.right_operand.clone());
            if let Some(question) = Self::from_parts(difficulty, a, b, operation) {
                return question;
            }
        }
    }

    /// Build a specific question.  Returns `None` for a zero divisor, a
    /// division that would not come out even, or an answer outside `i32`.
    pub fn from_parts(difficulty: Difficulty, a: i32, b: i32, operation: Operation) -> Option<Self> {
        if operation == Operation::Divide && a.checked_rem(b)? != 0 {
            return None;
        }
        let answer = operation.apply(a, b)?;
        Some(Self { difficulty, a, b, operation, answer })
    }

    /// Unparsable input counts as a wrong answer.
    pub fn answer_is_correct(&self, input: &str) -> bool {
        input
            .trim()
            .parse::<i32>()
            .map(|value| value == self.answer)
            .unwrap_or(false)
    }

    pub fn display_string(&self) -> String {
        format!("{} {} {} =", self.a, self.operation.symbol(), self.b)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn operands(&self) -> (i32, i32) {
        (self.a, self.b)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn answer(&self) -> i32 {
        self.answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}
