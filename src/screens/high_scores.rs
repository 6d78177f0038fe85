use std::io::{self, Write};

use crossterm::event::KeyEvent;

use meditating_ninja::leaderboard::{Leaderboard, LeaderboardEntry, TOP_ENTRIES};

use super::{is_back, Screen, ScreenContext, ScreenName};
use crate::display;

pub struct HighScoresScreen {
    ctx: ScreenContext,
    rows: Vec<LeaderboardEntry>,
}

impl HighScoresScreen {
    pub fn new(ctx: ScreenContext) -> Self {
        let rows = Leaderboard::load(&ctx.runtime.leaderboard_path).top(TOP_ENTRIES);
        Self { ctx, rows }
    }
}

impl Screen for HighScoresScreen {
    fn update(&mut self, events: &[KeyEvent]) {
        if events.iter().any(is_back) {
            self.ctx.navigate(ScreenName::Menu);
        }
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        display::render_high_scores(out, &self.rows)
    }

    fn context(&self) -> &ScreenContext {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut ScreenContext {
        &mut self.ctx
    }

    fn into_context(self: Box<Self>) -> ScreenContext {
        self.ctx
    }
}
