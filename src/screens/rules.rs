use std::io::{self, Write};

use crossterm::event::KeyEvent;

use super::{is_back, Screen, ScreenContext, ScreenName};
use crate::display;

pub struct RulesScreen {
    ctx: ScreenContext,
}

impl RulesScreen {
    pub fn new(ctx: ScreenContext) -> Self {
        Self { ctx }
    }
}

impl Screen for RulesScreen {
    fn update(&mut self, events: &[KeyEvent]) {
        if events.iter().any(is_back) {
            self.ctx.navigate(ScreenName::Menu);
        }
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        display::render_rules(out)
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
