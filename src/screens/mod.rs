//! Screens and navigation.
//!
//! Each screen is a plain struct owning a `ScreenContext`; the context is
//! handed from one screen to the next when navigation happens.

mod game;
mod high_scores;
mod menu;
mod rules;

use std::io::{self, Write};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use meditating_ninja::audio::SharedAudio;
use meditating_ninja::config::RuntimeConfig;
use meditating_ninja::entities::Difficulty;

pub use game::GameScreen;
pub use high_scores::HighScoresScreen;
pub use menu::{MenuScreen, BUTTONS, MAX_NAME_LEN};
pub use rules::RulesScreen;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenName {
    Menu,
    EasyGame,
    HardGame,
    Rules,
    HighScores,
}

/// Data every screen shares: who is playing and where to go next.
#[derive(Clone)]
pub struct ScreenContext {
    pub runtime: RuntimeConfig,
    pub audio: SharedAudio,
    pub player_name: String,
    /// One-line message the menu shows after a game.
    pub notice: Option<String>,
    running: bool,
    next: Option<ScreenName>,
}

impl ScreenContext {
    pub fn new(runtime: RuntimeConfig, audio: SharedAudio) -> Self {
        Self {
            runtime,
            audio,
            player_name: String::new(),
            notice: None,
            running: true,
            next: None,
        }
    }

    /// Stop the current screen and open `next` afterwards.
    pub fn navigate(&mut self, next: ScreenName) {
        self.next = Some(next);
        self.running = false;
    }

    /// Stop the current screen and end the program.
    pub fn quit(&mut self) {
        self.next = None;
        self.running = false;
    }

    /// Reset the run flag for the next screen.
    fn reopen(mut self) -> Self {
        self.running = true;
        self.next = None;
        self
    }
}

pub trait Screen {
    /// Apply this frame's input.
    fn update(&mut self, events: &[KeyEvent]);

    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Process this frame's input and draw one frame.  A screen that has
    /// just stopped is not drawn again.
    fn render_frame(&mut self, out: &mut dyn Write, events: &[KeyEvent]) -> io::Result<()> {
        self.update(events);
        if self.is_running() {
            self.draw(out)?;
        }
        Ok(())
    }

    fn context(&self) -> &ScreenContext;

    fn context_mut(&mut self) -> &mut ScreenContext;

    fn into_context(self: Box<Self>) -> ScreenContext;

    fn request_stop(&mut self) {
        self.context_mut().running = false;
    }

    fn is_running(&self) -> bool {
        self.context().running
    }

    fn next_screen(&self) -> Option<ScreenName> {
        self.context().next
    }
}

pub fn open(name: ScreenName, ctx: ScreenContext) -> Box<dyn Screen> {
    let ctx = ctx.reopen();
    log::info!("opening {:?}", name);
    match name {
        ScreenName::Menu => Box::new(MenuScreen::new(ctx)),
        ScreenName::EasyGame => Box::new(GameScreen::new(ctx, Difficulty::Easy)),
        ScreenName::HardGame => Box::new(GameScreen::new(ctx, Difficulty::Hard)),
        ScreenName::Rules => Box::new(RulesScreen::new(ctx)),
        ScreenName::HighScores => Box::new(HighScoresScreen::new(ctx)),
    }
}

/// Key presses only; release and repeat events are dropped.
pub fn key_presses(events: impl IntoIterator<Item = Event>) -> Vec<KeyEvent> {
    events
        .into_iter()
        .filter_map(|event| match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
            _ => None,
        })
        .collect()
}

pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// `Q` or Esc, the "back to menu" keys of the rules and high-score screens.
fn is_back(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
