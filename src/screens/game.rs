use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;

use meditating_ninja::config::SessionConfig;
use meditating_ninja::entities::Difficulty;
use meditating_ninja::leaderboard::Leaderboard;
use meditating_ninja::panel::GameKey;
use meditating_ninja::session::GameSession;

use super::{Screen, ScreenContext, ScreenName};
use crate::display;

/// What the game-over hook leaves behind for the screen.
struct GameReport {
    score: u32,
    saved: Result<(), String>,
}

pub struct GameScreen {
    ctx: ScreenContext,
    session: GameSession,
    report: Rc<RefCell<Option<GameReport>>>,
}

impl GameScreen {
    pub fn new(ctx: ScreenContext, difficulty: Difficulty) -> Self {
        let config =
            SessionConfig::new(difficulty).with_game_over_pause(ctx.runtime.game_over_pause);

        let report: Rc<RefCell<Option<GameReport>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&report);
        let name = ctx.player_name.clone();
        let path = ctx.runtime.leaderboard_path.clone();
        let on_game_over = Box::new(move |score: u32| {
            let saved = Leaderboard::load(&path)
                .record(&name, score)
                .map_err(|err| {
                    error!("{}", err);
                    err.to_string()
                });
            *sink.borrow_mut() = Some(GameReport { score, saved });
        });

        let session = GameSession::new(
            config,
            Box::new(Rc::clone(&ctx.audio)),
            StdRng::from_entropy(),
            Instant::now(),
            on_game_over,
        );

        Self { ctx, session, report }
    }

    fn finish(&mut self, report: GameReport) {
        self.ctx.notice = Some(match report.saved {
            Ok(()) => format!("Last game: Ninja IQ {}", report.score),
            Err(err) => format!("Ninja IQ {} not saved: {}", report.score, err),
        });
        self.ctx.navigate(ScreenName::Menu);
    }
}

fn game_key(key: &KeyEvent) -> GameKey {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => GameKey::Digit(c),
        KeyCode::Char('-') => GameKey::Minus,
        KeyCode::Backspace => GameKey::Backspace,
        KeyCode::Enter => GameKey::Submit,
        KeyCode::Left => GameKey::FireLeft,
        KeyCode::Right => GameKey::FireRight,
        _ => GameKey::Other,
    }
}

impl Screen for GameScreen {
    fn update(&mut self, events: &[KeyEvent]) {
        if events.iter().any(|key| key.code == KeyCode::Esc) {
            log::info!("game abandoned");
            self.ctx.navigate(ScreenName::Menu);
            return;
        }

        let keys: Vec<GameKey> = events.iter().map(game_key).collect();
        self.session.frame(Instant::now(), keys);

        let report = self.report.borrow_mut().take();
        if let Some(report) = report {
            self.finish(report);
        }
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        display::render_game(out, self.session.state())
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
