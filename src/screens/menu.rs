use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent};

use meditating_ninja::audio::{Audio, Track};

use super::{Screen, ScreenContext, ScreenName};
use crate::display;

pub const MAX_NAME_LEN: usize = 10;

pub const BUTTONS: &[(&str, ScreenName)] = &[
    ("PLAY [EASY]", ScreenName::EasyGame),
    ("PLAY [HARD]", ScreenName::HardGame),
    ("RULES", ScreenName::Rules),
    ("HIGH SCORES", ScreenName::HighScores),
];

pub struct MenuScreen {
    ctx: ScreenContext,
    active: usize,
}

impl MenuScreen {
    pub fn new(ctx: ScreenContext) -> Self {
        ctx.audio.borrow_mut().play_music(Track::Calm);
        Self { ctx, active: 0 }
    }

    fn process_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Up => self.active = self.active.saturating_sub(1),
            KeyCode::Down => self.active = (self.active + 1).min(BUTTONS.len() - 1),
            KeyCode::Backspace => {
                self.ctx.player_name.pop();
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.ctx.player_name.chars().count() < MAX_NAME_LEN {
                    self.ctx.player_name.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Enter => {
                let (_, target) = BUTTONS[self.active];
                let is_game = matches!(target, ScreenName::EasyGame | ScreenName::HardGame);
                if is_game && self.ctx.player_name.is_empty() {
                    self.ctx.notice = Some("Enter your name before playing.".to_string());
                    return;
                }
                self.ctx.notice = None;
                self.ctx.navigate(target);
            }
            KeyCode::Esc => self.ctx.quit(),
            _ => {}
        }
    }
}

impl Screen for MenuScreen {
    fn update(&mut self, events: &[KeyEvent]) {
        for key in events {
            self.process_key(key);
            if !self.is_running() {
                break;
            }
        }
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        display::render_menu(
            out,
            &self.ctx.player_name,
            self.active,
            self.ctx.notice.as_deref(),
        )
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::{context, key, Cue};

    fn menu() -> (MenuScreen, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _) = context(dir.path());
        (MenuScreen::new(ctx), dir)
    }

    fn type_name(menu: &mut MenuScreen, name: &str) {
        for c in name.chars() {
            menu.process_key(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn opening_the_menu_plays_calm_music() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, recorder) = context(dir.path());
        let _menu = MenuScreen::new(ctx);
        assert_eq!(recorder.cues(), vec![Cue::Music(Track::Calm)]);
    }

    #[test]
    fn names_are_uppercased_letters_only() {
        let (mut menu, _dir) = menu();
        type_name(&mut menu, "ka-i 9ru");
        assert_eq!(menu.ctx.player_name, "KAIRU");
        menu.process_key(&key(KeyCode::Backspace));
        assert_eq!(menu.ctx.player_name, "KAIR");
    }

    #[test]
    fn names_stop_at_the_length_cap() {
        let (mut menu, _dir) = menu();
        type_name(&mut menu, "abcdefghijklmno");
        assert_eq!(menu.ctx.player_name.len(), MAX_NAME_LEN);
        assert_eq!(menu.ctx.player_name, "ABCDEFGHIJ");
    }

    #[test]
    fn selection_saturates_at_both_ends() {
        let (mut menu, _dir) = menu();
        menu.process_key(&key(KeyCode::Up));
        assert_eq!(menu.active, 0);
        for _ in 0..10 {
            menu.process_key(&key(KeyCode::Down));
        }
        assert_eq!(menu.active, BUTTONS.len() - 1);
    }

    #[test]
    fn play_is_refused_without_a_name() {
        let (mut menu, _dir) = menu();
        menu.process_key(&key(KeyCode::Enter));
        assert!(menu.is_running());
        assert_eq!(menu.next_screen(), None);
        assert!(menu.ctx.notice.is_some());

        menu.process_key(&key(KeyCode::Down));
        menu.process_key(&key(KeyCode::Enter));
        assert!(menu.is_running());

        type_name(&mut menu, "hana");
        menu.process_key(&key(KeyCode::Enter));
        assert!(!menu.is_running());
        assert_eq!(menu.next_screen(), Some(ScreenName::HardGame));
    }

    #[test]
    fn play_opens_the_game_and_clears_the_notice() {
        let (mut menu, _dir) = menu();
        menu.ctx.notice = Some("Last game: Ninja IQ 90".to_string());
        type_name(&mut menu, "yuki");
        menu.update(&[key(KeyCode::Enter), key(KeyCode::Down)]);
        assert_eq!(menu.next_screen(), Some(ScreenName::EasyGame));
        assert_eq!(menu.active, 0);
        assert_eq!(menu.ctx.notice, None);
    }

    #[test]
    fn rules_and_high_scores_need_no_name() {
        let (mut menu, _dir) = menu();
        menu.process_key(&key(KeyCode::Down));
        menu.process_key(&key(KeyCode::Down));
        menu.process_key(&key(KeyCode::Enter));
        assert_eq!(menu.next_screen(), Some(ScreenName::Rules));
    }

    #[test]
    fn esc_quits() {
        let (mut menu, _dir) = menu();
        menu.process_key(&key(KeyCode::Esc));
        assert!(!menu.is_running());
        assert_eq!(menu.next_screen(), None);
    }
}
