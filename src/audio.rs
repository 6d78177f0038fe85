//! Sound output.
//!
//! The game never touches a global mixer: an `Audio` sink is built once and
//! handed to whoever needs it.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use log::{debug, warn};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Shuriken leaves the ninja's hand
    Shuriken,
    /// An enemy reached the meditating ninja
    Gong,
}

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Menu, rules and high-score screens
    Calm,
    /// In game
    Battle,
}

pub trait Audio {
    fn play_music(&mut self, track: Track);
    fn stop_music(&mut self);
    fn play(&mut self, sound: Sound);
}

/// One sink shared by every screen and the running session, so the music
/// state survives navigation.
pub type SharedAudio = Rc<RefCell<dyn Audio>>;

pub fn shared(audio: impl Audio + 'static) -> SharedAudio {
    Rc::new(RefCell::new(audio))
}

impl<A: Audio + ?Sized> Audio for Rc<RefCell<A>> {
    fn play_music(&mut self, track: Track) {
        self.borrow_mut().play_music(track);
    }

    fn stop_music(&mut self) {
        self.borrow_mut().stop_music();
    }

    fn play(&mut self, sound: Sound) {
        self.borrow_mut().play(sound);
    }
}

/// Audio for a plain terminal: the gong rings the bell, everything else is
/// only logged.
#[derive(Debug, Default)]
pub struct TerminalAudio {
    current: Option<Track>,
}

impl TerminalAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track currently playing, if any.
    pub fn current(&self) -> Option<Track> {
        self.current
    }

    fn ring_bell(&self) {
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            warn!("terminal bell failed: {}", err);
        }
    }
}

impl Audio for TerminalAudio {
    fn play_music(&mut self, track: Track) {
        if self.current != Some(track) {
            debug!("music: {:?}", track);
            self.current = Some(track);
        }
    }

    fn stop_music(&mut self) {
        if let Some(track) = self.current.take() {
            debug!("music stopped: {:?}", track);
        }
    }

    fn play(&mut self, sound: Sound) {
        debug!("sound: {:?}", sound);
        if sound == Sound::Gong {
            self.ring_bell();
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Audio for Silent {
    fn play_music(&mut self, _track: Track) {}
    fn stop_music(&mut self) {}
    fn play(&mut self, _sound: Sound) {}
}
