use std::cell::RefCell;
use std::rc::Rc;

use meditating_ninja::audio::*;

#[test]
fn terminal_audio_remembers_the_current_track() {
    let mut audio = TerminalAudio::new();
    assert_eq!(audio.current(), None);
    audio.play_music(Track::Calm);
    audio.play_music(Track::Battle);
    assert_eq!(audio.current(), Some(Track::Battle));
    audio.stop_music();
    assert_eq!(audio.current(), None);
}

#[test]
fn shared_handles_drive_one_sink() {
    let terminal = Rc::new(RefCell::new(TerminalAudio::new()));
    let shared_sink: SharedAudio = terminal.clone();
    let mut session_handle: Box<dyn Audio> = Box::new(Rc::clone(&shared_sink));

    session_handle.play_music(Track::Battle);
    assert_eq!(terminal.borrow().current(), Some(Track::Battle));

    shared_sink.borrow_mut().play_music(Track::Calm);
    assert_eq!(terminal.borrow().current(), Some(Track::Calm));

    session_handle.stop_music();
    assert_eq!(terminal.borrow().current(), None);
}

#[test]
fn silent_accepts_everything() {
    let mut audio = shared(Silent);
    audio.play_music(Track::Calm);
    audio.play(Sound::Shuriken);
    audio.stop_music();
}
