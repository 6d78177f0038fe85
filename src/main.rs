mod display;
mod screens;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use log::info;

use meditating_ninja::audio::{self, TerminalAudio};
use meditating_ninja::config::RuntimeConfig;

use screens::{ScreenContext, ScreenName};

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so log records go to a file.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Navigation loop ───────────────────────────────────────────────────────────

/// Open screens one after another until one of them has nowhere to go.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    runtime: RuntimeConfig,
) -> std::io::Result<()> {
    let frame: Duration = runtime.frame_duration();
    let mut ctx = ScreenContext::new(runtime, audio::shared(TerminalAudio::new()));
    let mut name = ScreenName::Menu;
    let mut interrupted = false;

    loop {
        let mut screen = screens::open(name, ctx);

        while screen.is_running() {
            let frame_start = Instant::now();

            // Drain all pending input events (non-blocking)
            let keys = screens::key_presses(rx.try_iter());
            if keys.iter().any(screens::is_interrupt) {
                interrupted = true;
                screen.request_stop();
                break;
            }

            screen.render_frame(&mut *out, &keys)?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }

        let next = if interrupted { None } else { screen.next_screen() };
        ctx = screen.into_context();
        match next {
            Some(next) => name = next,
            None => break,
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let runtime = RuntimeConfig::from_env();
    init_logging(&runtime.log_path)?;
    info!("starting, high scores at {}", runtime.leaderboard_path.display());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("cannot switch the terminal to raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("cannot enter the alternate screen")?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, runtime);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting");
    result.context("terminal I/O failed")
}
