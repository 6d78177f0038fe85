//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of what
//! to draw.  No game logic is performed; this module only translates state
//! into terminal commands.  Field coordinates (675 × 400 units) are scaled
//! to whatever terminal size is current.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use meditating_ninja::compute::GameState;
use meditating_ninja::config::{FIELD_HEIGHT, FIELD_WIDTH};
use meditating_ninja::entities::{Bounds, Difficulty, Direction, Side};
use meditating_ninja::leaderboard::{LeaderboardEntry, TOP_ENTRIES};

use crate::screens::{BUTTONS, MAX_NAME_LEN};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkYellow;
const C_TITLE: Color = Color::Cyan;
const C_TEXT: Color = Color::White;
const C_HUD_QUESTION: Color = Color::White;
const C_HUD_INPUT: Color = Color::Yellow;
const C_HUD_SCORE: Color = Color::Green;
const C_HUD_SHURIKENS: Color = Color::Cyan;
const C_NINJA: Color = Color::White;
const C_GATE: Color = Color::DarkRed;
const C_ENEMY: Color = Color::Red;
const C_SHURIKEN: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_ACTIVE: Color = Color::Black;
const C_ACTIVE_BG: Color = Color::Grey;

const TITLE: &str = "The Meditating Ninja";

const NINJA_ART: &str = "(-_-)";
const ENEMY_FROM_LEFT: &str = "(ò_ó)>";
const ENEMY_FROM_RIGHT: &str = "<(ò_ó)";
const SHURIKEN_RIGHT: &str = "✦";
const SHURIKEN_LEFT: &str = "✧";

const RULES: &[&str] = &[
    "1) Your goal is to meditate and grow wiser.",
    "2) Keep the evil ninjas from disturbing the meditation.",
    "3) You can stop an evil ninja by throwing a shuriken.",
    "4) Press the RIGHT ARROW to throw a shuriken to your right.",
    "5) Press the LEFT ARROW to throw a shuriken to your left.",
    "6) Answer a math question to earn a shuriken.",
    "7) To answer, type a number and press ENTER.",
    "8) Every correct answer is worth one shuriken.",
    "9) You cannot skip a question.",
    "10) If an evil ninja reaches you, the game is over.",
    "11) Your score is the ninja's final IQ.",
];

// ── Scaling ───────────────────────────────────────────────────────────────────

/// Terminal area the field is drawn into: rows 3 .. height-2.
#[derive(Clone, Copy)]
struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    fn current() -> std::io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self { width, height })
    }

    // Scaled in i64: shurikens that miss keep flying for the rest of the game.
    fn col(&self, x: i32) -> i64 {
        1 + i64::from(x) * (i64::from(self.width) - 2) / i64::from(FIELD_WIDTH)
    }

    fn row(&self, y: i32) -> i64 {
        3 + i64::from(y) * (i64::from(self.height) - 5) / i64::from(FIELD_HEIGHT)
    }

    /// Top-left cell for `art` centred on `bounds`, or `None` when any of it
    /// would fall outside the border.
    fn place(&self, bounds: &Bounds, art: &str) -> Option<(u16, u16)> {
        let len = art.chars().count() as i64;
        let col = self.col(bounds.center_x()) - len / 2;
        let row = self.row(bounds.y + bounds.height / 2);
        let fits_x = col >= 1 && col + len <= i64::from(self.width) - 1;
        let fits_y = row >= 3 && row <= i64::from(self.height) - 3;
        (fits_x && fits_y).then_some((col as u16, row as u16))
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete game frame.
pub fn render_game<W: Write + ?Sized>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let view = Viewport::current()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, view, state)?;
    draw_gate(out, view, &state.layout.gate)?;
    draw_art(out, view, &state.ninja.bounds, NINJA_ART, C_NINJA)?;

    for enemy in state.enemies.iter() {
        let art = match enemy.side {
            Side::Left => ENEMY_FROM_LEFT,
            Side::Right => ENEMY_FROM_RIGHT,
        };
        draw_art(out, view, &enemy.sprite.bounds, art, C_ENEMY)?;
    }
    for projectile in state.projectiles.iter() {
        let art = match projectile.direction() {
            Direction::Right => SHURIKEN_RIGHT,
            Direction::Left => SHURIKEN_LEFT,
        };
        draw_art(out, view, &projectile.sprite.bounds, art, C_SHURIKEN)?;
    }

    draw_controls_hint(out, view, "← → : Throw   0-9 - : Type   ENTER : Answer   ESC : Menu")?;

    finish(out, view)
}

pub fn render_menu<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    active: usize,
    notice: Option<&str>,
) -> std::io::Result<()> {
    let view = Viewport::current()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_title(out)?;

    out.queue(cursor::MoveTo(2, 3))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print("YOUR NAME: "))?;
    out.queue(style::SetForegroundColor(C_HUD_INPUT))?;
    out.queue(Print(format!("[{:<width$}]", name, width = MAX_NAME_LEN)))?;

    if name.is_empty() {
        out.queue(cursor::MoveTo(2, 4))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print("Type your name before playing"))?;
    }

    for (i, (label, _)) in BUTTONS.iter().enumerate() {
        out.queue(cursor::MoveTo(2, 6 + 2 * i as u16))?;
        if i == active {
            out.queue(style::SetForegroundColor(C_ACTIVE))?;
            out.queue(style::SetBackgroundColor(C_ACTIVE_BG))?;
        } else {
            out.queue(style::SetForegroundColor(C_TEXT))?;
        }
        out.queue(Print(format!(" {:<13}", label)))?;
        out.queue(style::ResetColor)?;
    }

    out.queue(cursor::MoveTo(22, 8))?;
    out.queue(style::SetForegroundColor(C_NINJA))?;
    out.queue(Print(NINJA_ART))?;

    if let Some(notice) = notice {
        out.queue(cursor::MoveTo(2, 15))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(notice))?;
    }

    draw_controls_hint(out, view, "↑ ↓ : Select   ENTER : Open   A-Z : Name   ESC : Quit")?;
    finish(out, view)
}

pub fn render_rules<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    let view = Viewport::current()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_title(out)?;

    out.queue(cursor::MoveTo(2, 2))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print("Rules"))?;

    out.queue(style::SetForegroundColor(C_TEXT))?;
    for (i, rule) in RULES.iter().enumerate() {
        out.queue(cursor::MoveTo(2, 4 + i as u16))?;
        out.queue(Print(*rule))?;
    }

    draw_controls_hint(out, view, "Press Q to go back.")?;
    finish(out, view)
}

pub fn render_high_scores<W: Write + ?Sized>(
    out: &mut W,
    rows: &[LeaderboardEntry],
) -> std::io::Result<()> {
    let view = Viewport::current()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_title(out)?;

    out.queue(cursor::MoveTo(2, 2))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Top {} high scores", TOP_ENTRIES)))?;

    out.queue(style::SetForegroundColor(C_HUD_SHURIKENS))?;
    if rows.is_empty() {
        out.queue(cursor::MoveTo(4, 4))?;
        out.queue(Print("No games played yet."))?;
    }
    for (i, entry) in rows.iter().enumerate() {
        out.queue(cursor::MoveTo(4, 4 + i as u16))?;
        out.queue(Print(format!("{:>2}. {:<12} {:>5}", i + 1, entry.name, entry.score)))?;
    }

    draw_controls_hint(out, view, "Press Q to go back.")?;
    finish(out, view)
}

// ── Shared pieces ─────────────────────────────────────────────────────────────

fn draw_title<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(2, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(TITLE))?;
    Ok(())
}

/// Park cursor in a harmless spot and flush.
fn finish<W: Write + ?Sized>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_controls_hint<W: Write + ?Sized>(
    out: &mut W,
    view: Viewport,
    hint: &str,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write + ?Sized>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 2: top bar, under the two HUD rows
    out.queue(cursor::MoveTo(0, 2))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 3..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (rows 0-1) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write + ?Sized>(
    out: &mut W,
    view: Viewport,
    state: &GameState,
) -> std::io::Result<()> {
    let panel = &state.panel;

    // Question and answer box: left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_QUESTION))?;
    out.queue(Print(panel.question().display_string()))?;
    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(style::SetForegroundColor(C_HUD_INPUT))?;
    out.queue(Print(format!("[{:<8}]", panel.input())))?;

    // IQ: centre
    let score = format!("Ninja IQ: {}", panel.score());
    let level = match panel.difficulty() {
        Difficulty::Easy => "[ EASY ]",
        Difficulty::Hard => "[ HARD ]",
    };
    let cx = view.width / 2;
    out.queue(cursor::MoveTo(cx.saturating_sub(score.len() as u16 / 2), 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score))?;
    out.queue(cursor::MoveTo(cx.saturating_sub(level.len() as u16 / 2), 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(level))?;

    // Shuriken count: right
    let count = format!("{} x {}", SHURIKEN_RIGHT, panel.inventory());
    let rx = view.width.saturating_sub(count.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SHURIKENS))?;
    out.queue(Print(&count))?;

    Ok(())
}

// ── Field ─────────────────────────────────────────────────────────────────────

fn draw_gate<W: Write + ?Sized>(out: &mut W, view: Viewport, gate: &Bounds) -> std::io::Result<()> {
    let left = view.col(gate.x).max(1);
    let right = view.col(gate.right()).min(i64::from(view.width) - 2);
    let top = view.row(gate.y).max(3);
    let bottom = i64::from(view.height) - 3;
    if right - left < 2 || top >= bottom {
        return Ok(());
    }

    out.queue(style::SetForegroundColor(C_GATE))?;
    out.queue(cursor::MoveTo(left as u16, top as u16))?;
    out.queue(Print(format!("╔{}╗", "═".repeat((right - left - 1) as usize))))?;
    for row in top + 1..=bottom {
        out.queue(cursor::MoveTo(left as u16, row as u16))?;
        out.queue(Print("║"))?;
        out.queue(cursor::MoveTo(right as u16, row as u16))?;
        out.queue(Print("║"))?;
    }
    Ok(())
}

fn draw_art<W: Write + ?Sized>(
    out: &mut W,
    view: Viewport,
    bounds: &Bounds,
    art: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.place(bounds, art) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(art))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_corners_land_inside_the_border() {
        let view = Viewport { width: 80, height: 24 };
        assert_eq!(view.col(0), 1);
        assert_eq!(view.col(FIELD_WIDTH), 79);
        assert_eq!(view.row(0), 3);
        assert_eq!(view.row(FIELD_HEIGHT), 22);
    }

    #[test]
    fn the_ninja_is_placed_on_a_normal_terminal() {
        let view = Viewport { width: 120, height: 40 };
        let ninja = Bounds::new(245, 281, 110, 119);
        assert!(view.place(&ninja, "@").is_some());
    }

    #[test]
    fn far_off_shurikens_are_clipped_without_overflow() {
        let view = Viewport { width: 200, height: 60 };
        let far_right = Bounds::new(10_900_000, 321, 30, 30);
        let far_left = Bounds::new(-10_900_000, 321, 30, 30);
        assert_eq!(view.place(&far_right, "*"), None);
        assert_eq!(view.place(&far_left, "*"), None);
        assert_eq!(view.col(i32::MAX), 1 + i64::from(i32::MAX) * 198 / 675);
    }
}
