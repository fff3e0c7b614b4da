/// Rendering layer — all terminal I/O lives here.
///
/// The simulation hands over a finished text frame; this module only paints
/// it, colouring each glyph by what it usually belongs to.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_DEFAULT: Color = Color::White;
const C_HUD: Color = Color::DarkBlue;
const C_ENEMY: Color = Color::Green;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

fn glyph_color(ch: char) -> Color {
    match ch {
        '#' => C_HUD,
        '(' | ')' | '0' | '!' => C_ENEMY,
        '|' => C_BULLET_PLAYER,
        '$' => C_BULLET_ENEMY,
        _ => C_DEFAULT,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Paint one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &str, game_over: bool, score: i64) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut height = 0u16;
    for (row, line) in frame.lines().enumerate() {
        out.queue(cursor::MoveTo(0, row as u16))?;
        draw_line(out, line)?;
        height = row as u16 + 1;
    }

    draw_controls_hint(out, height, game_over)?;
    if game_over {
        draw_game_over(out, height, score)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height + 1))?;
    out.flush()?;
    Ok(())
}

/// Emit a line, switching colour only when the glyph class changes.
fn draw_line<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    let mut current: Option<Color> = None;
    let mut run = String::new();

    for ch in line.chars() {
        let color = glyph_color(ch);
        if current != Some(color) {
            if let Some(prev) = current {
                out.queue(style::SetForegroundColor(prev))?;
                out.queue(Print(&run))?;
                run.clear();
            }
            current = Some(color);
        }
        run.push(ch);
    }
    if let Some(color) = current {
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

// ── Controls hint (below the frame) ───────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, row: u16, game_over: bool) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    if game_over {
        out.queue(Print("R : Play Again   Q : Quit"))?;
    } else {
        out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    }
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, height: u16, score: i64) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
    ];

    let (width, _) = terminal::size()?;
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
