//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session state.  No game logic is performed; this module only translates
//! state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use egg_catcher::consts::{BASKET_CATCH_MARGIN, BASKET_Y};
use egg_catcher::entities::{Chicken, FallingObject, GameStatus, ObjectKind, SessionState};

/// Playfield pixels covered by one terminal column.
pub const PX_PER_COL: f32 = 10.0;

/// Below this the playfield is unreadable; a notice is shown instead.
const MIN_COLS: u16 = 30;
const MIN_ROWS: u16 = 12;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_HUD_TIME_LOW: Color = Color::Red;
const C_PERCH: Color = Color::Rgb { r: 153, g: 102, b: 51 };
const C_CHICKEN: Color = Color::Rgb { r: 255, g: 230, b: 0 };
const C_BEAK: Color = Color::Rgb { r: 255, g: 153, b: 0 };
const C_BASKET: Color = Color::Rgb { r: 230, g: 128, b: 51 };
const C_TITLE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Terminal size in cells. The playfield is `cols * PX_PER_COL` pixels wide;
/// its height is scaled onto whatever rows sit between the borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    pub fn playfield_width(&self) -> f32 {
        f32::from(self.cols) * PX_PER_COL
    }

    fn too_small(&self) -> bool {
        self.cols < MIN_COLS || self.rows < MIN_ROWS
    }

    /// First and last rows inside the border.
    fn play_rows(&self) -> (u16, u16) {
        (2, self.rows.saturating_sub(3))
    }

    fn col_for(&self, x: f32) -> u16 {
        let col = (x / PX_PER_COL).floor().max(0.0) as u16;
        col.clamp(1, self.cols.saturating_sub(2).max(1))
    }

    /// World y grows upward; terminal rows grow downward.
    fn row_for(&self, y: f32, height: f32) -> Option<u16> {
        if y < 0.0 || y > height || height <= 0.0 {
            return None;
        }
        let (top, bottom) = self.play_rows();
        let span = f32::from(bottom.saturating_sub(top));
        let row = top + ((height - y) / height * span).round() as u16;
        Some(row.min(bottom))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for the current status.
pub fn render<W: Write>(
    out: &mut W,
    state: &SessionState,
    view: &Viewport,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if view.too_small() {
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(format!(
            "Terminal too small. Try at least {}x{}.",
            MIN_COLS, MIN_ROWS
        )))?;
    } else {
        match state.status {
            GameStatus::Menu => draw_menu(out, state, view)?,
            GameStatus::Playing | GameStatus::Paused => {
                draw_border(out, view)?;
                draw_hud(out, state, view)?;
                draw_perch(out, state, view)?;
                draw_chicken(out, &state.chicken, state.playfield.height, view)?;
                for (_, obj) in state.objects.iter_active() {
                    draw_object(out, obj, state.playfield.height, view)?;
                }
                draw_basket(out, state, view)?;
                draw_controls_hint(out, view)?;
                if state.status == GameStatus::Paused {
                    draw_paused(out, view)?;
                }
            }
            GameStatus::GameOver => draw_game_over(out, state, view)?,
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Print `text` horizontally centred on `row`.
fn centred<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, state: &SessionState, view: &Viewport) -> std::io::Result<()> {
    let cy = view.rows / 2;
    let start = cy.saturating_sub(6);

    centred(out, view, start, "★  EGG CATCHER  ★", C_TITLE)?;

    let lines: &[(&str, Color)] = &[
        ("S : Start", Color::White),
        ("Q or ESC : Exit", Color::White),
        ("Use mouse to move basket", Color::White),
        ("A/D or Left/Right keys to move basket", Color::White),
        ("P : Pause/Resume", Color::White),
        ("Catch eggs, avoid poop!", Color::Yellow),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        centred(out, view, start + 2 + i as u16, text, *color)?;
    }

    let legend_row = start + 3 + lines.len() as u16;
    out.queue(cursor::MoveTo((view.cols / 2).saturating_sub(14), legend_row))?;
    for kind in ObjectKind::ALL {
        out.queue(style::SetForegroundColor(kind_color(kind)))?;
        out.queue(Print(format!("{} {:+}  ", glyph(kind), kind.score_delta())))?;
    }

    let hs = format!("High Score: {}", state.score.high_score);
    centred(out, view, legend_row + 2, &hs, Color::Yellow)?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &SessionState, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Score: {:<5} High: {}",
        state.score.points, state.score.high_score
    )))?;

    let time_str = format!("Time: {:>2}", state.score.time_remaining_secs);
    let time_color = if state.score.time_remaining_secs <= 10 {
        C_HUD_TIME_LOW
    } else {
        C_HUD
    };
    let tx = view
        .cols
        .saturating_sub(time_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(time_color))?;
    out.queue(Print(&time_str))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_perch<W: Write>(out: &mut W, state: &SessionState, view: &Viewport) -> std::io::Result<()> {
    // Bamboo runs just under the chicken's feet, 20 px in from each edge.
    let Some(row) = view.row_for(state.chicken.y - 12.0, state.playfield.height) else {
        return Ok(());
    };
    let left = view.col_for(20.0);
    let right = view.col_for(state.playfield.width - 20.0);
    if right <= left {
        return Ok(());
    }
    out.queue(cursor::MoveTo(left, row))?;
    out.queue(style::SetForegroundColor(C_PERCH))?;
    out.queue(Print("═".repeat((right - left + 1) as usize)))?;
    Ok(())
}

fn draw_chicken<W: Write>(
    out: &mut W,
    chicken: &Chicken,
    height: f32,
    view: &Viewport,
) -> std::io::Result<()> {
    //  (o>   walking right
    //  <o)   walking left
    let Some(row) = view.row_for(chicken.y, height) else {
        return Ok(());
    };
    let col = view.col_for(chicken.x).saturating_sub(1).max(1);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_CHICKEN))?;
    if chicken.velocity >= 0.0 {
        out.queue(Print("(o"))?;
        out.queue(style::SetForegroundColor(C_BEAK))?;
        out.queue(Print(">"))?;
    } else {
        out.queue(style::SetForegroundColor(C_BEAK))?;
        out.queue(Print("<"))?;
        out.queue(style::SetForegroundColor(C_CHICKEN))?;
        out.queue(Print("o)"))?;
    }
    Ok(())
}

fn glyph(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Poop => "@",
        _ => "0",
    }
}

fn kind_color(kind: ObjectKind) -> Color {
    let (r, g, b) = kind.color();
    Color::Rgb { r, g, b }
}

fn draw_object<W: Write>(
    out: &mut W,
    obj: &FallingObject,
    height: f32,
    view: &Viewport,
) -> std::io::Result<()> {
    let Some(row) = view.row_for(obj.y, height) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(view.col_for(obj.x), row))?;
    out.queue(style::SetForegroundColor(kind_color(obj.kind)))?;
    out.queue(Print(glyph(obj.kind)))?;
    Ok(())
}

fn draw_basket<W: Write>(out: &mut W, state: &SessionState, view: &Viewport) -> std::io::Result<()> {
    //  \▄▄▄▄▄▄▄/   spanning the full catch width
    let Some(row) = view.row_for(BASKET_Y, state.playfield.height) else {
        return Ok(());
    };
    let b = &state.basket;
    let left = view.col_for(b.x - b.half_width - BASKET_CATCH_MARGIN);
    let right = view.col_for(b.x + b.half_width + BASKET_CATCH_MARGIN);
    let inner = right.saturating_sub(left).saturating_sub(1) as usize;
    out.queue(cursor::MoveTo(left, row))?;
    out.queue(style::SetForegroundColor(C_BASKET))?;
    out.queue(Print(format!("\\{}/", "▄".repeat(inner))))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Mouse / ← → / A D : Move   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_paused<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let cy = view.rows / 2;
    centred(out, view, cy, "PAUSED", Color::White)?;
    centred(out, view, cy + 1, "Press P to resume, M for menu", C_HINT)?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &SessionState,
    view: &Viewport,
) -> std::io::Result<()> {
    let score = &state.score;
    let new_best = score.points > 0 && score.points >= score.high_score;

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║     GAME  OVER     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let start_row = (view.rows / 2).saturating_sub(4);
    for (i, (msg, color)) in lines.iter().enumerate() {
        centred(out, view, start_row + i as u16, msg, *color)?;
    }

    let score_row = start_row + lines.len() as u16;
    centred(
        out,
        view,
        score_row,
        &format!("Score: {}", score.points),
        Color::Yellow,
    )?;
    let (best_line, best_color) = if new_best {
        (format!("★ NEW HIGH: {} ★", score.high_score), Color::Yellow)
    } else {
        (format!("High: {}", score.high_score), C_HINT)
    };
    centred(out, view, score_row + 1, &best_line, best_color)?;
    centred(
        out,
        view,
        score_row + 3,
        "S : Restart    M : Menu    Q/ESC : Quit",
        Color::White,
    )?;
    Ok(())
}
