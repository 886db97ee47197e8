/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands, scaling the playfield into whatever
/// terminal size is available.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::config::GameConfig;
use crate::entities::{GameState, Obstacle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_SKY: Color = Color::Rgb { r: 135, g: 206, b: 235 };
const C_PIPE: Color = Color::Rgb { r: 0, g: 200, b: 0 };
const C_BIRD: Color = Color::Rgb { r: 255, g: 255, b: 0 };
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_BEST: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const PIPE_GLYPH: &str = "█";
const BIRD_GLYPH: &str = "●";

/// Smallest terminal that still leaves a one-cell playfield inside the frame.
const MIN_COLS: u16 = 3;
const MIN_ROWS: u16 = 5;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Terminal dimensions in cells.
///
/// Layout:
///   row 0            HUD
///   row 1            top border
///   rows 2..rows-2   playfield
///   row rows-2       bottom border
///   row rows-1       controls hint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn fits_playfield(&self) -> bool {
        self.cols >= MIN_COLS && self.rows >= MIN_ROWS
    }

    /// Width of the playfield area in cells.
    pub fn inner_cols(&self) -> u16 {
        self.cols.saturating_sub(2)
    }

    /// Height of the playfield area in cells.
    pub fn inner_rows(&self) -> u16 {
        self.rows.saturating_sub(4)
    }

    /// Playfield column for a horizontal position, clamped inside the border.
    pub fn to_col(&self, x: f32, config: &GameConfig) -> u16 {
        let inner = self.inner_cols().max(1);
        let cell = (x / config.playfield_width * inner as f32).floor();
        1 + cell.clamp(0.0, (inner - 1) as f32) as u16
    }

    /// Playfield row for a vertical position, clamped inside the border.
    pub fn to_row(&self, y: f32, config: &GameConfig) -> u16 {
        let inner = self.inner_rows().max(1);
        let cell = (y / config.playfield_height * inner as f32).floor();
        2 + cell.clamp(0.0, (inner - 1) as f32) as u16
    }

    /// Last column touched by a span ending (exclusively) at `x`.
    pub fn end_col(&self, x: f32, config: &GameConfig) -> u16 {
        let inner = self.inner_cols().max(1) as f32;
        (x / config.playfield_width * inner).ceil().clamp(1.0, inner) as u16
    }

    /// Map a playfield point to the terminal cell `(col, row)` containing it.
    pub fn to_cell(&self, x: f32, y: f32, config: &GameConfig) -> (u16, u16) {
        (self.to_col(x, config), self.to_row(y, config))
    }

    /// Playfield y at the vertical centre of a terminal row.
    fn row_center_y(&self, row: u16, config: &GameConfig) -> f32 {
        let inner = self.inner_rows().max(1) as f32;
        (row.saturating_sub(2) as f32 + 0.5) / inner * config.playfield_height
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    config: &GameConfig,
    viewport: Viewport,
    best_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if !viewport.fits_playfield() {
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(Print("Terminal too small"))?;
        out.flush()?;
        return Ok(());
    }

    draw_border(out, viewport)?;
    draw_sky(out, viewport)?;

    for obstacle in &state.obstacles {
        draw_obstacle(out, obstacle, config, viewport)?;
    }

    draw_bird(out, state, config, viewport)?;
    draw_hud(out, state, viewport, best_score)?;
    draw_controls_hint(out, viewport)?;

    if state.is_over {
        draw_game_over(out, state, viewport, best_score)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border & background ───────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, viewport: Viewport) -> std::io::Result<()> {
    let w = viewport.cols as usize;
    let h = viewport.rows;

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
        out.queue(cursor::MoveTo(viewport.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_sky<W: Write>(out: &mut W, viewport: Viewport) -> std::io::Result<()> {
    let blank = " ".repeat(viewport.inner_cols() as usize);
    out.queue(style::SetBackgroundColor(C_SKY))?;
    for row in 2..viewport.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(1, row))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Two solid bands per obstacle: ceiling down to `gap_top`, `gap_bottom`
/// down to the floor.  Rows are classified by their centre line.
fn draw_obstacle<W: Write>(
    out: &mut W,
    obstacle: &Obstacle,
    config: &GameConfig,
    viewport: Viewport,
) -> std::io::Result<()> {
    let left = obstacle.x.max(0.0);
    let right = obstacle.trailing_edge(config.obstacle_width).min(config.playfield_width);
    if right <= 0.0 || left >= config.playfield_width {
        return Ok(());
    }

    let first_col = viewport.to_col(left, config);
    let last_col = viewport.end_col(right, config).max(first_col);
    let band = PIPE_GLYPH.repeat((last_col - first_col + 1) as usize);

    out.queue(style::SetForegroundColor(C_PIPE))?;
    for row in 2..viewport.rows.saturating_sub(2) {
        let y = viewport.row_center_y(row, config);
        if y < obstacle.gap_top || y > obstacle.gap_bottom {
            out.queue(cursor::MoveTo(first_col, row))?;
            out.queue(Print(&band))?;
        }
    }
    Ok(())
}

fn draw_bird<W: Write>(
    out: &mut W,
    state: &GameState,
    config: &GameConfig,
    viewport: Viewport,
) -> std::io::Result<()> {
    let (col, row) = viewport.to_cell(config.bird_x, state.bird_y, config);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BIRD))?;
    out.queue(Print(BIRD_GLYPH))?;
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    viewport: Viewport,
    best_score: u32,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>4}", state.score)))?;

    let best = best_score.max(state.score);
    if best > 0 {
        let best_str = format!("Best:{:>4}", best);
        let bx = viewport
            .cols
            .saturating_sub(best_str.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(bx, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_BEST))?;
        out.queue(Print(&best_str))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, viewport: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, viewport.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / ↑ : Flap   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    viewport: Viewport,
    best_score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>4}", state.score);
    let new_best = state.score > best_score;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>4} ★", state.score)
    } else {
        format!("Best Score:  {:>4}", best_score)
    };

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║     GAME  OVER     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

    let cx = viewport.cols / 2;
    let total_rows = lines.len() + 3; // 3 box lines + score + best + hint
    let start_row = (viewport.rows / 2).saturating_sub(total_rows as u16 / 2);

    out.queue(style::SetBackgroundColor(Color::Black))?;
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let best_row = score_row + 1;
    let col = cx.saturating_sub(best_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, best_row))?;
    out.queue(style::SetForegroundColor(best_color))?;
    out.queue(Print(&best_line))?;

    let hint = "R - Play Again  Q - Quit";
    let hint_row = best_row + 1;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, hint_row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;
    out.queue(style::SetBackgroundColor(Color::Reset))?;

    Ok(())
}
