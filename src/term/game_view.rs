//! GameView: maps an engine `Frame` onto a terminal screen buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Frame, FrameCell};
use crate::term::screen::{Glyph, GlyphStyle, Rgb, ScreenBuffer};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Display color for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 217, 255),
        PieceKind::O => Rgb::new(255, 215, 0),
        PieceKind::T => Rgb::new(157, 0, 255),
        PieceKind::L => Rgb::new(255, 107, 53),
        PieceKind::J => Rgb::new(0, 255, 65),
        PieceKind::S => Rgb::new(255, 64, 64),
        PieceKind::Z => Rgb::new(255, 128, 171),
    }
}

/// A lightweight terminal view for the falling-block game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a frame into an existing screen buffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a buffer
    /// across frames and only pay a resize when the terminal changes.
    pub fn render_into(&self, frame: &Frame, viewport: Viewport, out: &mut ScreenBuffer) {
        out.resize(viewport.width, viewport.height);
        out.clear(Glyph::blank());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = GlyphStyle {
            fg: Rgb::new(80, 80, 90),
            bg: WELL_BG,
            bold: false,
            dim: false,
        };
        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Background for the well.
        out.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);

        // Border.
        self.draw_border(out, start_x, start_y, frame_w, frame_h, border);

        // Board cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match frame.cells[y as usize][x as usize] {
                    FrameCell::Empty => self.draw_empty_cell(out, start_x, start_y, x, y),
                    FrameCell::Locked => self.draw_locked_cell(out, start_x, start_y, x, y),
                    FrameCell::Active(kind) => {
                        self.draw_active_cell(out, start_x, start_y, x, y, kind)
                    }
                }
            }
        }

        // Side panel (score/lines/level and key help).
        self.draw_side_panel(out, frame, viewport, start_x, start_y, frame_w);

        // Overlays.
        match frame.phase {
            Phase::Idle => {
                self.draw_overlay_line(out, start_x, start_y, frame_w, frame_h, 0, "BLOCKFALL");
                self.draw_overlay_line(
                    out,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    1,
                    "PRESS ENTER TO START",
                );
            }
            Phase::Running if frame.paused => {
                self.draw_overlay_line(out, start_x, start_y, frame_w, frame_h, 0, "PAUSED");
            }
            Phase::GameOver => {
                self.draw_overlay_line(out, start_x, start_y, frame_w, frame_h, 0, "GAME OVER");
                self.draw_overlay_score(out, start_x, start_y, frame_w, frame_h, frame.score);
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a fresh buffer per call.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> ScreenBuffer {
        let mut out = ScreenBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut out);
        out
    }

    fn draw_border(
        &self,
        out: &mut ScreenBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: GlyphStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }

        out.put_char(x, y, '┌', style);
        out.put_char(x + w - 1, y, '┐', style);
        out.put_char(x, y + h - 1, '└', style);
        out.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            out.put_char(x + dx, y, '─', style);
            out.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            out.put_char(x, y + dy, '│', style);
            out.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, out: &mut ScreenBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = GlyphStyle {
            fg: Rgb::new(90, 90, 100),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(out, start_x, start_y, x, y, '·', style);
    }

    /// Settled cells are drawn in one neutral tone; the frame carries no
    /// identity for them.
    fn draw_locked_cell(&self, out: &mut ScreenBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = GlyphStyle {
            fg: Rgb::new(160, 160, 160),
            bg: WELL_BG,
            bold: false,
            dim: false,
        };
        self.fill_cell_rect(out, start_x, start_y, x, y, '█', style);
    }

    fn draw_active_cell(
        &self,
        out: &mut ScreenBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = GlyphStyle {
            fg: piece_color(kind),
            bg: WELL_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(out, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        out: &mut ScreenBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: GlyphStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        out.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        out: &mut ScreenBuffer,
        frame: &Frame,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = GlyphStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let help = GlyphStyle { dim: true, ..value };

        let mut y = start_y;
        out.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        out.put_u32(panel_x, y, frame.score, value);
        y = y.saturating_add(2);

        out.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        out.put_u32(panel_x, y, frame.lines, value);
        y = y.saturating_add(2);

        out.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        out.put_u32(panel_x, y, frame.level, value);
        y = y.saturating_add(2);

        for line in [
            "←/→ MOVE",
            "↑   ROTATE",
            "↓   SOFT DROP",
            "SPC HARD DROP",
            "P   PAUSE",
            "Q   QUIT",
        ] {
            if y >= viewport.height {
                break;
            }
            out.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_line(
        &self,
        out: &mut ScreenBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        line: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = GlyphStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        out.put_str(x, mid_y, text, style);
    }

    fn draw_overlay_score(
        &self,
        out: &mut ScreenBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        score: u32,
    ) {
        let style = GlyphStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        // Center the label and the number as one run of text.
        let text_w = 6 + decimal_width(score);
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let y = start_y.saturating_add(frame_h / 2).saturating_add(1);
        out.put_str(x, y, "SCORE ", style);
        out.put_u32(x + 6, y, score, style);
    }
}

fn decimal_width(value: u32) -> u16 {
    let mut n = value;
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}
