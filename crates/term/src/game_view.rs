//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Three screens share one layout:
//! - the board: title, bordered grid of lights, status line
//! - the winner banner, shown instead of the board once every light is off
//! - the how-to-play dialog, drawn on top of the board

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows above the board frame: title plus a blank line.
const TITLE_ROWS: u16 = 2;
/// Rows below the board frame: a blank line plus the status line.
const STATUS_ROWS: u16 = 2;

const ORANGE: Rgb = Rgb::new(255, 140, 40);
const BLUE: Rgb = Rgb::new(60, 170, 255);
const LIT: Rgb = Rgb::new(255, 200, 60);
const UNLIT: Rgb = Rgb::new(70, 70, 85);
const BOARD_BG: Rgb = Rgb::new(20, 20, 30);

pub const HELP_LINES: [&str; 12] = [
    "The Ins and Outs",
    "",
    "The game is a grid of lights. When it starts, a",
    "random pattern of these lights is switched on.",
    "Pressing any light toggles it and the four lights",
    "next to it. The goal is to switch all the lights",
    "off, preferably in as few presses as possible.",
    "",
    "arrows/hjkl/wasd  move     space/enter  toggle",
    "mouse click       toggle   n            new game",
    "? or F1           help     esc          close",
    "q                 quit",
];

/// Screen position of the board frame (top-left corner of the border).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoardLayout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the Lights Out board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square and leaves room for the cursor brackets.
        Self {
            cell_w: 4,
            cell_h: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardLayout {
        let frame_w = to_u16(snap.cols).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = to_u16(snap.rows).saturating_mul(self.cell_h).saturating_add(2);
        let total_h = frame_h.saturating_add(TITLE_ROWS + STATUS_ROWS);

        let x = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            x,
            y: top.saturating_add(TITLE_ROWS),
            frame_w,
            frame_h,
        }
    }

    /// Board cell under terminal position (x, y).
    ///
    /// Uses the same layout as [`GameView::render_into`]. Returns `None` when the
    /// position is outside the board or the board is not accepting input (won, or
    /// the help dialog is open).
    pub fn cell_at(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, usize)> {
        if !snap.playable() {
            return None;
        }

        let layout = self.layout(snap, viewport);
        let ox = layout.x.saturating_add(1);
        let oy = layout.y.saturating_add(1);
        if x < ox || y < oy {
            return None;
        }

        let col = ((x - ox) / self.cell_w) as usize;
        let row = ((y - oy) / self.cell_h) as usize;
        if row < snap.rows && col < snap.cols {
            Some((row, col))
        } else {
            None
        }
    }

    /// Render the current session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if snap.outcome.is_won() {
            self.draw_winner(fb, viewport);
            return;
        }

        let layout = self.layout(snap, viewport);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));

        self.draw_title(fb, layout);
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            CellStyle {
                bg: BOARD_BG,
                ..CellStyle::default()
            },
        );
        draw_border(fb, layout.x, layout.y, layout.frame_w, layout.frame_h, border);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let has_cursor = snap.cursor == (row, col);
                self.draw_light(fb, layout, row, col, snap.is_lit(row, col), has_cursor);
            }
        }

        self.draw_status(fb, snap, layout);

        if snap.help_visible {
            draw_help(fb, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, layout: BoardLayout) {
        // "LIGHTS OUT"
        let title_w = 10;
        let y = layout.y.saturating_sub(TITLE_ROWS);
        let x = layout.x + layout.frame_w.saturating_sub(title_w) / 2;
        let end = fb.put_str(x, y, "LIGHTS", CellStyle::fg(ORANGE).bold());
        fb.put_str(end + 1, y, "OUT", CellStyle::fg(BLUE).bold());
    }

    fn draw_light(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        row: usize,
        col: usize,
        lit: bool,
        has_cursor: bool,
    ) {
        let px = (layout.x + 1).saturating_add(to_u16(col).saturating_mul(self.cell_w));
        let py = (layout.y + 1).saturating_add(to_u16(row).saturating_mul(self.cell_h));
        // Boards larger than the terminal are clipped.
        if px >= fb.width() || py >= fb.height() {
            return;
        }

        let (ch, fg) = if lit { ('█', LIT) } else { ('·', UNLIT) };
        let style = CellStyle {
            fg,
            bg: BOARD_BG,
            bold: has_cursor,
            dim: !lit && !has_cursor,
        };

        // Leave a one-column gutter on each side when there is room; the cursor
        // brackets go there.
        if self.cell_w >= 3 {
            fb.fill_rect(px.saturating_add(1), py, self.cell_w - 2, self.cell_h, ch, style);
            if has_cursor {
                let bracket = CellStyle {
                    fg: BLUE,
                    bg: BOARD_BG,
                    bold: true,
                    dim: false,
                };
                let right = px.saturating_add(self.cell_w - 1);
                for dy in 0..self.cell_h {
                    fb.put_char(px, py.saturating_add(dy), '[', bracket);
                    fb.put_char(right, py.saturating_add(dy), ']', bracket);
                }
            }
        } else {
            let style = if has_cursor {
                CellStyle { fg: BLUE, ..style }
            } else {
                style
            };
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: BoardLayout) {
        let y = layout.y.saturating_add(layout.frame_h).saturating_add(1);
        let label = CellStyle::default().bold();
        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let mut x = fb.put_str(layout.x, y, "LIT ", label);
        x = fb.put_u32(x, y, to_u32(snap.lit), CellStyle::fg(LIT));
        fb.put_str(x.saturating_add(2), y, "? help  n new  q quit", hint);
    }

    fn draw_winner(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        // "YOU WIN!"
        let banner_w = 8;
        let mid_y = viewport.height / 2;
        let x = viewport.width.saturating_sub(banner_w) / 2;
        let end = fb.put_str(x, mid_y.saturating_sub(1), "YOU", CellStyle::fg(ORANGE).bold());
        fb.put_str(end + 1, mid_y.saturating_sub(1), "WIN!", CellStyle::fg(BLUE).bold());

        let hint = "n new game  q quit";
        let hint_x = viewport.width.saturating_sub(hint.len() as u16) / 2;
        fb.put_str(
            hint_x,
            mid_y.saturating_add(1),
            hint,
            CellStyle {
                dim: true,
                ..CellStyle::default()
            },
        );
    }
}

fn draw_help(fb: &mut FrameBuffer, viewport: Viewport) {
    let text_w = HELP_LINES
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16;
    let w = text_w + 4;
    let h = HELP_LINES.len() as u16 + 4;
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;

    let panel = CellStyle {
        fg: Rgb::new(230, 230, 230),
        bg: Rgb::new(10, 10, 20),
        bold: false,
        dim: false,
    };
    fb.fill_rect(x, y, w, h, ' ', panel);
    draw_border(fb, x, y, w, h, CellStyle { fg: ORANGE, ..panel });

    for (i, line) in HELP_LINES.iter().enumerate() {
        let style = if i == 0 {
            CellStyle { fg: BLUE, bold: true, ..panel }
        } else {
            panel
        };
        fb.put_str(x + 2, y + 2 + i as u16, line, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn to_u32(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
