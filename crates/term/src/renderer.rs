//! TerminalRenderer: writes framebuffers to the terminal.
//!
//! The screen only changes after input, so the unit of work is a whole row. A
//! row is rewritten when any of its cells differ from the last frame drawn; a
//! resize or [`TerminalRenderer::invalidate`] repaints everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, event, execute,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame written to the terminal.
    shown: FrameBuffer,
    repaint: bool,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: FrameBuffer::new(0, 0),
            repaint: true,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            event::EnableMouseCapture
        )?;
        self.repaint = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            event::DisableMouseCapture,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint the whole screen on the next draw (terminal resized).
    pub fn invalidate(&mut self) {
        self.repaint = true;
    }

    /// Bring the terminal in line with `fb`.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        if self.repaint {
            encode_full_into(fb, &mut self.buf)?;
        } else {
            encode_diff_into(&self.shown, fb, &mut self.buf)?;
        }

        if !self.buf.is_empty() {
            self.stdout.write_all(&self.buf)?;
            self.stdout.flush()?;
        }
        self.shown.clone_from(fb);
        self.repaint = false;
        Ok(())
    }
}

/// Encode a clear-and-repaint of every row of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        write_row(fb, y, &mut pen, out)?;
    }
    pen.finish(out)
}

/// Encode the rows of `next` that differ from `prev` into `out`.
///
/// Leaves `out` untouched when nothing changed. Frames of different sizes
/// fall back to a full repaint.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    for y in changed_rows(prev, next) {
        write_row(next, y, &mut pen, out)?;
    }
    pen.finish(out)
}

/// Rows whose cells differ between two frames of the same size.
fn changed_rows<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = u16> + 'a {
    (0..next.height()).filter(move |&y| prev.row(y) != next.row(y))
}

fn write_row(fb: &FrameBuffer, y: u16, pen: &mut Pen, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, y))?;
    for cell in fb.row(y) {
        pen.set(cell.style, out)?;
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

/// Tracks the terminal's current style so runs of equal cells cost nothing.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn set(&mut self, style: CellStyle, out: &mut Vec<u8>) -> Result<()> {
        let prev = self.current.replace(style);
        if prev == Some(style) {
            return Ok(());
        }

        // An SGR reset also drops both colours.
        let attrs_changed = prev.map_or(true, |p| (p.bold, p.dim) != (style.bold, style.dim));
        if attrs_changed {
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs_changed || prev.map(|p| p.fg) != Some(style.fg) {
            out.queue(SetForegroundColor(color(style.fg)))?;
        }
        if attrs_changed || prev.map(|p| p.bg) != Some(style.bg) {
            out.queue(SetBackgroundColor(color(style.bg)))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.current.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
