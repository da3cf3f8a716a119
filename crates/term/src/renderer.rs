//! Flushes a [`FrameBuffer`] to the terminal.
//!
//! The whole screen is written after `enter`, a size change or
//! `invalidate`. Otherwise only the spans of cells that differ from the
//! frame already on screen are sent.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

#[derive(Debug)]
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows.
    shown: FrameBuffer,
    stale: bool,
    out: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: FrameBuffer::new(0, 0),
            stale: true,
            out: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush_out()?;
        self.stale = true;
        Ok(())
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush_out()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Write the whole screen on the next draw.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Show `fb`, then hand the previously shown frame back through `fb`
    /// so the caller can render into it next time.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let resized = self.shown.width() != fb.width() || self.shown.height() != fb.height();

        self.out.clear();
        if self.stale || resized {
            write_full(fb, &mut self.out)?;
        } else {
            write_changes(&self.shown, fb, &mut self.out)?;
        }
        self.flush_out()?;

        std::mem::swap(&mut self.shown, fb);
        self.stale = false;
        Ok(())
    }

    fn flush_out(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues cells and only switches colors when the style changes.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: usize, y: usize) -> Result<()> {
        let x = u16::try_from(x)?;
        let y = u16::try_from(y)?;
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cells(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                self.out.queue(SetForegroundColor(color(cell.style.fg)))?;
                self.out.queue(SetBackgroundColor(color(cell.style.bg)))?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
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

fn rows(fb: &FrameBuffer) -> impl Iterator<Item = &[Cell]> {
    // `chunks` rejects a zero width; an empty buffer has no rows anyway.
    fb.cells().chunks(usize::from(fb.width()).max(1))
}

fn write_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::new(out);
    for (y, row) in rows(fb).enumerate() {
        pen.move_to(0, y)?;
        pen.cells(row)?;
    }
    pen.finish()
}

/// Frames must be the same size.
fn write_changes(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::new(out);
    for (y, (old, new)) in rows(prev).zip(rows(next)).enumerate() {
        for span in changed_spans(old, new) {
            pen.move_to(span.start, y)?;
            pen.cells(&new[span])?;
        }
    }
    pen.finish()
}

/// Maximal runs of columns where the two rows differ.
fn changed_spans<'a>(
    old: &'a [Cell],
    new: &'a [Cell],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let len = old.len().min(new.len());
    let differs = move |x: usize| old[x] != new[x];
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < len && !differs(x) {
            x += 1;
        }
        if x == len {
            return None;
        }
        let start = x;
        while x < len && differs(x) {
            x += 1;
        }
        Some(start..x)
    })
}
