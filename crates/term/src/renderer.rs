//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Full redraw on the first frame and on size changes; afterwards each row
//! repaints only the span between its first and last changed glyph.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Glyph, Rgb, Style, Surface};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Surface>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw. Useful on terminal resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame, keeping it as the diff base for the next one.
    pub fn draw(&mut self, next: Surface) -> Result<()> {
        let do_diff = matches!(
            &self.last,
            Some(prev) if prev.width() == next.width() && prev.height() == next.height()
        );
        if do_diff {
            let prev = self.last.take().unwrap();
            self.diff_redraw(&next, &prev)?;
        } else {
            self.full_redraw(&next)?;
        }
        self.last = Some(next);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &Surface) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current_style: Option<Style> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for glyph in fb.row(y) {
                self.print_glyph(*glyph, &mut current_style)?;
            }
        }

        self.finish_frame()
    }

    fn diff_redraw(&mut self, next: &Surface, prev: &Surface) -> Result<()> {
        let mut current_style: Option<Style> = None;

        for y in 0..next.height() {
            let Some((start, end)) = changed_span(prev.row(y), next.row(y)) else {
                continue;
            };

            self.stdout.queue(cursor::MoveTo(start as u16, y))?;
            for glyph in &next.row(y)[start..end] {
                self.print_glyph(*glyph, &mut current_style)?;
            }
        }

        self.finish_frame()
    }

    fn print_glyph(&mut self, glyph: Glyph, current_style: &mut Option<Style>) -> Result<()> {
        if *current_style != Some(glyph.style) {
            self.apply_style(glyph.style)?;
            *current_style = Some(glyph.style);
        }
        self.stdout.queue(Print(glyph.ch))?;
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// The `[start, end)` span covering every difference between two rows, or
/// `None` when the rows are identical.
fn changed_span(prev: &[Glyph], next: &[Glyph]) -> Option<(usize, usize)> {
    let start = prev
        .iter()
        .zip(next.iter())
        .position(|(a, b)| a != b)?;
    let trailing_equal = prev
        .iter()
        .zip(next.iter())
        .rev()
        .take_while(|(a, b)| a == b)
        .count();
    Some((start, next.len() - trailing_equal))
}
