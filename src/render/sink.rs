//! src/render/sink.rs
//!
//! Output side of the renderer: where frames go and how the previous frame is
//! overwritten.
//!
//! The plot only ever asks a sink to `rewind` over the last frame and `paint`
//! the next one; the escape sequences live here.

use std::fmt;
use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveUp;
use crossterm::{Command, queue};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use ratatui::style::Color;

use super::grid::Grid;
use super::palette::Palette;
use crate::error::Result;

/// Destination for rendered frames.
pub trait FrameSink {
    /// Move the cursor back to the top-left cell of a frame `rows` lines tall.
    fn rewind(&mut self, rows: usize) -> Result<()>;

    /// Write the grid top row first, each row left to right, newline-terminated.
    fn paint(&mut self, grid: &Grid, palette: &Palette) -> Result<()>;

    /// Write one uncolored line (debug dumps).
    fn print_line(&mut self, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

/// Cursor to column 0 of the current line, written as `ESC[0G`.
///
/// crossterm's `MoveToColumn(0)` writes `ESC[1G`; terminals treat both as the
/// first column, but the redraw sequence is fixed at `ESC[0G`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveToLineStart;

impl Command for MoveToLineStart {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[0G")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        crossterm::cursor::MoveToColumn(0).execute_winapi()
    }
}

/// ANSI terminal sink over any writer.
pub struct AnsiSink<W: Write> {
    out: W,
}

impl AnsiSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for AnsiSink<W> {
    fn rewind(&mut self, rows: usize) -> Result<()> {
        let up = u16::try_from(rows).unwrap_or(u16::MAX);
        queue!(self.out, MoveToLineStart, MoveUp(up))?;
        Ok(())
    }

    fn paint(&mut self, grid: &Grid, palette: &Palette) -> Result<()> {
        for row in (0..grid.rows()).rev() {
            for cell in grid.row(row).into_iter().flatten() {
                match cell.role {
                    Some(role) => queue!(
                        self.out,
                        SetForegroundColor(term_color(palette.color(role))),
                        Print(cell.glyph),
                        ResetColor
                    )?,
                    None => queue!(self.out, Print(cell.glyph))?,
                }
            }
            queue!(self.out, Print('\n'))?;
        }
        Ok(())
    }

    fn print_line(&mut self, line: &str) -> Result<()> {
        queue!(self.out, Print(line), Print('\n'))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Palette colors are ratatui colors; the terminal writer needs crossterm's.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}
