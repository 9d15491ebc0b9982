//! Frame rendering - one centered word per screen
//!
//! A frame clears the screen, homes the cursor, moves to the centre cell for
//! the word and writes its raw bytes, wrapped in reverse video when the word
//! is emphasized. Building the frame is a pure function so the exact bytes
//! can be checked without a terminal.

use std::fmt;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{queue, Command};

use crate::reading::Token;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub rows: u16,
    pub columns: u16,
}

impl Geometry {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(30, 80)
    }
}

/// 1-indexed row of the vertical centre.
pub fn center_row(geometry: Geometry) -> i64 {
    (i64::from(geometry.rows) + 1) / 2
}

/// 1-indexed column where a word of `width` cells starts so it is centred.
///
/// A word wider than the terminal yields a column left of the screen; it is
/// emitted unchanged and the terminal decides what to do with it.
pub fn start_column(geometry: Geometry, width: usize) -> i64 {
    let width = i64::try_from(width).unwrap_or(i64::MAX);
    (i64::from(geometry.columns) - width) / 2 + 1
}

/// CUP with 1-indexed, unclamped coordinates.
struct PlaceCursor {
    row: i64,
    column: i64,
}

impl Command for PlaceCursor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[{};{}H", self.row, self.column)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "unclamped cursor placement needs an ANSI terminal",
        ))
    }
}

pub fn render_frame(token: &Token<'_>, geometry: Geometry) -> io::Result<Vec<u8>> {
    let mut frame = Vec::with_capacity(token.text.len() + 32);
    queue!(
        frame,
        Clear(ClearType::All),
        MoveTo(0, 0),
        PlaceCursor {
            row: center_row(geometry),
            column: start_column(geometry, token.display_width()),
        }
    )?;
    if token.emphasis {
        queue!(frame, SetAttribute(Attribute::Reverse))?;
    }
    frame.write_all(token.text)?;
    if token.emphasis {
        queue!(frame, SetAttribute(Attribute::NoReverse))?;
    }
    Ok(frame)
}
