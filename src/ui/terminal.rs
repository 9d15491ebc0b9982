use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use super::frame::Geometry;
use crate::engine::error::RsvpError;

/// The display side of a reading session.
///
/// `enter` switches the terminal into the full-screen, unbuffered, no-echo
/// mode; `leave` undoes it. Frames are written whole by `present`.
pub trait Console {
    fn enter(&mut self) -> Result<(), RsvpError>;

    fn leave(&mut self) -> Result<(), RsvpError>;

    fn size(&mut self) -> Result<Geometry, RsvpError>;

    fn present(&mut self, frame: &[u8]) -> Result<(), RsvpError>;
}

/// Console on the process's stdout and controlling terminal.
///
/// Raw mode comes from crossterm, which saves the original termios and puts
/// it back verbatim on `disable_raw_mode`.
pub struct TtyConsole {
    out: Stdout,
}

impl TtyConsole {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TtyConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TtyConsole {
    fn enter(&mut self) -> Result<(), RsvpError> {
        execute!(self.out, EnterAlternateScreen, Hide)
            .map_err(RsvpError::io("configuring terminal"))?;
        if let Err(e) = enable_raw_mode() {
            let _ = execute!(self.out, Show, LeaveAlternateScreen);
            return Err(RsvpError::io("configuring terminal")(e));
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<(), RsvpError> {
        let mode = disable_raw_mode();
        execute!(self.out, Show, LeaveAlternateScreen)
            .map_err(RsvpError::io("restoring terminal"))?;
        mode.map_err(RsvpError::io("restoring terminal"))
    }

    fn size(&mut self) -> Result<Geometry, RsvpError> {
        let (columns, rows) = terminal::size().map_err(RsvpError::io("querying terminal size"))?;
        Ok(Geometry::new(rows, columns))
    }

    fn present(&mut self, frame: &[u8]) -> Result<(), RsvpError> {
        let mut out = self.out.lock();
        out.write_all(frame)
            .and_then(|()| out.flush())
            .map_err(RsvpError::io("writing frame"))
    }
}
