//! Key decoding for the reading session
//!
//! Single bytes read from the controlling terminal map to engine commands:
//! - `+` / `-` → change the rate by ten words per minute
//! - `p` → pause or resume
//! - `q` → quit
//! - up/left arrow → step back, down/right arrow → step forward
//! - byte 0 → timer tick
//!
//! Arrow keys arrive as `ESC [ <final>` (or `ESC O <final>` in application
//! cursor mode); the decoder swallows the introducer and acts on the final byte.

const ESC: u8 = 0x1b;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SpeedUp,
    SlowDown,
    TogglePause,
    Quit,
    StepForward,
    StepBack,
    Tick,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Pending {
    #[default]
    Ground,
    Escape,
    Introducer,
}

#[derive(Debug, Default)]
pub struct KeyDecoder {
    pending: Pending,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, byte: u8) -> Command {
        match self.pending {
            Pending::Ground => self.ground(byte),
            Pending::Escape => match byte {
                b'[' | b'O' => {
                    self.pending = Pending::Introducer;
                    Command::Ignored
                }
                _ => {
                    self.pending = Pending::Ground;
                    self.ground(byte)
                }
            },
            Pending::Introducer => {
                self.pending = Pending::Ground;
                match byte {
                    b'A' | b'D' => Command::StepBack,
                    b'B' | b'C' => Command::StepForward,
                    _ => Command::Ignored,
                }
            }
        }
    }

    fn ground(&mut self, byte: u8) -> Command {
        match byte {
            b'+' => Command::SpeedUp,
            b'-' => Command::SlowDown,
            b'p' => Command::TogglePause,
            b'q' => Command::Quit,
            0 => Command::Tick,
            ESC => {
                self.pending = Pending::Escape;
                Command::Ignored
            }
            _ => Command::Ignored,
        }
    }
}
