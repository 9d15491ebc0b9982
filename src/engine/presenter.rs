//! Presentation engine - the reading session state machine
//!
//! Each turn of the loop blocks on the wake channel, turns what arrived into
//! a [`Command`] and applies it:
//!
//! | phase   | command       | effect                                          |
//! |---------|---------------|-------------------------------------------------|
//! | Running | tick          | show next word, re-arm; `Done` when exhausted   |
//! | any     | `+` / `-`     | rate ± 10 (min 1); re-arm when running          |
//! | Running | `p`           | `Paused`, timer disarmed                        |
//! | Paused  | `p`           | `Running`, timer armed                          |
//! | any     | forward arrow | show next word; `Done` when exhausted           |
//! | any     | back arrow    | cursor − 2 (min 0), show next word              |
//! | any     | `q` / EOF     | `Done` at once                                  |
//!
//! A tick only counts when the timer flag was actually raised; any other
//! interruption (a resize, say) is swallowed and the wait resumes.

use std::sync::mpsc::Receiver;

use tracing::{debug, info, warn};

use super::error::RsvpError;
use super::signals::{PendingSignals, Wake};
use super::timer::Pacer;
use crate::input::{Command, KeyDecoder};
use crate::reading::ReadingState;
use crate::ui::frame::{render_frame, Geometry};
use crate::ui::terminal::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Done,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every word was shown.
    Finished,
    /// `q` was pressed or the terminal reached end of input.
    Quit,
}

pub struct Presenter<'a, 'c, C: Console, P: Pacer> {
    state: ReadingState<'a>,
    console: &'c mut C,
    pacer: P,
    signals: PendingSignals,
    wakes: Receiver<Wake>,
    keys: KeyDecoder,
    geometry: Geometry,
    phase: Phase,
    frames: usize,
}

impl<'a, 'c, C: Console, P: Pacer> Presenter<'a, 'c, C, P> {
    pub fn new(
        state: ReadingState<'a>,
        console: &'c mut C,
        pacer: P,
        signals: PendingSignals,
        wakes: Receiver<Wake>,
    ) -> Self {
        let phase = if state.paused {
            Phase::Paused
        } else {
            Phase::Running
        };
        Self {
            state,
            console,
            pacer,
            signals,
            wakes,
            keys: KeyDecoder::new(),
            geometry: Geometry::default(),
            phase,
            frames: 0,
        }
    }

    pub fn run(&mut self) -> Result<Outcome, RsvpError> {
        info!(
            tokens = self.state.tokens.len(),
            rate = self.state.rate,
            "presentation started"
        );

        let outcome = self.present()?;
        self.phase = Phase::Done;
        self.pacer.disarm();

        info!(
            ?outcome,
            cursor = self.state.cursor,
            frames = self.frames,
            "presentation ended"
        );
        Ok(outcome)
    }

    fn present(&mut self) -> Result<Outcome, RsvpError> {
        if !self.show_next()? {
            return self.drain_last();
        }

        loop {
            let Some(command) = self.next_command()? else {
                return Ok(Outcome::Quit);
            };

            let shown = match command {
                Command::Quit => return Ok(Outcome::Quit),
                Command::SpeedUp => {
                    self.state.speed_up();
                    self.rate_changed();
                    continue;
                }
                Command::SlowDown => {
                    self.state.slow_down();
                    self.rate_changed();
                    continue;
                }
                Command::TogglePause => {
                    self.toggle_pause();
                    continue;
                }
                Command::StepForward => self.show_next()?,
                Command::StepBack => {
                    self.state.step_back();
                    self.show_next()?
                }
                Command::Tick => {
                    if !self.signals.take_timer() || self.phase != Phase::Running {
                        continue;
                    }
                    self.show_next()?
                }
                Command::Ignored => continue,
            };

            if !shown {
                return self.drain_last();
            }
        }
    }

    /// Blocks for the next wake. `None` means the terminal has no more input.
    fn next_command(&mut self) -> Result<Option<Command>, RsvpError> {
        match self.wakes.recv() {
            Ok(Wake::Byte(byte)) => Ok(Some(self.keys.feed(byte))),
            Ok(Wake::Interrupted) => Ok(Some(Command::Tick)),
            Ok(Wake::Eof) | Err(_) => Ok(None),
            Ok(Wake::Failed(e)) => Err(RsvpError::io("reading terminal")(e)),
        }
    }

    /// Presents the word under the cursor and moves past it.
    /// Returns `false` when there is nothing left to show.
    fn show_next(&mut self) -> Result<bool, RsvpError> {
        let Some(token) = self.state.advance() else {
            return Ok(false);
        };

        self.refresh_geometry();
        let frame =
            render_frame(&token, self.geometry).map_err(RsvpError::io("writing frame"))?;
        self.console.present(&frame)?;
        self.frames += 1;

        if self.phase == Phase::Running {
            self.arm();
        }
        Ok(true)
    }

    fn refresh_geometry(&mut self) {
        if !self.signals.take_resize() {
            return;
        }
        match self.console.size() {
            Ok(geometry) => {
                debug!(
                    rows = geometry.rows,
                    columns = geometry.columns,
                    "terminal size refreshed"
                );
                self.geometry = geometry;
            }
            Err(e) => warn!(error = %e, "keeping last known terminal size"),
        }
    }

    // The pacer drops any expiry latched for the previous word.
    fn arm(&mut self) {
        self.pacer.arm(self.state.rate);
    }

    fn rate_changed(&mut self) {
        debug!(rate = self.state.rate, "rate changed");
        if self.phase == Phase::Running {
            self.arm();
        }
    }

    fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        if self.state.paused {
            self.phase = Phase::Paused;
            self.pacer.disarm();
        } else {
            self.phase = Phase::Running;
            self.arm();
        }
        debug!(paused = self.state.paused, "pause toggled");
    }

    /// Keeps the last word up for one more dwell time (or until a key
    /// arrives) and discards whatever ended the wait.
    fn drain_last(&mut self) -> Result<Outcome, RsvpError> {
        if self.phase == Phase::Running {
            self.arm();
        }
        let _ = self.wakes.recv();
        Ok(Outcome::Finished)
    }
}

#[cfg(test)]
impl<'a, 'c, C: Console, P: Pacer> Presenter<'a, 'c, C, P> {
    fn state(&self) -> &ReadingState<'a> {
        &self.state
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn pacer(&self) -> &P {
        &self.pacer
    }
}
