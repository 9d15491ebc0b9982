//! `rq` - a rapid serial visual presentation reader for the terminal.
//!
//! The text is loaded whole, split on whitespace, and flashed one word at a
//! time in the middle of the screen. `+`/`-` change the pace, `p` pauses,
//! the arrow keys step, `q` quits.

pub mod app;
pub mod cli;
pub mod engine;
pub mod input;
pub mod logging;
pub mod reading;
pub mod ui;

pub use engine::{Outcome, ReaderConfig, RsvpError};
