//! Session wiring - from a text source to a finished presentation

use std::sync::mpsc::{self, Receiver};

use tracing::info;

use crate::engine::config::ReaderConfig;
use crate::engine::error::RsvpError;
use crate::engine::presenter::{Outcome, Presenter};
use crate::engine::signals::{PendingSignals, ResizeWatcher, Wake};
use crate::engine::timer::{Pacer, PacingTimer};
use crate::input::{tty, TextSource};
use crate::reading::{tokenize, ReadingState};
use crate::ui::terminal::{Console, TtyConsole};
use crate::ui::terminal_guard::TerminalGuard;

/// Loads `source` and presents it on the controlling terminal.
///
/// Loading and tokenizing happen before the terminal is touched, so a
/// failure there leaves no screen state behind.
pub fn run(source: &TextSource, config: &ReaderConfig) -> Result<Outcome, RsvpError> {
    let text = source.load()?;
    let tokens = tokenize(&text, config.emphasis)?;
    info!(bytes = text.len(), tokens = tokens.len(), ?source, "text loaded");

    let terminal = tty::open_tty()?;
    let (wake_tx, wake_rx) = mpsc::channel();
    let signals = PendingSignals::new();
    let _resize = ResizeWatcher::spawn(signals.clone(), wake_tx.clone())?;
    let timer = PacingTimer::spawn(signals.clone(), wake_tx.clone());

    present(
        TtyConsole::new(),
        ReadingState::new(tokens, config.rate),
        timer,
        signals,
        wake_rx,
        move || tty::spawn_reader(terminal, wake_tx),
    )
}

/// Enters `console`, runs the presentation and leaves the console again on
/// every path. `start_input` runs once the console is entered, so keys are
/// only read in the session's terminal mode.
pub fn present<C, P>(
    console: C,
    state: ReadingState<'_>,
    pacer: P,
    signals: PendingSignals,
    wakes: Receiver<Wake>,
    start_input: impl FnOnce(),
) -> Result<Outcome, RsvpError>
where
    C: Console,
    P: Pacer,
{
    let mut guard = TerminalGuard::new(console)?;
    start_input();

    let outcome = Presenter::new(state, guard.console(), pacer, signals, wakes).run()?;

    guard.finish()?;
    Ok(outcome)
}
