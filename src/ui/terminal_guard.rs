use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use std::io;
use std::sync::Once;

use super::terminal::Console;
use crate::engine::error::RsvpError;

static PANIC_HOOK_SET: Once = Once::new();

/// Owns a console that has been entered and leaves it on every exit path.
///
/// `finish` leaves explicitly and reports failures; dropping the guard
/// (early return, `?`, unwinding) leaves best-effort.
pub struct TerminalGuard<C: Console> {
    console: C,
    entered: bool,
}

impl<C: Console> TerminalGuard<C> {
    pub fn new(mut console: C) -> Result<Self, RsvpError> {
        console.enter()?;

        set_panic_hook();

        Ok(TerminalGuard {
            console,
            entered: true,
        })
    }

    pub fn console(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn finish(mut self) -> Result<(), RsvpError> {
        self.entered = false;
        self.console.leave()
    }
}

impl<C: Console> Drop for TerminalGuard<C> {
    fn drop(&mut self) {
        if self.entered {
            let _ = self.console.leave();
        }
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
            previous(panic_info);
        }));
    });
}
