//! Sticky flags shared with the asynchronous notification sources.
//!
//! The pacing timer and the resize watcher run on their own threads. They
//! only raise a flag here and then post [`Wake::Interrupted`] so the engine's
//! blocking wait returns; all real work happens on the engine thread once it
//! consumes the flag.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;

use signal_hook::consts::signal::SIGWINCH;
use signal_hook::iterator::{Handle, Signals};

use super::error::RsvpError;

/// Something that ended the engine's blocking wait.
#[derive(Debug)]
pub enum Wake {
    /// One byte read from the controlling terminal.
    Byte(u8),
    /// A notification source raised its flag. Read as byte 0.
    Interrupted,
    /// The controlling terminal reached end of input.
    Eof,
    /// Reading the controlling terminal failed.
    Failed(io::Error),
}

#[derive(Debug, Clone)]
pub struct PendingSignals {
    resize: Arc<AtomicBool>,
    timer: Arc<AtomicBool>,
}

impl PendingSignals {
    /// Resize starts raised so the first frame queries the geometry.
    pub fn new() -> Self {
        Self {
            resize: Arc::new(AtomicBool::new(true)),
            timer: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn raise_resize(&self) {
        self.resize.store(true, Ordering::SeqCst);
    }

    pub fn raise_timer(&self) {
        self.timer.store(true, Ordering::SeqCst);
    }

    /// Clears the resize flag, returning whether it was set.
    pub fn take_resize(&self) -> bool {
        self.resize.swap(false, Ordering::SeqCst)
    }

    /// Clears the timer flag, returning whether it was set.
    pub fn take_timer(&self) -> bool {
        self.timer.swap(false, Ordering::SeqCst)
    }
}

impl Default for PendingSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Watches SIGWINCH on a dedicated thread. Stopped and joined on drop.
pub struct ResizeWatcher {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl ResizeWatcher {
    pub fn spawn(signals: PendingSignals, wake: Sender<Wake>) -> Result<Self, RsvpError> {
        let mut winch =
            Signals::new([SIGWINCH]).map_err(RsvpError::io("installing resize handler"))?;
        let handle = winch.handle();
        let thread = std::thread::spawn(move || {
            for _ in winch.forever() {
                signals.raise_resize();
                if wake.send(Wake::Interrupted).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
