//! Pacing timer - one-shot countdown driving automatic advance

use std::sync::mpsc::Sender;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Instant;

use super::signals::{PendingSignals, Wake};
use crate::reading::dwell_time;

#[derive(Default)]
struct Slot {
    deadline: Option<Instant>,
    shutdown: bool,
}

struct Shared {
    slot: Mutex<Slot>,
    changed: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Slot> {
        // The slot holds plain data; a poisoned lock is still consistent.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Source of the per-word countdown.
pub trait Pacer {
    /// Starts a countdown of one dwell time at `rate`, replacing any in flight.
    /// An expiry already latched in the timer flag is discarded.
    fn arm(&mut self, rate: u32);

    fn disarm(&mut self);
}

/// Fires once per arming: when the dwell time elapses the worker raises the
/// timer flag and posts [`Wake::Interrupted`].
pub struct PacingTimer {
    shared: Arc<Shared>,
    signals: PendingSignals,
    worker: Option<JoinHandle<()>>,
}

impl PacingTimer {
    pub fn spawn(signals: PendingSignals, wake: Sender<Wake>) -> Self {
        let shared = Arc::new(Shared {
            slot: Mutex::new(Slot::default()),
            changed: Condvar::new(),
        });
        let worker = {
            let shared = Arc::clone(&shared);
            let signals = signals.clone();
            std::thread::spawn(move || countdown(&shared, &signals, &wake))
        };

        Self {
            shared,
            signals,
            worker: Some(worker),
        }
    }

    /// Starts the countdown for one word at `rate` from now, replacing any
    /// countdown in flight.
    ///
    /// The worker raises the flag only while holding the slot lock, so
    /// clearing it here under the same lock drops exactly the expiries of
    /// earlier armings and never one belonging to this countdown.
    pub fn arm(&self, rate: u32) {
        let mut slot = self.shared.lock();
        self.signals.take_timer();
        slot.deadline = Some(Instant::now() + dwell_time(rate));
        self.shared.changed.notify_one();
    }

    /// Stops the countdown. A firing already latched in the flags stays latched.
    pub fn disarm(&self) {
        let mut slot = self.shared.lock();
        slot.deadline = None;
        self.shared.changed.notify_one();
    }
}

#[cfg(test)]
impl PacingTimer {
    fn is_armed(&self) -> bool {
        self.shared.lock().deadline.is_some()
    }
}

impl Pacer for PacingTimer {
    fn arm(&mut self, rate: u32) {
        PacingTimer::arm(self, rate);
    }

    fn disarm(&mut self) {
        PacingTimer::disarm(self);
    }
}

impl Drop for PacingTimer {
    fn drop(&mut self) {
        {
            let mut slot = self.shared.lock();
            slot.shutdown = true;
            self.shared.changed.notify_one();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn countdown(shared: &Shared, signals: &PendingSignals, wake: &Sender<Wake>) {
    let mut slot = shared.lock();
    loop {
        if slot.shutdown {
            return;
        }
        match slot.deadline {
            None => {
                slot = shared
                    .changed
                    .wait(slot)
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
            }
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    slot.deadline = None;
                    signals.raise_timer();
                    if wake.send(Wake::Interrupted).is_err() {
                        return;
                    }
                } else {
                    slot = shared
                        .changed
                        .wait_timeout(slot, deadline - now)
                        .map(|(slot, _)| slot)
                        .unwrap_or_else(|poisoned| poisoned.into_inner().0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_fires_once_after_dwell_time() {
        let (tx, rx) = mpsc::channel();
        let signals = PendingSignals::new();
        let timer = PacingTimer::spawn(signals.clone(), tx);

        // 6000 wpm = 10ms per word
        timer.arm(6000);
        let wake = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(wake, Wake::Interrupted));
        assert!(signals.take_timer());
        assert!(!timer.is_armed());

        // one-shot: nothing more until re-armed
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn test_disarm_prevents_firing() {
        let (tx, rx) = mpsc::channel();
        let signals = PendingSignals::new();
        let timer = PacingTimer::spawn(signals.clone(), tx);

        timer.arm(3000);
        timer.disarm();
        timer.disarm();
        assert!(!timer.is_armed());
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
        assert!(!signals.take_timer());
    }

    #[test]
    fn test_rearm_restarts_countdown() {
        let (tx, rx) = mpsc::channel();
        let signals = PendingSignals::new();
        let timer = PacingTimer::spawn(signals.clone(), tx);

        // 1 wpm would take a minute; re-arming at a fast rate replaces it
        timer.arm(1);
        timer.arm(6000);
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        assert!(signals.take_timer());
    }

    #[test]
    fn test_rearm_discards_latched_expiry() {
        let (tx, rx) = mpsc::channel();
        let signals = PendingSignals::new();
        let timer = PacingTimer::spawn(signals.clone(), tx);

        timer.arm(6000);
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());

        // the expiry belongs to the previous word; the next one starts clean
        timer.arm(1);
        assert!(!signals.take_timer());
        assert!(timer.is_armed());
    }

    #[test]
    fn test_rearm_clears_expiry_raised_just_before() {
        let (tx, _rx) = mpsc::channel();
        let signals = PendingSignals::new();
        let timer = PacingTimer::spawn(signals.clone(), tx);

        signals.raise_timer();
        timer.arm(1);
        assert!(!signals.take_timer());
    }

    #[test]
    fn test_drop_joins_idle_worker() {
        let (tx, _rx) = mpsc::channel();
        let timer = PacingTimer::spawn(PendingSignals::new(), tx);
        timer.arm(1);
        drop(timer);
    }
}
