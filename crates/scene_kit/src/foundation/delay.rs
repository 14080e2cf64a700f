//! Delayed callbacks
//!
//! `run_after` sleeps on a background thread and then invokes a callback,
//! unless the owning session has shut down in the meantime. The session is
//! represented by a [`RunGate`] that callers close when the game stops.

use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Shared open/closed flag consulted before a delayed callback fires.
#[derive(Debug, Clone)]
pub struct RunGate {
    open: Arc<AtomicBool>,
}

impl Default for RunGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RunGate {
    /// Create an open gate
    pub fn new() -> Self {
        Self {
            open: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Close the gate; pending callbacks will be skipped
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    /// Re-open the gate
    pub fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    /// Whether callbacks may currently run
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

/// Invoke `callback` on a background thread after `delay`.
///
/// The join handle yields `true` if the callback ran and `false` if the gate
/// was closed when the delay elapsed.
pub fn run_after<F>(delay: Duration, gate: &RunGate, callback: F) -> JoinHandle<bool>
where
    F: FnOnce() + Send + 'static,
{
    let gate = gate.clone();
    thread::spawn(move || {
        thread::sleep(delay);
        if !gate.is_open() {
            warn!("Run gate closed after {delay:?}, callback will not be invoked");
            return false;
        }
        callback();
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_callback_runs_when_gate_open() {
        let gate = RunGate::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let handle = run_after(Duration::from_millis(5), &gate, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(handle.join().unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_skipped_when_gate_closed() {
        let gate = RunGate::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        gate.close();
        let handle = run_after(Duration::from_millis(1), &gate, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!handle.join().unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_gate_clones_share_state() {
        let gate = RunGate::default();
        let other = gate.clone();
        other.close();
        assert!(!gate.is_open());
        gate.open();
        assert!(other.is_open());
    }
}
