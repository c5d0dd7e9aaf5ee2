//! Stop signal for the run loop.
//!
//! The loop checks the signal between ticks and sleeps on it, so a stop request
//! interrupts the post-tick sleep instead of waiting it out.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

type Shared = Arc<(Mutex<bool>, Condvar)>;

/// Read side, held by the run loop.
#[derive(Clone, Debug)]
pub struct StopSignal {
    inner: Shared,
}

/// Write side, held by whoever may request shutdown (signal thread, tests).
#[derive(Clone, Debug)]
pub struct StopTrigger {
    inner: Shared,
}

impl StopSignal {
    /// Create a connected signal/trigger pair.
    pub fn new() -> (Self, StopTrigger) {
        let inner: Shared = Arc::new((Mutex::new(false), Condvar::new()));
        (Self { inner: Arc::clone(&inner) }, StopTrigger { inner })
    }

    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait until stopped or `duration` has passed.
    ///
    /// Returns `true` if stopped, `false` on timeout. Spurious wakeups are
    /// absorbed by re-checking the remaining time.
    pub fn wait_timeout(
        &self,
        duration: Duration,
    ) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let start = Instant::now();

        loop {
            if *stopped {
                return true;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            let (guard, _) = cvar
                .wait_timeout(stopped, duration - elapsed)
                .unwrap_or_else(PoisonError::into_inner);
            stopped = guard;
        }
    }
}

impl StopTrigger {
    /// Request shutdown and wake any waiter.
    pub fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_starts_running() {
        let (signal, _trigger) = StopSignal::new();
        assert!(!signal.is_stopped());
    }

    #[test]
    fn test_wait_times_out() {
        let (signal, _trigger) = StopSignal::new();
        let started = Instant::now();
        assert!(!signal.wait_timeout(Duration::from_millis(30)));
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_stop_before_wait_returns_immediately() {
        let (signal, trigger) = StopSignal::new();
        trigger.stop();
        assert!(signal.is_stopped());
        assert!(signal.wait_timeout(Duration::from_secs(10)));
    }

    #[test]
    fn test_stop_wakes_waiter() {
        let (signal, trigger) = StopSignal::new();
        let waiter = thread::spawn(move || {
            let started = Instant::now();
            let stopped = signal.wait_timeout(Duration::from_secs(10));
            (stopped, started.elapsed())
        });
        thread::sleep(Duration::from_millis(20));
        trigger.stop();

        let (stopped, elapsed) = waiter.join().unwrap();
        assert!(stopped);
        assert!(elapsed < Duration::from_secs(5));
    }
}
