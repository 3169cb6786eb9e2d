//! Timer-driven count-up animation
//!
//! A [`CountUpAnimator`] owns one repeating timer (a worker thread sleeping
//! one tick interval between updates) for the lifetime of the animation. The
//! timer is released when the count reaches its end, when [`CountUpAnimator::cancel`]
//! is called, or when the animator is dropped. Once `cancel` or `drop` returns,
//! the value callback is never invoked again.

use crate::counter::{CountUp, CounterTarget};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, warn};

/// Handle to a running count-up timer
pub struct CountUpAnimator {
    /// Cleared to stop the timer; also cleared by the timer itself on completion
    running: Arc<AtomicBool>,
    /// Timer thread handle (None when no timer was scheduled or after it was joined)
    handle: Option<JoinHandle<()>>,
}

impl CountUpAnimator {
    /// Start counting `target` up, reporting each displayed value to `on_value`
    ///
    /// `on_value` first receives 0 on the calling thread, then each tick's value
    /// from the timer thread. A target ending at 0 reports 0 and schedules no timer.
    pub fn start<F>(target: &CounterTarget, tick_interval: Duration, mut on_value: F) -> Self
    where
        F: FnMut(u64) + Send + 'static,
    {
        let mut count_up = CountUp::for_target(target, tick_interval);
        on_value(count_up.displayed());

        if count_up.is_finished() {
            debug!("Count-up to {} needs no timer", target.end);
            return Self {
                running: Arc::new(AtomicBool::new(false)),
                handle: None,
            };
        }

        let running = Arc::new(AtomicBool::new(true));
        let thread_running = Arc::clone(&running);
        let end = target.end;

        let spawned = std::thread::Builder::new()
            .name("count-up".to_string())
            .spawn(move || {
                debug!("Count-up timer started (end={})", end);
                while thread_running.load(Ordering::Acquire) {
                    std::thread::sleep(tick_interval);
                    // Re-check after sleeping so a cancelled timer never reports again
                    if !thread_running.load(Ordering::Acquire) {
                        break;
                    }
                    on_value(count_up.tick());
                    if count_up.is_finished() {
                        break;
                    }
                }
                thread_running.store(false, Ordering::Release);
                debug!("Count-up timer stopped at {}", count_up.displayed());
            });

        match spawned {
            Ok(handle) => Self {
                running,
                handle: Some(handle),
            },
            Err(e) => {
                // Fail open: without a timer the number simply stays at 0
                warn!("Failed to spawn count-up timer: {}", e);
                running.store(false, Ordering::Release);
                Self {
                    running,
                    handle: None,
                }
            }
        }
    }

    /// Whether the timer is still ticking
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Stop the timer and wait for it to exit
    pub fn cancel(mut self) {
        self.stop();
    }

    /// Block until the count-up has reached its end (or was cancelled)
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("Count-up timer thread panicked");
        }
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            // The timer thread never owns its own animator, but guard against
            // a callback dropping it from inside the timer.
            if handle.thread().id() == std::thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                warn!("Count-up timer thread panicked");
            }
        }
    }
}

impl Drop for CountUpAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}
