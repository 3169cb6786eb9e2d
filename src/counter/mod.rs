//! Count-up numeric animation
//!
//! Animates a displayed integer from 0 to an end value once its container
//! becomes visible, simulating a live counter ("15+ Projects", "98% Success").
//!
//! # Architecture
//!
//! - `CounterTarget`: end value, prefix/suffix and duration of one counter
//! - `CountUp`: pure per-tick state machine, clamped so it never overshoots
//! - `CountUpAnimator`: RAII timer driving a `CountUp` at ~60fps
//!
//! # Timing Contract
//!
//! With the default 2000ms duration and 16ms tick the display advances
//! 125 times, is non-decreasing, and lands on exactly `end` on the last tick.

pub mod animator;
pub mod count_up;

pub use animator::CountUpAnimator;
pub use count_up::{CountUp, CounterTarget, DEFAULT_DURATION, DEFAULT_TICK_INTERVAL};
