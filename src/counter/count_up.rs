//! Count-up state machine
//!
//! Linear interpolation from 0 to `end` over a fixed number of ticks. The
//! per-tick increment is `end / (duration / tick)`; the displayed value after
//! tick `k` of `n` is computed as `end * k / n` in integer arithmetic so the
//! final tick lands exactly on `end` with no float drift.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default count-up duration
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Default tick interval (~60fps)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// A numeric display that counts up from 0 to `end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterTarget {
    /// Final value
    pub end: u64,
    /// Text shown before the number
    #[serde(default)]
    pub prefix: String,
    /// Text shown after the number (e.g. "+", "%", "hrs")
    #[serde(default)]
    pub suffix: String,
    /// Total animation time in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    2000
}

impl CounterTarget {
    /// Counter ending at `end` with the default duration and no affixes
    pub fn new(end: u64) -> Self {
        Self {
            end,
            prefix: String::new(),
            suffix: String::new(),
            duration_ms: default_duration_ms(),
        }
    }

    /// Set the suffix
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the duration
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Total animation time
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Render `value` with prefix and suffix
    pub fn format(&self, value: u64) -> String {
        format!("{}{value}{}", self.prefix, self.suffix)
    }
}

/// Progress of one count-up animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    end: u64,
    total_ticks: u64,
    ticks: u64,
    displayed: u64,
}

impl CountUp {
    /// Start a count-up to `end` lasting `duration` at one tick per `tick_interval`
    ///
    /// A zero `end` is finished on construction.
    pub fn new(end: u64, duration: Duration, tick_interval: Duration) -> Self {
        Self {
            end,
            total_ticks: total_ticks(duration, tick_interval),
            ticks: 0,
            displayed: 0,
        }
    }

    /// Start a count-up for `target`
    pub fn for_target(target: &CounterTarget, tick_interval: Duration) -> Self {
        Self::new(target.end, target.duration(), tick_interval)
    }

    /// Advance one tick and return the value to display
    ///
    /// Ticking a finished count-up keeps returning `end`.
    pub fn tick(&mut self) -> u64 {
        if self.is_finished() {
            return self.displayed;
        }

        self.ticks += 1;
        self.displayed = if self.ticks >= self.total_ticks {
            self.end
        } else {
            let scaled = u128::from(self.end) * u128::from(self.ticks) / u128::from(self.total_ticks);
            // scaled < end because ticks < total_ticks
            u64::try_from(scaled).unwrap_or(self.end).min(self.end)
        };
        self.displayed
    }

    /// Value currently displayed
    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    /// Final value
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Ticks needed to reach `end`
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Whether the display has reached `end`
    pub fn is_finished(&self) -> bool {
        self.displayed >= self.end
    }
}

/// `ceil(duration / tick)`, at least 1
fn total_ticks(duration: Duration, tick_interval: Duration) -> u64 {
    let tick = tick_interval.as_nanos().max(1);
    let ticks = duration.as_nanos().div_ceil(tick).max(1);
    u64::try_from(ticks).unwrap_or(u64::MAX)
}
