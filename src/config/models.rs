//! Configuration data models
//!
//! This module defines the data structures used for application configuration.
//! Every section falls back to its defaults field by field, so older or
//! hand-edited files keep loading.

use crate::counter::CounterTarget;
use crate::reveal::{Direction, RevealConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Lead form delivery
    pub form: FormConfig,
    /// Reveal and count-up timing
    pub animation: AnimationConfig,
    /// Contact details shown on the page
    pub contact: ContactConfig,
    /// Optional JSON file replacing the built-in content catalog
    pub content_path: Option<PathBuf>,
    /// Window state for persistence
    pub window_state: WindowState,
}

/// Lead form delivery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Form collection endpoint receiving the JSON `POST`
    pub endpoint: String,
    /// Request timeout in seconds (1-60)
    pub timeout_secs: u64,
    /// Validate fields before sending
    pub client_validation: bool,
    /// How long the success banner stays, in milliseconds
    pub success_reset_ms: u64,
}

/// Reveal and count-up timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Observe visibility at all; `false` shows everything immediately
    pub reveal_enabled: bool,
    /// Distance an element must be inside the viewport before it reveals (0-200 px)
    pub reveal_margin_px: f32,
    /// Distance an element travels while revealing (0-200 px)
    pub reveal_offset_px: f32,
    /// Reveal transition length in milliseconds
    pub reveal_duration_ms: u64,
    /// Count-up length in milliseconds (100-10000)
    pub count_up_duration_ms: u64,
    /// Count-up tick in milliseconds (1-100)
    pub tick_interval_ms: u64,
}

/// Contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Phone number for `tel:` links; hidden when empty
    pub phone: String,
    /// Address for `mailto:` links; hidden when empty
    pub email: String,
    /// Base URL for site-relative project links
    pub site_url: String,
}

/// Window state for position and size persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formspree.io/f/xrbpjrvn".to_string(),
            timeout_secs: 10,
            client_validation: true,
            success_reset_ms: 5000,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_enabled: true,
            reveal_margin_px: 50.0,
            reveal_offset_px: 40.0,
            reveal_duration_ms: 700,
            count_up_duration_ms: 2000,
            tick_interval_ms: 16,
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 1280,
            height: 860,
        }
    }
}

impl AnimationConfig {
    /// Reveal configuration for an element travelling in `direction` after `delay`
    pub fn reveal(&self, direction: Direction, delay: Duration) -> RevealConfig {
        RevealConfig {
            margin: self.reveal_margin_px,
            offset: self.reveal_offset_px,
            duration: Duration::from_millis(self.reveal_duration_ms),
            direction,
            delay,
            ..RevealConfig::default()
        }
    }

    /// Count-up tick interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// `target` with the configured count-up duration
    pub fn counter(&self, target: &CounterTarget) -> CounterTarget {
        CounterTarget {
            duration_ms: self.count_up_duration_ms,
            ..target.clone()
        }
    }
}

impl AppConfig {
    /// Clamp every value into its supported range
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.form.timeout_secs = self.form.timeout_secs.clamp(1, 60);

        let animation = &mut self.animation;
        animation.reveal_margin_px = clamp_px(animation.reveal_margin_px, 50.0);
        animation.reveal_offset_px = clamp_px(animation.reveal_offset_px, 40.0);
        animation.reveal_duration_ms = animation.reveal_duration_ms.min(5000);
        animation.count_up_duration_ms = animation.count_up_duration_ms.clamp(100, 10_000);
        animation.tick_interval_ms = animation.tick_interval_ms.clamp(1, 100);

        self.window_state.width = self.window_state.width.max(480);
        self.window_state.height = self.window_state.height.max(360);
        self
    }
}

fn clamp_px(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 200.0)
    } else {
        fallback
    }
}
