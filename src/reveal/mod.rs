//! Reveal-on-visibility
//!
//! Transitions page elements from a hidden visual state to a visible one the
//! first time they scroll into view.
//!
//! # Overview
//!
//! - `Rect` / `intersection_ratio`: vertical viewport intersection with an inset margin
//! - `RevealTarget`: tagged `{Pending, Triggered}` state for one element
//! - `RevealController`: indexed set of targets fed with layout on every scroll
//! - `CubicBezier`: easing used to interpolate opacity and offset
//!
//! # Visibility Rule
//!
//! The viewport is shrunk by the target's margin (50px by default) on both
//! edges. A target with threshold 0 fires as soon as any of it overlaps the
//! shrunk viewport; otherwise the visible fraction must reach the threshold.
//!
//! # Failing Open
//!
//! Content is never blocked: an element that cannot be measured, or a
//! controller created without viewport observation, is shown immediately.

pub mod controller;
pub mod easing;
pub mod geometry;
pub mod target;

pub use controller::RevealController;
pub use easing::{CubicBezier, REVEAL_EASING};
pub use geometry::{Rect, intersection_ratio};
pub use target::{Direction, RevealConfig, RevealState, RevealTarget, VisualState};
