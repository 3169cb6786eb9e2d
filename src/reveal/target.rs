//! A single reveal-on-visibility element

use crate::reveal::easing::REVEAL_EASING;
use crate::reveal::geometry::{Rect, intersection_ratio};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Direction an element travels while it is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Rises from below
    #[default]
    Up,
    /// Drops from above
    Down,
    /// Slides in from the right, travelling left
    Left,
    /// Slides in from the left, travelling right
    Right,
}

impl Direction {
    /// Starting `(dx, dy)` displacement for an offset of `distance`
    pub fn hidden_offset(self, distance: f32) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (distance, 0.0),
            Direction::Right => (-distance, 0.0),
        }
    }
}

/// How and when an element is revealed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// The element must be this far inside the viewport (px)
    pub margin: f32,
    /// Visible fraction that must be exceeded; 0 means any pixel
    pub threshold: f32,
    /// Travel direction
    pub direction: Direction,
    /// Distance travelled (px)
    pub offset: f32,
    /// Wait between trigger and motion start
    pub delay: Duration,
    /// Length of the transition
    pub duration: Duration,
    /// Never return to hidden once triggered
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin: 50.0,
            threshold: 0.0,
            direction: Direction::Up,
            offset: 40.0,
            delay: Duration::ZERO,
            duration: Duration::from_millis(700),
            once: true,
        }
    }
}

impl RevealConfig {
    /// Same config with another direction
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Same config with another delay
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Reveal lifecycle of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Hidden, waiting to become visible
    #[default]
    Pending,
    /// Visible (or transitioning to visible)
    Triggered,
}

/// Opacity and displacement of an element at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// 0 = invisible, 1 = opaque
    pub opacity: f32,
    /// Horizontal displacement (px)
    pub dx: f32,
    /// Vertical displacement (px)
    pub dy: f32,
}

impl VisualState {
    /// Fully shown, at rest
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
    };
}

/// One element observed for visibility
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    config: RevealConfig,
    state: RevealState,
}

impl RevealTarget {
    /// A hidden target
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Pending,
        }
    }

    /// Configuration
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Current state
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Whether the element is shown
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Triggered
    }

    /// Feed the latest geometry; returns `true` only on the call that reveals the element
    ///
    /// `None` bounds mean the element could not be measured, which reveals it.
    pub fn observe(&mut self, element: Option<&Rect>, viewport: &Rect) -> bool {
        let visible = match element {
            Some(bounds) => self.is_in_view(bounds, viewport),
            None => true,
        };

        match (self.state, visible) {
            (RevealState::Pending, true) => {
                self.state = RevealState::Triggered;
                true
            }
            (RevealState::Triggered, false) if !self.config.once => {
                debug!("Reveal target left the viewport; hiding again");
                self.state = RevealState::Pending;
                false
            }
            _ => false,
        }
    }

    /// Reveal without observing (observation unavailable or disabled)
    pub fn force_reveal(&mut self) -> bool {
        let fired = self.state == RevealState::Pending;
        self.state = RevealState::Triggered;
        fired
    }

    /// Visual state `elapsed` after the trigger; hidden while pending
    pub fn visual_at(&self, elapsed: Duration) -> VisualState {
        let (hidden_dx, hidden_dy) = self.config.direction.hidden_offset(self.config.offset);
        if self.state == RevealState::Pending {
            return VisualState {
                opacity: 0.0,
                dx: hidden_dx,
                dy: hidden_dy,
            };
        }

        let moving = elapsed.saturating_sub(self.config.delay);
        let linear = if self.config.duration.is_zero() {
            1.0
        } else {
            (moving.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
        };
        let progress = REVEAL_EASING.ease(linear);
        let remaining = 1.0 - progress;

        VisualState {
            opacity: progress,
            dx: hidden_dx * remaining,
            dy: hidden_dy * remaining,
        }
    }

    /// Whether the transition has finished `elapsed` after the trigger
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        self.is_revealed() && elapsed >= self.config.delay + self.config.duration
    }

    fn is_in_view(&self, element: &Rect, viewport: &Rect) -> bool {
        let ratio = intersection_ratio(element, viewport, self.config.margin);
        if self.config.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.config.threshold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        top: 0.0,
        height: 800.0,
    };

    fn below_fold() -> Rect {
        Rect::new(1200.0, 300.0)
    }

    fn scrolled_to(y: f32) -> Rect {
        Rect::new(y, VIEWPORT.height)
    }

    #[test]
    fn test_fires_once_when_scrolled_into_view() {
        let mut target = RevealTarget::new(RevealConfig::default());
        assert!(!target.observe(Some(&below_fold()), &VIEWPORT));
        assert!(target.observe(Some(&below_fold()), &scrolled_to(800.0)));
        assert!(!target.observe(Some(&below_fold()), &scrolled_to(900.0)));
        assert!(target.is_revealed());
    }

    #[test]
    fn test_fire_once_ignores_leave_and_reenter() {
        let mut target = RevealTarget::new(RevealConfig::default());
        let mut fired = 0;
        for y in [800.0, 0.0, 800.0, 3000.0, 800.0] {
            if target.observe(Some(&below_fold()), &scrolled_to(y)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(target.state(), RevealState::Triggered);
    }

    #[test]
    fn test_repeatable_target_hides_again() {
        let config = RevealConfig {
            once: false,
            ..RevealConfig::default()
        };
        let mut target = RevealTarget::new(config);
        assert!(target.observe(Some(&below_fold()), &scrolled_to(800.0)));
        assert!(!target.observe(Some(&below_fold()), &VIEWPORT));
        assert_eq!(target.state(), RevealState::Pending);
        assert!(target.observe(Some(&below_fold()), &scrolled_to(800.0)));
    }

    #[test]
    fn test_missing_element_fails_open() {
        let mut target = RevealTarget::new(RevealConfig::default());
        assert!(target.observe(None, &VIEWPORT));
        assert!(target.is_revealed());
    }

    #[test]
    fn test_threshold_requires_fraction() {
        let config = RevealConfig {
            margin: 0.0,
            threshold: 0.5,
            ..RevealConfig::default()
        };
        let mut target = RevealTarget::new(config);
        // 100 of 300px visible
        assert!(!target.observe(Some(&below_fold()), &scrolled_to(500.0)));
        // 200 of 300px visible
        assert!(target.observe(Some(&below_fold()), &scrolled_to(600.0)));
    }

    #[test]
    fn test_force_reveal_reports_first_time_only() {
        let mut target = RevealTarget::new(RevealConfig::default());
        assert!(target.force_reveal());
        assert!(!target.force_reveal());
    }

    #[test]
    fn test_visual_pending_is_hidden_and_offset() {
        let target = RevealTarget::new(RevealConfig::default().with_direction(Direction::Right));
        let visual = target.visual_at(Duration::from_secs(5));
        assert!(visual.opacity.abs() < f32::EPSILON);
        assert!((visual.dx + 40.0).abs() < f32::EPSILON);
        assert!(visual.dy.abs() < f32::EPSILON);
    }

    #[test]
    fn test_visual_respects_delay_and_settles() {
        let config = RevealConfig::default().with_delay(Duration::from_millis(200));
        let mut target = RevealTarget::new(config);
        target.force_reveal();

        let waiting = target.visual_at(Duration::from_millis(100));
        assert!(waiting.opacity.abs() < f32::EPSILON);
        assert!((waiting.dy - 40.0).abs() < f32::EPSILON);

        let midway = target.visual_at(Duration::from_millis(550));
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);
        assert!(midway.dy > 0.0 && midway.dy < 40.0);

        assert!(!target.is_settled(Duration::from_millis(850)));
        assert!(target.is_settled(Duration::from_millis(900)));
        assert_eq!(target.visual_at(Duration::from_millis(900)), VisualState::VISIBLE);
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Up.hidden_offset(40.0), (0.0, 40.0));
        assert_eq!(Direction::Down.hidden_offset(40.0), (0.0, -40.0));
        assert_eq!(Direction::Left.hidden_offset(40.0), (40.0, 0.0));
        assert_eq!(Direction::Right.hidden_offset(40.0), (-40.0, 0.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a fire-once target reveals at most once for any scroll history
            #[test]
            fn reveals_at_most_once(
                top in 0.0f32..5000.0,
                height in 0.0f32..1000.0,
                scrolls in prop::collection::vec(0.0f32..6000.0, 0..50)
            ) {
                let element = Rect::new(top, height);
                let mut target = RevealTarget::new(RevealConfig::default());
                let mut fired = 0;
                for y in scrolls {
                    if target.observe(Some(&element), &scrolled_to(y)) {
                        fired += 1;
                    }
                    if fired > 0 {
                        prop_assert!(target.is_revealed());
                    }
                }
                prop_assert!(fired <= 1);
            }

            /// Property: opacity never decreases as the transition runs
            #[test]
            fn opacity_non_decreasing(steps in 2usize..60) {
                let mut target = RevealTarget::new(RevealConfig::default());
                target.force_reveal();
                let mut previous = 0.0f32;
                for step in 0..=steps {
                    let elapsed = Duration::from_millis((step * 800 / steps) as u64);
                    let opacity = target.visual_at(elapsed).opacity;
                    prop_assert!(opacity + 1e-5 >= previous);
                    previous = opacity;
                }
            }
        }
    }
}
