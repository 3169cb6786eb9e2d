//! Reveal controller for a set of page elements

use crate::reveal::geometry::Rect;
use crate::reveal::target::{RevealConfig, RevealTarget};
use tracing::{debug, info};

/// Observes many elements and reports which ones become visible
///
/// Targets are addressed by index, in the order they were added. When
/// observation is unavailable the first `update` (or `reveal_all`) reveals
/// every target and reports all of them, so callers run their reveal hooks.
#[derive(Debug, Clone, Default)]
pub struct RevealController {
    targets: Vec<RevealTarget>,
    observation_available: bool,
}

impl RevealController {
    /// Create a controller; `observation_available = false` fails open
    pub fn new(observation_available: bool) -> Self {
        if !observation_available {
            info!("Viewport observation unavailable; all content will be shown immediately");
        }
        Self {
            targets: Vec::new(),
            observation_available,
        }
    }

    /// Add a target and return its index
    pub fn add(&mut self, config: RevealConfig) -> usize {
        self.targets.push(RevealTarget::new(config));
        self.targets.len() - 1
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no target was added
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target at `index`
    pub fn get(&self, index: usize) -> Option<&RevealTarget> {
        self.targets.get(index)
    }

    /// Whether the target at `index` is shown (unknown indices are shown)
    pub fn is_revealed(&self, index: usize) -> bool {
        self.targets.get(index).is_none_or(RevealTarget::is_revealed)
    }

    /// Reveal flags for every target, in index order
    pub fn revealed_flags(&self) -> Vec<bool> {
        self.targets.iter().map(RevealTarget::is_revealed).collect()
    }

    /// Feed the latest layout and return the indices revealed by this call
    ///
    /// `bounds[i]` belongs to target `i`; a missing or `None` entry reveals the target.
    /// Without observation every pending target is revealed.
    pub fn update(&mut self, bounds: &[Option<Rect>], viewport: &Rect) -> Vec<usize> {
        if !self.observation_available {
            return self.reveal_all();
        }

        let fired: Vec<usize> = self
            .targets
            .iter_mut()
            .enumerate()
            .filter_map(|(index, target)| {
                let element = bounds.get(index).copied().flatten();
                target.observe(element.as_ref(), viewport).then_some(index)
            })
            .collect();

        if !fired.is_empty() {
            debug!(
                "Revealed {:?} at viewport top {:.0}px",
                fired, viewport.top
            );
        }
        fired
    }

    /// Reveal everything not yet shown and return the indices that changed
    pub fn reveal_all(&mut self) -> Vec<usize> {
        self.targets
            .iter_mut()
            .enumerate()
            .filter_map(|(index, target)| target.force_reveal().then_some(index))
            .collect()
    }
}
