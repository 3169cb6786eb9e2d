//! Navigation state
//!
//! Scroll position derived flags for the header: whether the page has been
//! scrolled (compact header), whether the mobile menu is open, and which
//! section is currently active. Owned by the window controller and pushed to
//! the UI as plain properties.

use crate::reveal::Rect;
use serde::{Deserialize, Serialize};

/// Scroll distance after which the header switches to its compact style
pub const SCROLLED_THRESHOLD_PX: f32 = 20.0;

/// Height of the fixed header, used when deciding which section is active
pub const HEADER_ALLOWANCE_PX: f32 = 80.0;

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero
    Home,
    /// Service cards
    Services,
    /// Project catalog
    Projects,
    /// Tech stack
    Technologies,
    /// Count-up stats band
    Stats,
    /// Testimonials
    Testimonials,
    /// Pricing plans
    Pricing,
    /// Lead form
    Contact,
}

impl Section {
    /// Every section in page order
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::Services,
        Section::Projects,
        Section::Technologies,
        Section::Stats,
        Section::Testimonials,
        Section::Pricing,
        Section::Contact,
    ];

    /// Sections linked from the header
    pub fn nav_links() -> [Section; 6] {
        [
            Section::Home,
            Section::Services,
            Section::Projects,
            Section::Technologies,
            Section::Pricing,
            Section::Contact,
        ]
    }

    /// Position in page order
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Section at page position `index`
    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    /// Anchor id (lowercase)
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Technologies => "technologies",
            Section::Stats => "stats",
            Section::Testimonials => "testimonials",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    /// Header label
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Projects => "Projects",
            Section::Technologies => "Technologies",
            Section::Stats => "Stats",
            Section::Testimonials => "Testimonials",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }

    /// Look up a section by anchor id
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.anchor().eq_ignore_ascii_case(anchor))
    }
}

/// Header and menu state
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    scroll_y: f32,
    scrolled: bool,
    mobile_menu_open: bool,
    active: Section,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            scrolled: false,
            mobile_menu_open: false,
            active: Section::Home,
        }
    }
}

impl NavState {
    /// Record a new scroll position; returns `true` when `scrolled` flipped
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        self.scroll_y = scroll_y.max(0.0);
        let scrolled = self.scroll_y > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Last recorded scroll position
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Whether the header is in compact style
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether the mobile menu is open
    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Open or close the mobile menu; returns the new state
    pub fn toggle_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Navigate to `section`: closes the menu and returns the scroll position to jump to
    ///
    /// Unknown bounds scroll nowhere and return `None`.
    pub fn scroll_to(&mut self, section: Section, bounds: &[Option<Rect>]) -> Option<f32> {
        self.mobile_menu_open = false;
        let target = bounds.get(section.index()).copied().flatten()?;
        self.active = section;
        Some(target.top.max(0.0))
    }

    /// Section highlighted in the header
    pub fn active(&self) -> Section {
        self.active
    }

    /// Recompute the active section from section bounds; returns `true` when it changed
    ///
    /// The active section is the last one whose top has passed under the header.
    pub fn update_active(&mut self, bounds: &[Option<Rect>]) -> bool {
        let probe = self.scroll_y + HEADER_ALLOWANCE_PX;
        let active = bounds
            .iter()
            .enumerate()
            .filter_map(|(index, rect)| rect.map(|r| (index, r)))
            .filter(|(_, rect)| rect.top <= probe)
            .filter_map(|(index, _)| Section::from_index(index))
            .last()
            .unwrap_or(Section::Home);

        let changed = active != self.active;
        self.active = active;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Vec<Option<Rect>> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(index, _)| Some(Rect::new(index as f32 * 700.0, 700.0)))
            .collect()
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavState::default();
        assert!(!nav.on_scroll(20.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(21.0));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
    }

    #[test]
    fn test_scroll_to_closes_menu() {
        let mut nav = NavState::default();
        assert!(nav.toggle_menu());
        let target = nav.scroll_to(Section::Pricing, &bounds());
        assert_eq!(target, Some(4200.0));
        assert!(!nav.is_menu_open());
        assert_eq!(nav.active(), Section::Pricing);
    }

    #[test]
    fn test_scroll_to_unknown_bounds() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert_eq!(nav.scroll_to(Section::Contact, &[]), None);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let mut nav = NavState::default();
        let bounds = bounds();
        nav.on_scroll(0.0);
        assert!(!nav.update_active(&bounds));
        assert_eq!(nav.active(), Section::Home);

        nav.on_scroll(650.0);
        assert!(nav.update_active(&bounds));
        assert_eq!(nav.active(), Section::Services);

        nav.on_scroll(10_000.0);
        nav.update_active(&bounds);
        assert_eq!(nav.active(), Section::Contact);
    }

    #[test]
    fn test_anchor_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
            assert_eq!(Section::from_index(section.index()), Some(section));
        }
        assert_eq!(Section::from_anchor("PRICING"), Some(Section::Pricing));
        assert_eq!(Section::from_anchor("blog"), None);
    }

    #[test]
    fn test_nav_links_skip_bands() {
        let links = Section::nav_links();
        assert!(!links.contains(&Section::Stats));
        assert!(!links.contains(&Section::Testimonials));
        assert_eq!(links.len(), 6);
    }
}
