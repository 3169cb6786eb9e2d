//! Integration tests for `ProjectTown`
//!
//! Drives the page the way the window does: scroll positions feed navigation
//! and reveal state, revealed sections start their count-ups, and settings
//! and content survive a save/load round through disk.

use projecttown::{
    config::{AnimationConfig, AppConfig},
    content::{ProjectTab, SiteContent},
    counter::{CountUpAnimator, CounterTarget},
    error::{SiteError, get_user_friendly_error},
    nav::{NavState, Section},
    reveal::{Direction, Rect, RevealController},
};
use std::sync::mpsc;
use std::time::Duration;

const SECTION_HEIGHT: f32 = 1000.0;
const VIEWPORT_HEIGHT: f32 = 800.0;

/// Eight stacked sections, each `SECTION_HEIGHT` tall
fn page_bounds() -> Vec<Option<Rect>> {
    Section::ALL
        .iter()
        .map(|section| {
            #[expect(clippy::cast_precision_loss, reason = "section index is tiny")]
            let top = section.index() as f32 * SECTION_HEIGHT;
            Some(Rect::new(top, SECTION_HEIGHT))
        })
        .collect()
}

fn page_controller(animation: &AnimationConfig) -> RevealController {
    let mut controller = RevealController::new(animation.reveal_enabled);
    for _ in Section::ALL {
        controller.add(animation.reveal(Direction::Up, Duration::ZERO));
    }
    controller
}

/// Test that sections reveal once as the page scrolls and stay revealed
#[test]
fn test_scroll_reveals_sections_once() {
    let bounds = page_bounds();
    let mut reveal = page_controller(&AnimationConfig::default());
    let mut nav = NavState::default();

    let scroll = |reveal: &mut RevealController, nav: &mut NavState, y: f32| {
        nav.on_scroll(y);
        nav.update_active(&bounds);
        reveal.update(&bounds, &Rect::new(nav.scroll_y(), VIEWPORT_HEIGHT))
    };

    assert_eq!(scroll(&mut reveal, &mut nav, 0.0), vec![Section::Home.index()]);
    assert!(!nav.is_scrolled());

    let fired = scroll(&mut reveal, &mut nav, 4100.0);
    assert_eq!(fired, vec![Section::Stats.index()]);
    assert!(nav.is_scrolled());
    assert_eq!(nav.active(), Section::Stats);

    // Back to the top: nothing fires again and nothing hides
    assert!(scroll(&mut reveal, &mut nav, 0.0).is_empty());
    assert!(reveal.is_revealed(Section::Stats.index()));
    assert!(!reveal.is_revealed(Section::Services.index()));
    assert_eq!(nav.active(), Section::Home);
}

/// Test that disabling reveal shows every section and starts every count-up
#[test]
fn test_disabled_reveal_shows_everything() {
    let animation = AnimationConfig {
        reveal_enabled: false,
        ..AnimationConfig::default()
    };
    let content = SiteContent::default();
    let mut reveal = page_controller(&animation);

    // Scrolled to the top, yet every section fires on the first pass
    let fired = reveal.update(&page_bounds(), &Rect::new(0.0, VIEWPORT_HEIGHT));
    assert_eq!(fired.len(), Section::ALL.len());
    assert!(reveal.revealed_flags().iter().all(|&shown| shown));

    let counters: usize = fired
        .iter()
        .filter_map(|&index| Section::from_index(index))
        .map(|section| content.counters_for(section).len())
        .sum();
    assert_eq!(counters, content.hero_stats.len() + content.stats.len());

    // Later passes report nothing new, so no count-up restarts
    assert!(
        reveal
            .update(&page_bounds(), &Rect::new(4100.0, VIEWPORT_HEIGHT))
            .is_empty()
    );
    assert!(reveal.reveal_all().is_empty());
}

/// Test that an unmeasurable section is shown rather than left hidden
#[test]
fn test_unmeasured_section_fails_open() {
    let mut bounds = page_bounds();
    bounds[Section::Pricing.index()] = None;
    let mut reveal = page_controller(&AnimationConfig::default());

    let fired = reveal.update(&bounds, &Rect::new(0.0, VIEWPORT_HEIGHT));

    assert!(fired.contains(&Section::Pricing.index()));
    assert!(fired.contains(&Section::Home.index()));
}

/// Test that navigation jumps to the section top and closes the menu
#[test]
fn test_navigation_targets_section_top() {
    let bounds = page_bounds();
    let mut nav = NavState::default();
    nav.toggle_menu();

    let section = Section::from_anchor("pricing").unwrap();
    let target = nav.scroll_to(section, &bounds);

    assert_eq!(target, Some(6.0 * SECTION_HEIGHT));
    assert!(!nav.is_menu_open());
    assert_eq!(nav.active(), Section::Pricing);
    assert_eq!(nav.scroll_to(Section::Contact, &[]), None);
}

/// Test that a revealed stat counts up to its exact end value
#[test]
fn test_revealed_stat_counts_to_end() {
    let animation = AnimationConfig {
        count_up_duration_ms: 100,
        tick_interval_ms: 5,
        ..AnimationConfig::default()
    };
    let content = SiteContent::default();
    let stat = &content.stats[0];
    let target = animation.counter(&stat.counter);
    let (tx, rx) = mpsc::channel();

    let animator = CountUpAnimator::start(&target, animation.tick_interval(), move |value| {
        tx.send(value).unwrap();
    });
    animator.join();

    let values: Vec<u64> = rx.try_iter().collect();
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&stat.counter.end));
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(
        target.format(*values.last().unwrap()),
        stat.counter.format(stat.counter.end)
    );
}

/// Test that cancelling a count-up stops updates immediately
#[test]
fn test_cancelled_count_up_goes_quiet() {
    let target = CounterTarget::new(1_000_000).with_duration(Duration::from_secs(10));
    let (tx, rx) = mpsc::channel();

    let animator = CountUpAnimator::start(&target, Duration::from_millis(2), move |value| {
        // The receiver may be gone once the test has finished checking
        let _ = tx.send(value);
    });
    std::thread::sleep(Duration::from_millis(20));
    animator.cancel();

    let seen: Vec<u64> = rx.try_iter().collect();
    std::thread::sleep(Duration::from_millis(20));
    assert!(rx.try_iter().next().is_none());
    assert!(seen.last().copied().unwrap_or(0) < 1_000_000);
}

/// Test that configuration survives a save/load round through disk
#[test]
fn test_config_persistence_integration() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.form.endpoint = "http://127.0.0.1:9/lead".to_string();
    config.animation.reveal_enabled = false;
    config.contact.phone = "+1 555 0100".to_string();
    config.window_state.width = 1024;

    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded: AppConfig =
        serde_json::from_str(&std::fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(loaded, config);
}

/// Test that a partial config file fills the rest with defaults
#[test]
fn test_partial_config_uses_defaults() {
    let loaded: AppConfig =
        serde_json::from_str(r#"{ "animation": { "tick_interval_ms": 0 } }"#).unwrap();
    let loaded = loaded.validated();

    assert_eq!(loaded.form, AppConfig::default().form);
    assert_eq!(loaded.animation.tick_interval_ms, 1);
    assert!(loaded.animation.reveal_enabled);
}

/// Test that a custom catalog file replaces the built-in one
#[test]
fn test_custom_content_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut content = SiteContent::default();
    content.brand = "Campus Builds".to_string();
    content.projects.retain(|p| p.tab == ProjectTab::Ai);

    let path = temp_dir.path().join("content.json");
    std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

    let loaded = SiteContent::load_or_default(Some(&path));
    assert_eq!(loaded.brand, "Campus Builds");
    assert_eq!(loaded.projects_in(ProjectTab::Web).count(), 0);
    assert!(loaded.projects_in(ProjectTab::Ai).count() > 0);

    let missing = SiteContent::load_or_default(Some(&temp_dir.path().join("missing.json")));
    assert_eq!(missing, SiteContent::default());
}

/// Test user-facing error messages never leak transport details
#[test]
fn test_user_friendly_error_messages() {
    let rejected = get_user_friendly_error(&SiteError::SubmissionRejected(503));
    let offline = get_user_friendly_error(&SiteError::TransportError(Box::new(
        std::io::Error::other("connection refused"),
    )));

    assert_eq!(rejected, offline);
    assert!(!offline.contains("refused"));
}
