//! `ProjectTown` - single-page marketing site for a software consultancy
//!
//! Opens the site in a desktop window: sections reveal as they scroll into
//! view, stats count up once visible, and the lead form posts to the
//! configured endpoint.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use projecttown::{
    config::{AppConfig, ConfigManager, WindowState},
    content::SiteContent,
    form::{HttpLeadSink, LeadSink},
    utils,
};
use std::sync::Arc;
use tracing::{info, warn};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Initializes logging, loads configuration and content, runs the window and
/// persists the window geometry on exit.
fn main() -> Result<()> {
    let config_dir = ConfigManager::get_config_dir();
    if let Err(e) = utils::init_logging(&config_dir) {
        // Run without a subscriber
        eprintln!(
            "Failed to initialize logging in {}: {e}",
            config_dir.display()
        );
    }

    info!("ProjectTown v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load application configuration")?;
    info!(
        "Configuration loaded: endpoint {}, reveal {}",
        config.form.endpoint,
        if config.animation.reveal_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    let content = SiteContent::load_or_default(config.content_path.as_deref());
    info!(
        "Site content: {} services, {} projects, {} plans",
        content.services.len(),
        content.projects.len(),
        content.plans.len()
    );

    let sink: Arc<dyn LeadSink> = Arc::new(
        HttpLeadSink::from_config(&config.form).context("Failed to create lead delivery client")?,
    );

    let gui_controller = GuiController::new(config.clone(), content, sink)
        .context("Failed to create GUI controller")?;

    info!("Starting GUI event loop");
    let window_state = gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    save_window_state(config, window_state);

    info!("ProjectTown shutting down");

    Ok(())
}

/// Persist the final window geometry; failures are logged, not fatal
fn save_window_state(mut config: AppConfig, window_state: WindowState) {
    if config.window_state == window_state {
        return;
    }

    config.window_state = window_state;
    match ConfigManager::save(&config) {
        Ok(()) => info!("Window state saved"),
        Err(e) => warn!("Failed to save window state: {}", e),
    }
}
