//! GUI module
//!
//! Slint main window and the controller that keeps it in sync with the
//! reveal, count-up, navigation and lead form state.

pub mod gui_controller;

pub use gui_controller::GuiController;
