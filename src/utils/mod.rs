//! Utility modules
//!
//! Provides logging initialization and link opening.

pub mod links;
pub mod logging;

pub use links::{mailto_link, open_link, tel_link};
pub use logging::init_logging;
