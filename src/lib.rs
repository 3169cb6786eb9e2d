//! `ProjectTown` - single-page marketing site for a software consultancy
//!
//! Services, a project catalog, testimonials, pricing and a lead capture form,
//! rendered in one scrolling Slint window. The library holds every behavior
//! with a contract so it can be tested without a display:
//!
//! - [`reveal`]: one-shot reveal-on-visibility state per element
//! - [`counter`]: count-up numbers driven by a cancellable timer
//! - [`form`]: lead form validation and delivery
//! - [`nav`]: header state derived from the scroll position
//! - [`content`]: the static catalog
//!
//! The binary wires these to the UI and owns all UI state.

// Module declarations
pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod form;
pub mod nav;
pub mod reveal;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{Result, SiteError};
