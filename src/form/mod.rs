//! Lead capture form
//!
//! The contact form is the site's primary conversion action. It collects a
//! name, an email, an optional phone number and a message, validates them on
//! the client and performs a single JSON `POST` to a form collection endpoint.
//!
//! # Status Flow
//!
//! ```text
//! Idle ──submit──► Sending ──2xx──────────────► Success ──(5s)──► Idle
//!  ▲                  │
//!  └──edit/submit─── Error ◄──non-2xx / transport failure
//! ```
//!
//! Validation failures never leave `Idle` and never touch the network.
//! There is no retry, no offline queue and no idempotency key: a failed
//! submission is resubmitted by the visitor.

pub mod controller;
pub mod sink;
pub mod validation;

pub use controller::{FormStatus, LeadFormController};
pub use sink::{HttpLeadSink, LeadSink};
pub use validation::{Field, LeadForm, LeadSubmission, ValidationErrors, is_valid_email};
