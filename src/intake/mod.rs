//! Intake step: contact details plus the embedded skill selector.

pub mod form;

pub use form::{ContactForm, IntakeSubmission};
