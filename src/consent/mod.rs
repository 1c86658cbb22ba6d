//! Consent gate — the acknowledgment step between intake and interview.

pub mod gate;
pub mod terms;

pub use gate::{ConsentGate, checkbox_checked};
