//! Explicit per-visitor session state for the application flow.

pub mod context;
pub mod manager;

pub use context::Session;
pub use manager::{SessionManager, spawn_sweep_task};
