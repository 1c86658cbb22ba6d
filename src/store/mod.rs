//! In-memory state containers with change notification.

pub mod observable;

pub use observable::Store;
