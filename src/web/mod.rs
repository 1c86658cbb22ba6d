//! Web surface for pages, form actions, the JSON API and the live skills feed.

pub mod cookie;
pub mod render;
pub mod routes;
pub mod ws;

pub use routes::{AppState, app_routes};
pub use ws::SkillsWsMessage;
