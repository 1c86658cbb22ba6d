//! Bhartee AI — interview application intake service.

pub mod config;
pub mod consent;
pub mod error;
pub mod intake;
pub mod pages;
pub mod session;
pub mod skills;
pub mod store;
pub mod web;
