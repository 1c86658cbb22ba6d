//! Skill selection: the "Area of Focus" widget embedded in the intake form.
//!
//! A session holds one [`SkillSelector`]. The unselected chip list is never
//! stored; it is derived from the catalog minus the selection, so an item
//! is always in exactly one of the two lists.

pub mod action;
pub mod catalog;
pub mod selector;

pub use action::SkillAction;
pub use catalog::CATALOG;
pub use selector::{Selection, SelectionView, SkillSelector};
