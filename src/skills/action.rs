//! Named selector operations, as posted by the widget's buttons and chips.

use serde::{Deserialize, Serialize};

use super::selector::SkillSelector;

/// One of the five selector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillAction {
    Add,
    Remove,
    All,
    Clear,
    Shuffle,
}

impl SkillAction {
    /// Apply to `selector`. `item` is only read by add and remove; a missing
    /// item goes through their guards like any unknown one.
    pub fn apply(self, selector: &mut SkillSelector, item: Option<&str>) {
        match (self, item) {
            (Self::Add, item) => {
                selector.add(item.unwrap_or_default());
            }
            (Self::Remove, item) => {
                selector.remove(item.unwrap_or_default());
            }
            (Self::All, _) => selector.select_all(),
            (Self::Clear, _) => selector.clear(),
            (Self::Shuffle, _) => selector.random_subset(),
        }
    }
}

impl std::fmt::Display for SkillAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::All => "all",
            Self::Clear => "clear",
            Self::Shuffle => "shuffle",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SkillAction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "all" => Ok(Self::All),
            "clear" => Ok(Self::Clear),
            "shuffle" => Ok(Self::Shuffle),
            _ => Err(format!("Unknown skill action: {}", s)),
        }
    }
}
