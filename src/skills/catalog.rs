//! The fixed skill catalog.

/// Every skill a candidate can pick, in display order.
pub const CATALOG: [&str; 10] = [
    "Data Management",
    "Networking",
    "Security",
    "Cloud",
    "DevOps",
    "Data Science",
    "AI",
    "ML",
    "Robotics",
    "Cybersecurity",
];

/// Number of catalog entries pre-selected for a new session.
pub const INITIAL_SELECTION_LEN: usize = 3;

/// Resolve a name to its catalog entry. Matching is exact.
pub fn lookup(item: &str) -> Option<&'static str> {
    CATALOG.iter().copied().find(|skill| *skill == item)
}

/// Whether `item` is a catalog entry.
pub fn contains(item: &str) -> bool {
    lookup(item).is_some()
}
