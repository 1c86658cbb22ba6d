//! Skill selector — ordered, duplicate-free selection out of the catalog.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

use super::catalog::{self, CATALOG, INITIAL_SELECTION_LEN};
use crate::store::Store;

/// Selected skills in insertion order.
///
/// Every entry is a catalog entry and appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Vec<&'static str>);

impl Selection {
    /// The first few catalog entries, as a new session starts with.
    pub fn initial() -> Self {
        Self(CATALOG[..INITIAL_SELECTION_LEN].to_vec())
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|s| *s == item)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Catalog entries not in this selection, in catalog order.
    pub fn unselected(&self) -> Vec<&'static str> {
        CATALOG
            .iter()
            .copied()
            .filter(|skill| !self.contains(skill))
            .collect()
    }

    /// Both chip lists, derived from this selection.
    pub fn view(&self) -> SelectionView {
        SelectionView {
            selected: self.0.clone(),
            unselected: self.unselected(),
            count: self.0.len(),
        }
    }
}

/// Render-ready snapshot of the selector: the two chip lists and the count
/// shown in the "Area of Focus" heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub selected: Vec<&'static str>,
    pub unselected: Vec<&'static str>,
    pub count: usize,
}

/// Skill selection widget state.
///
/// Mutations never fail; guards turn invalid requests into no-ops. Every
/// call publishes the resulting selection to store subscribers.
#[derive(Debug)]
pub struct SkillSelector {
    store: Store<Selection>,
}

impl Default for SkillSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillSelector {
    /// New selector holding the initial selection.
    pub fn new() -> Self {
        Self {
            store: Store::new(Selection::initial()),
        }
    }

    /// Append `item` if it is a catalog entry not already selected.
    /// Returns whether the selection changed.
    pub fn add(&mut self, item: &str) -> bool {
        let added = self.store.update(|sel| match catalog::lookup(item) {
            Some(skill) if !sel.contains(skill) => {
                sel.0.push(skill);
                true
            }
            _ => false,
        });
        debug!(item = %item, added, "Skill add");
        added
    }

    /// Remove `item` if selected, keeping the order of the rest.
    /// Returns whether the selection changed.
    pub fn remove(&mut self, item: &str) -> bool {
        let removed = self.store.update(|sel| {
            let before = sel.0.len();
            sel.0.retain(|s| *s != item);
            sel.0.len() != before
        });
        debug!(item = %item, removed, "Skill remove");
        removed
    }

    /// Select the whole catalog, in catalog order.
    pub fn select_all(&mut self) {
        self.store.update(|sel| sel.0 = CATALOG.to_vec());
        debug!("Skills select all");
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.store.update(|sel| sel.0.clear());
        debug!("Skills cleared");
    }

    /// Replace the selection with a random subset using the thread RNG.
    pub fn random_subset(&mut self) {
        self.random_subset_with(&mut rand::thread_rng());
    }

    /// Replace the selection with a random subset.
    ///
    /// Sampling is two-stage: a size uniform in `1..=CATALOG.len()`, then a
    /// uniform subset of that size without replacement. The result is
    /// uniform over sizes, not over all non-empty subsets. Order is whatever
    /// the sampler yields.
    pub fn random_subset_with<R: Rng>(&mut self, rng: &mut R) {
        let k = rng.gen_range(1..=CATALOG.len());
        let picked: Vec<&'static str> = CATALOG.choose_multiple(rng, k).copied().collect();
        self.store.update(|sel| sel.0 = picked);
        debug!(size = k, "Skills shuffled");
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        self.store.get()
    }

    pub fn selected(&self) -> &[&'static str] {
        self.store.get().as_slice()
    }

    pub fn unselected(&self) -> Vec<&'static str> {
        self.store.get().unselected()
    }

    pub fn view(&self) -> SelectionView {
        self.store.get().view()
    }

    /// Number of live subscribers, e.g. open WebSocket feeds.
    pub fn watchers(&self) -> usize {
        self.store.subscriber_count()
    }

    /// Receive the selection after every mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<Selection> {
        self.store.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn assert_mutually_exclusive(selector: &SkillSelector) {
        let selected: HashSet<_> = selector.selected().iter().copied().collect();
        let unselected: HashSet<_> = selector.unselected().into_iter().collect();
        assert!(selected.is_disjoint(&unselected));
        assert_eq!(selected.len() + unselected.len(), CATALOG.len());
        assert_eq!(selected.len(), selector.selected().len(), "duplicates in selection");
    }

    #[test]
    fn starts_with_first_three() {
        let selector = SkillSelector::new();
        assert_eq!(
            selector.selected(),
            &["Data Management", "Networking", "Security"]
        );
        assert_mutually_exclusive(&selector);
    }

    #[test]
    fn add_every_catalog_item() {
        for item in CATALOG {
            let mut selector = SkillSelector::new();
            selector.add(item);
            let hits = selector.selected().iter().filter(|s| **s == item).count();
            assert_eq!(hits, 1, "{item} should be selected once");
            assert!(!selector.unselected().contains(&item));
            assert_mutually_exclusive(&selector);
        }
    }

    #[test]
    fn add_appends_at_end() {
        let mut selector = SkillSelector::new();
        assert!(selector.add("Robotics"));
        assert_eq!(selector.selected().last(), Some(&"Robotics"));
    }

    #[test]
    fn add_is_idempotent() {
        let mut once = SkillSelector::new();
        once.add("ML");

        let mut twice = SkillSelector::new();
        assert!(twice.add("ML"));
        assert!(!twice.add("ML"));

        assert_eq!(once.selection(), twice.selection());
    }

    #[test]
    fn add_ignores_unknown_items() {
        let mut selector = SkillSelector::new();
        assert!(!selector.add("Blockchain"));
        assert!(!selector.add(""));
        assert_eq!(selector.selected().len(), 3);
        assert_mutually_exclusive(&selector);
    }

    #[test]
    fn remove_every_selected_item() {
        for item in CATALOG {
            let mut selector = SkillSelector::new();
            selector.select_all();
            assert!(selector.remove(item));
            assert!(!selector.selected().contains(&item));
            assert!(selector.unselected().contains(&item));
            assert_mutually_exclusive(&selector);
        }
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut selector = SkillSelector::new();
        let before = selector.selection().clone();
        assert!(!selector.remove("AI"));
        assert!(!selector.remove("not a skill"));
        assert_eq!(selector.selection(), &before);
    }

    #[test]
    fn add_then_remove_preserves_order() {
        let mut selector = SkillSelector::new();
        selector.add("AI");
        selector.remove("Networking");
        assert_eq!(selector.selected(), &["Data Management", "Security", "AI"]);
    }

    #[test]
    fn select_all_matches_catalog_order() {
        let mut selector = SkillSelector::new();
        selector.clear();
        selector.add("ML");
        selector.select_all();
        assert_eq!(selector.selected(), &CATALOG);
        assert!(selector.unselected().is_empty());
    }

    #[test]
    fn clear_empties_selection() {
        let mut selector = SkillSelector::new();
        selector.clear();
        assert!(selector.selection().is_empty());
        assert_eq!(selector.unselected(), CATALOG.to_vec());
    }

    #[test]
    fn random_subset_stays_in_bounds() {
        let mut selector = SkillSelector::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            selector.random_subset_with(&mut rng);
            let len = selector.selected().len();
            assert!((1..=CATALOG.len()).contains(&len));
            assert!(selector.selected().iter().all(|s| catalog::contains(s)));
            assert_mutually_exclusive(&selector);
        }
    }

    #[test]
    fn random_subset_covers_every_size() {
        let mut selector = SkillSelector::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut sizes = HashSet::new();
        for _ in 0..2_000 {
            selector.random_subset_with(&mut rng);
            sizes.insert(selector.selected().len());
        }
        assert_eq!(sizes, (1..=CATALOG.len()).collect::<HashSet<_>>());
    }

    #[test]
    fn random_subset_with_thread_rng() {
        let mut selector = SkillSelector::new();
        selector.random_subset();
        assert!(!selector.selection().is_empty());
        assert_mutually_exclusive(&selector);
    }

    #[test]
    fn view_reports_count() {
        let mut selector = SkillSelector::new();
        selector.add("Cloud");
        let view = selector.view();
        assert_eq!(view.count, 4);
        assert_eq!(view.selected.len() + view.unselected.len(), CATALOG.len());
        assert_eq!(view.unselected[0], "DevOps");
    }

    #[tokio::test]
    async fn every_mutation_notifies() {
        let mut selector = SkillSelector::new();
        let mut rx = selector.subscribe();

        selector.add("AI");
        selector.add("AI");
        selector.clear();

        assert!(rx.recv().await.unwrap().contains("AI"));
        // No-op guards still publish so views re-render.
        assert_eq!(rx.recv().await.unwrap().len(), 4);
        assert!(rx.recv().await.unwrap().is_empty());
    }
}
