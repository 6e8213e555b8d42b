use std::collections::VecDeque;

use cookbook_shared::recipe::RecipeId;

use crate::RecipeStore;

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Most-recently-viewed recipe ids, newest first, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewedHistory {
    ids: VecDeque<RecipeId>,
    capacity: usize,
}

impl Default for ViewedHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ViewedHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.ids.iter().copied()
    }

    pub(crate) fn record(&mut self, id: RecipeId) {
        self.ids.retain(|viewed| *viewed != id);
        self.ids.push_front(id);
        self.ids.truncate(self.capacity);
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(RecipeId) -> bool) {
        self.ids.retain(|id| keep(*id));
    }
}

impl RecipeStore {
    /// Moves `id` to the front of the viewed history.
    pub fn add_viewed_recipe(&mut self, id: RecipeId) {
        self.viewed.record(id);
        tracing::debug!(recipe.id = %id, viewed = self.viewed.len(), "recipe viewed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(history: &ViewedHistory) -> Vec<u64> {
        history.iter().map(|id| id.0).collect()
    }

    #[test]
    fn test_record_moves_to_front() {
        let mut history = ViewedHistory::default();
        history.record(RecipeId(1));
        history.record(RecipeId(2));
        history.record(RecipeId(3));
        history.record(RecipeId(1));

        assert_eq!(ids(&history), vec![1, 3, 2]);
    }

    #[test]
    fn test_record_is_bounded() {
        let mut history = ViewedHistory::default();
        for id in 1..=25 {
            history.record(RecipeId(id));
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(ids(&history).first(), Some(&25));
        assert_eq!(ids(&history).last(), Some(&6));
        assert!(!history.contains(RecipeId(5)));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = ViewedHistory::new(0);
        history.record(RecipeId(1));

        assert!(history.is_empty());
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut store = RecipeStore::new(crate::StoreConfig {
            history_capacity: usize::MAX,
            ..Default::default()
        });
        store.add_viewed_recipe(RecipeId(1));
        store.add_viewed_recipe(RecipeId(2));

        assert_eq!(store.viewed().capacity(), usize::MAX);
        assert_eq!(store.viewed().iter().collect::<Vec<_>>(), vec![RecipeId(2), RecipeId(1)]);
    }
}
