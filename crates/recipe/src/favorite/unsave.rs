use cookbook_shared::recipe::RecipeId;

use crate::RecipeStore;

impl RecipeStore {
    /// Removes a favorite. The preference profile is left untouched.
    pub fn remove_favorite(&mut self, id: RecipeId) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|favorite| *favorite != id);

        let removed = self.favorites.len() != before;
        if removed {
            tracing::debug!(recipe.id = %id, favorites = self.favorites.len(), "recipe unfavorited");
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use cookbook_shared::recipe::{RecipeId, RecipeInput};

    use crate::RecipeStore;

    #[test]
    fn test_remove_favorite_keeps_preferences() {
        let mut store = RecipeStore::default();
        let id = store.add_recipe(RecipeInput::new("Ramen", "Noodles").with_tags(["japanese"]));
        store.add_favorite(id);

        assert!(store.remove_favorite(id));
        assert!(!store.is_favorite(id));
        assert!(store.preferences().contains("japanese"));
    }

    #[test]
    fn test_remove_missing_favorite() {
        let mut store = RecipeStore::default();

        assert!(!store.remove_favorite(RecipeId(1)));
    }
}
