mod save;
mod toggle;
mod unsave;

use cookbook_shared::recipe::{Recipe, RecipeId};

use crate::RecipeStore;

impl RecipeStore {
    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorite ids in the order they were favorited.
    pub fn favorites(&self) -> &[RecipeId] {
        &self.favorites
    }

    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.favorites.iter().filter_map(|id| self.find(*id)).collect()
    }
}
