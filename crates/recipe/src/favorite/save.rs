use cookbook_shared::recipe::RecipeId;

use crate::RecipeStore;

impl RecipeStore {
    /// Marks a recipe as favorite and teaches its tags to the preference
    /// profile. Returns `true` only when the id was newly added.
    pub fn add_favorite(&mut self, id: RecipeId) -> bool {
        if self.is_favorite(id) {
            return false;
        }

        let Some(recipe) = self.recipes.iter().find(|recipe| recipe.id == id) else {
            tracing::warn!(recipe.id = %id, "favorite ignored, recipe not found");
            return false;
        };

        let learned = self.preferences.learn(&recipe.tags);
        self.favorites.push(id);

        tracing::debug!(
            recipe.id = %id,
            learned,
            favorites = self.favorites.len(),
            "recipe favorited"
        );

        true
    }
}
