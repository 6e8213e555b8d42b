use std::collections::HashSet;

use cookbook_shared::recipe::Recipe;

use crate::RecipeStore;

impl RecipeStore {
    /// Replaces the whole collection.
    ///
    /// Later duplicates of an id are dropped. Favorites and viewed entries
    /// that no longer resolve are removed in the same step, and the id
    /// counter moves past the largest imported id.
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        let mut seen = HashSet::new();
        let recipes: Vec<Recipe> = recipes
            .into_iter()
            .filter(|recipe| {
                let unique = seen.insert(recipe.id);
                if !unique {
                    tracing::warn!(recipe.id = %recipe.id, "duplicate recipe id skipped");
                }
                unique
            })
            .collect();

        if let Some(max) = recipes.iter().map(|recipe| recipe.id).max() {
            self.next_id = self.next_id.max(max.next());
        }

        self.favorites.retain(|id| seen.contains(id));
        self.viewed.retain(|id| seen.contains(&id));
        self.recipes = recipes;

        tracing::debug!(total = self.recipes.len(), "recipes replaced");
    }
}
