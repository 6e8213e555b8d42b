use cookbook_shared::recipe::RecipeId;

use crate::RecipeStore;

impl RecipeStore {
    /// Removes the recipe and its favorite entry in one step.
    ///
    /// The preference profile keeps the tags it learned from the recipe.
    pub fn delete_recipe(&mut self, id: RecipeId) -> bool {
        let Some(position) = self.recipes.iter().position(|recipe| recipe.id == id) else {
            tracing::warn!(recipe.id = %id, "delete ignored, recipe not found");
            return false;
        };

        self.recipes.remove(position);
        self.favorites.retain(|favorite| *favorite != id);

        tracing::debug!(recipe.id = %id, total = self.recipes.len(), "recipe deleted");

        true
    }

    pub fn try_delete_recipe(&mut self, id: RecipeId) -> cookbook_shared::Result<()> {
        if !self.delete_recipe(id) {
            cookbook_shared::not_found!("recipe {}", id);
        }

        Ok(())
    }
}
