use cookbook_shared::recipe::{Recipe, RecipeId, RecipeInput};

use crate::RecipeStore;

impl RecipeStore {
    /// Appends a recipe built from `input` and returns its fresh id.
    ///
    /// Ids come from a monotonic counter, so two recipes added back to back
    /// never share one. The draft is stored as given; validating title and
    /// description is left to the caller.
    pub fn add_recipe(&mut self, input: RecipeInput) -> RecipeId {
        let id = self.next_id;
        self.next_id = id.next();
        self.recipes.push(Recipe::from_input(id, input));

        tracing::debug!(recipe.id = %id, total = self.recipes.len(), "recipe added");

        id
    }

    pub fn add_recipes(&mut self, inputs: impl IntoIterator<Item = RecipeInput>) -> Vec<RecipeId> {
        inputs
            .into_iter()
            .map(|input| self.add_recipe(input))
            .collect()
    }
}
