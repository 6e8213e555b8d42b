use cookbook_shared::recipe::{Recipe, RecipeId, RecipePatch};

use crate::RecipeStore;

impl RecipeStore {
    /// Merges `patch` onto the recipe with the given id.
    ///
    /// Unknown ids are ignored and `false` is returned; the miss is logged
    /// since it usually means a caller held on to a stale id.
    pub fn update_recipe(&mut self, id: RecipeId, patch: RecipePatch) -> bool {
        let Some(recipe) = self.recipes.iter_mut().find(|recipe| recipe.id == id) else {
            tracing::warn!(recipe.id = %id, "update ignored, recipe not found");
            return false;
        };

        apply_patch(recipe, patch);
        tracing::debug!(recipe.id = %id, "recipe updated");

        true
    }

    pub fn try_update_recipe(
        &mut self,
        id: RecipeId,
        patch: RecipePatch,
    ) -> cookbook_shared::Result<()> {
        if !self.update_recipe(id, patch) {
            cookbook_shared::not_found!("recipe {}", id);
        }

        Ok(())
    }
}

/// Overwrites the fields present in `patch`, keeping the others.
pub fn apply_patch(recipe: &mut Recipe, patch: RecipePatch) {
    if let Some(title) = patch.title {
        recipe.title = title;
    }

    if let Some(description) = patch.description {
        recipe.description = description;
    }

    if let Some(ingredients) = patch.ingredients {
        recipe.ingredients = ingredients;
    }

    if let Some(instructions) = patch.instructions {
        recipe.instructions = instructions;
    }

    if let Some(prep_time) = patch.prep_time {
        recipe.prep_time = prep_time;
    }

    if let Some(cooking_time) = patch.cooking_time {
        recipe.cooking_time = cooking_time;
    }

    if let Some(servings) = patch.servings {
        recipe.servings = servings;
    }

    if let Some(tags) = patch.tags {
        recipe.tags = tags;
    }

    if let Some(difficulty) = patch.difficulty {
        recipe.difficulty = difficulty;
    }
}
