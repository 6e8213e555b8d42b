use cookbook_shared::recipe::{Recipe, RecipeId, RecipeInput, RecipePatch};
use strum::IntoStaticStr;

use crate::{
    RecipeStore,
    query::{FilterPatch, SortBy},
};

/// One control call against the store.
#[derive(Debug, Clone, IntoStaticStr)]
pub enum Action {
    AddRecipe(RecipeInput),
    UpdateRecipe { id: RecipeId, patch: RecipePatch },
    DeleteRecipe(RecipeId),
    SetRecipes(Vec<Recipe>),
    ToggleFavorite(RecipeId),
    AddFavorite(RecipeId),
    RemoveFavorite(RecipeId),
    SetSearchTerm(String),
    SetFilters(FilterPatch),
    SetSortBy(SortBy),
    ClearFilters,
    AddViewedRecipe(RecipeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created(RecipeId),
    Applied,
    /// The action referenced something that does not exist or changed nothing.
    Ignored,
    /// New favorite membership after a toggle.
    Favorite(bool),
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed { Self::Applied } else { Self::Ignored }
    }
}

impl RecipeStore {
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let name: &'static str = (&action).into();

        let outcome = match action {
            Action::AddRecipe(input) => Outcome::Created(self.add_recipe(input)),
            Action::UpdateRecipe { id, patch } => Outcome::from_changed(self.update_recipe(id, patch)),
            Action::DeleteRecipe(id) => Outcome::from_changed(self.delete_recipe(id)),
            Action::SetRecipes(recipes) => {
                self.set_recipes(recipes);
                Outcome::Applied
            }
            Action::ToggleFavorite(id) => {
                if self.contains(id) || self.is_favorite(id) {
                    Outcome::Favorite(self.toggle_favorite(id))
                } else {
                    Outcome::Ignored
                }
            }
            Action::AddFavorite(id) => Outcome::from_changed(self.add_favorite(id)),
            Action::RemoveFavorite(id) => Outcome::from_changed(self.remove_favorite(id)),
            Action::SetSearchTerm(term) => {
                self.set_search_term(term);
                Outcome::Applied
            }
            Action::SetFilters(patch) => {
                self.set_filters(patch);
                Outcome::Applied
            }
            Action::SetSortBy(sort_by) => {
                self.set_sort_by(sort_by);
                Outcome::Applied
            }
            Action::ClearFilters => {
                self.clear_filters();
                Outcome::Applied
            }
            Action::AddViewedRecipe(id) => {
                self.add_viewed_recipe(id);
                Outcome::Applied
            }
        };

        tracing::debug!(action = name, ?outcome, "action dispatched");

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_outcomes() {
        let mut store = RecipeStore::default();

        let Outcome::Created(id) =
            store.dispatch(Action::AddRecipe(RecipeInput::new("Paella", "Rice")))
        else {
            panic!("expected a created recipe");
        };

        assert_eq!(store.dispatch(Action::ToggleFavorite(id)), Outcome::Favorite(true));
        assert_eq!(store.dispatch(Action::AddFavorite(id)), Outcome::Ignored);
        assert_eq!(
            store.dispatch(Action::ToggleFavorite(RecipeId(99))),
            Outcome::Ignored
        );
        assert_eq!(
            store.dispatch(Action::UpdateRecipe {
                id: RecipeId(99),
                patch: RecipePatch::default(),
            }),
            Outcome::Ignored
        );
        assert_eq!(store.dispatch(Action::DeleteRecipe(id)), Outcome::Applied);
        assert!(!store.is_favorite(id));
    }

    #[test]
    fn test_dispatch_query_actions() {
        let mut store = RecipeStore::default();

        store.dispatch(Action::SetSearchTerm("rice".to_owned()));
        store.dispatch(Action::SetSortBy(SortBy::Servings));
        assert_eq!(store.query().search, "rice");

        assert_eq!(store.dispatch(Action::ClearFilters), Outcome::Applied);
        assert!(store.query().search.is_empty());
        assert_eq!(store.query().sort_by, SortBy::Servings);
    }

    #[test]
    fn test_action_names() {
        let name: &'static str = (&Action::ClearFilters).into();

        assert_eq!(name, "ClearFilters");
    }
}
