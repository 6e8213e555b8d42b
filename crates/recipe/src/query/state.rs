use cookbook_shared::recipe::Recipe;

use super::{FilterPatch, QuerySummary, RecipesQuery, SortBy, filter};
use crate::RecipeStore;

impl RecipeStore {
    pub fn query(&self) -> &RecipesQuery {
        &self.query
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.query.filters.apply(patch);
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.query.sort_by = sort_by;
    }

    /// Resets the search term and every bound. The sort key is kept.
    pub fn clear_filters(&mut self) {
        self.query.search.clear();
        self.query.filters = Default::default();
    }

    pub fn filtered_recipes(&self) -> Vec<&Recipe> {
        filter(&self.recipes, &self.query)
    }

    pub fn summary(&self) -> QuerySummary {
        QuerySummary {
            shown: self.filtered_recipes().len(),
            total: self.recipes.len(),
        }
    }
}
