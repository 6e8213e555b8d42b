//! Search, range filters and sorting over the recipe collection.

mod list;
mod state;
mod summary;

pub use list::{filter, matches_search, sort};
pub use summary::{ActiveFilter, QuerySummary};

use cookbook_shared::recipe::Recipe;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Title,
    PrepTime,
    CookingTime,
    Servings,
    Newest,
}

/// Numeric bounds. An unset bound accepts everything, and a recipe that
/// lacks the field passes the bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default)]
    pub max_prep_time: Option<u32>,
    #[serde(default)]
    pub max_cooking_time: Option<u32>,
    #[serde(default)]
    pub min_servings: Option<u32>,
    #[serde(default)]
    pub max_servings: Option<u32>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn accepts(&self, recipe: &Recipe) -> bool {
        at_most(recipe.prep_time, self.max_prep_time)
            && at_most(recipe.cooking_time, self.max_cooking_time)
            && at_least(recipe.servings, self.min_servings)
            && at_most(recipe.servings, self.max_servings)
    }

    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(value) = patch.max_prep_time {
            self.max_prep_time = value;
        }

        if let Some(value) = patch.max_cooking_time {
            self.max_cooking_time = value;
        }

        if let Some(value) = patch.min_servings {
            self.min_servings = value;
        }

        if let Some(value) = patch.max_servings {
            self.max_servings = value;
        }
    }
}

fn at_most(value: Option<u32>, bound: Option<u32>) -> bool {
    match (value, bound) {
        (Some(value), Some(bound)) => value <= bound,
        _ => true,
    }
}

fn at_least(value: Option<u32>, bound: Option<u32>) -> bool {
    match (value, bound) {
        (Some(value), Some(bound)) => value >= bound,
        _ => true,
    }
}

/// Partial filter update; `Some(None)` clears a bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub max_prep_time: Option<Option<u32>>,
    pub max_cooking_time: Option<Option<u32>>,
    pub min_servings: Option<Option<u32>>,
    pub max_servings: Option<Option<u32>>,
}

impl From<Filters> for FilterPatch {
    fn from(filters: Filters) -> Self {
        Self {
            max_prep_time: Some(filters.max_prep_time),
            max_cooking_time: Some(filters.max_cooking_time),
            min_servings: Some(filters.min_servings),
            max_servings: Some(filters.max_servings),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipesQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl RecipesQuery {
    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty() || !self.filters.is_empty()
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let search = self.search.trim();
        let bounds = [
            self.filters.max_prep_time.map(ActiveFilter::MaxPrepTime),
            self.filters.max_cooking_time.map(ActiveFilter::MaxCookingTime),
            self.filters.min_servings.map(ActiveFilter::MinServings),
            self.filters.max_servings.map(ActiveFilter::MaxServings),
        ];

        (!search.is_empty())
            .then(|| ActiveFilter::Search(search.to_owned()))
            .into_iter()
            .chain(bounds.into_iter().flatten())
            .collect()
    }
}
