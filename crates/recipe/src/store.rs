//! In-memory recipe repository.
//!
//! [`RecipeStore`] owns every piece of state the engine works on: the recipe
//! collection, favorites, the preference profile, the viewed history and the
//! transient query state. Mutations only happen through its action methods
//! (or [`crate::Action`] dispatch), each of which is a single synchronous
//! transition over `&mut self`.

use cookbook_shared::recipe::{Recipe, RecipeId};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::{
    history::{DEFAULT_HISTORY_CAPACITY, ViewedHistory},
    preferences::PreferenceProfile,
    query::RecipesQuery,
    recommendation::RecommendationConfig,
};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            recommendation: RecommendationConfig::default(),
        }
    }
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// Read-only view over the store used by the pure engine functions.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    pub recipes: &'a [Recipe],
    pub favorites: &'a [RecipeId],
    pub preferences: &'a PreferenceProfile,
    pub viewed: &'a ViewedHistory,
}

impl Snapshot<'_> {
    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(&id)
    }
}

pub struct RecipeStore {
    pub(crate) recipes: Vec<Recipe>,
    pub(crate) favorites: Vec<RecipeId>,
    pub(crate) preferences: PreferenceProfile,
    pub(crate) viewed: ViewedHistory,
    pub(crate) query: RecipesQuery,
    pub(crate) next_id: RecipeId,
    pub(crate) recommendation: RecommendationConfig,
    pub(crate) rng: StdRng,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl RecipeStore {
    pub fn new(config: StoreConfig) -> Self {
        let rng = match config.recommendation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            recipes: Vec::new(),
            favorites: Vec::new(),
            preferences: PreferenceProfile::default(),
            viewed: ViewedHistory::new(config.history_capacity),
            query: RecipesQuery::default(),
            next_id: RecipeId(1),
            recommendation: config.recommendation,
            rng,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn preferences(&self) -> &PreferenceProfile {
        &self.preferences
    }

    pub fn viewed(&self) -> &ViewedHistory {
        &self.viewed
    }

    pub fn recommendation_config(&self) -> &RecommendationConfig {
        &self.recommendation
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            recipes: &self.recipes,
            favorites: &self.favorites,
            preferences: &self.preferences,
            viewed: &self.viewed,
        }
    }
}
