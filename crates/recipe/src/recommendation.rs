//! Heuristic ranking of recipes the user has not favorited yet.
//!
//! Every candidate gets a score built from tag affinity, difficulty match,
//! cooking time and servings proximity to the favorites, a penalty for
//! recently viewed recipes and a small random jitter that breaks ties. The
//! random source is injected so callers and tests control determinism.

use std::fmt;

use cookbook_shared::recipe::{Difficulty, Recipe};
use rand::Rng;
use serde::Deserialize;

use crate::{RecipeStore, store::Snapshot};

/// Bonus for being close to a reference value: `near_bonus` within `near`,
/// `far_bonus` within `far`, nothing otherwise.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ProximityBonus {
    pub near: f32,
    pub near_bonus: f32,
    pub far: f32,
    pub far_bonus: f32,
}

impl ProximityBonus {
    pub fn score(&self, value: f32, reference: f32) -> f32 {
        let distance = (value - reference).abs();

        if distance <= self.near {
            self.near_bonus
        } else if distance <= self.far {
            self.far_bonus
        } else {
            0.0
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RecommendationConfig {
    pub limit: usize,
    /// Upper bound of the uniform tie-break noise. `0` disables it.
    pub jitter: f32,
    pub seed: Option<u64>,
    pub tag_preference_weight: f32,
    pub shared_tag_weight: f32,
    pub difficulty_weight: f32,
    pub cooking_time: ProximityBonus,
    pub servings: ProximityBonus,
    pub viewed_penalty: f32,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            limit: 6,
            jitter: 3.0,
            seed: None,
            tag_preference_weight: 10.0,
            shared_tag_weight: 5.0,
            difficulty_weight: 8.0,
            cooking_time: ProximityBonus {
                near: 10.0,
                near_bonus: 6.0,
                far: 20.0,
                far_bonus: 3.0,
            },
            servings: ProximityBonus {
                near: 1.0,
                near_bonus: 4.0,
                far: 2.0,
                far_bonus: 2.0,
            },
            viewed_penalty: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationReason {
    /// Up to two tags shared with favorites, in first-seen order.
    SharedTags(Vec<String>),
    Difficulty(Difficulty),
    /// Candidate cooking time in minutes.
    CookingTime(u32),
    Preferences,
}

impl fmt::Display for RecommendationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SharedTags(tags) => write!(f, "Because you like {} recipes", tags.join(" and ")),
            Self::Difficulty(difficulty) => write!(f, "Because you enjoy {difficulty} recipes"),
            Self::CookingTime(minutes) => write!(
                f,
                "Because you like recipes that take about {minutes} minutes"
            ),
            Self::Preferences => f.write_str("Based on your preferences"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub recipe: Recipe,
    pub score: f32,
    pub reason: RecommendationReason,
}

/// Deterministic part of the ranking, computed once per favorites set.
pub struct Scorer<'a> {
    snapshot: Snapshot<'a>,
    config: &'a RecommendationConfig,
    favorites: Vec<&'a Recipe>,
    mean_cooking_time: Option<f32>,
    mean_servings: Option<f32>,
}

impl<'a> Scorer<'a> {
    pub fn new(snapshot: Snapshot<'a>, config: &'a RecommendationConfig) -> Self {
        let favorites: Vec<&Recipe> = snapshot
            .favorites
            .iter()
            .filter_map(|id| snapshot.recipes.iter().find(|recipe| recipe.id == *id))
            .collect();

        let mean_cooking_time = mean(favorites.iter().filter_map(|recipe| recipe.cooking_time));
        let mean_servings = mean(favorites.iter().filter_map(|recipe| recipe.servings));

        Self {
            snapshot,
            config,
            favorites,
            mean_cooking_time,
            mean_servings,
        }
    }

    pub fn favorites(&self) -> &[&'a Recipe] {
        &self.favorites
    }

    /// Score without jitter.
    pub fn score(&self, recipe: &Recipe) -> f32 {
        let config = self.config;
        let mut score = 0.0;

        let preferred = recipe
            .tags
            .iter()
            .filter(|tag| self.snapshot.preferences.contains(tag))
            .count();
        score += config.tag_preference_weight * preferred as f32;

        let shared: usize = self
            .favorites
            .iter()
            .map(|favorite| favorite.shared_tags(recipe).count())
            .sum();
        score += config.shared_tag_weight * shared as f32;

        if self.shares_difficulty(recipe) {
            score += config.difficulty_weight;
        }

        if let (Some(minutes), Some(mean)) = (recipe.cooking_time, self.mean_cooking_time) {
            score += config.cooking_time.score(minutes as f32, mean);
        }

        if let (Some(servings), Some(mean)) = (recipe.servings, self.mean_servings) {
            score += config.servings.score(servings as f32, mean);
        }

        if self.snapshot.viewed.contains(recipe.id) {
            score -= config.viewed_penalty;
        }

        score
    }

    pub fn reason(&self, recipe: &Recipe) -> RecommendationReason {
        let mut tags: Vec<String> = Vec::new();
        for tag in self
            .favorites
            .iter()
            .flat_map(|favorite| favorite.shared_tags(recipe))
        {
            if tags.len() == 2 {
                break;
            }

            if !tags.contains(tag) {
                tags.push(tag.to_owned());
            }
        }

        if !tags.is_empty() {
            return RecommendationReason::SharedTags(tags);
        }

        if let Some(difficulty) = recipe.difficulty.filter(|_| self.shares_difficulty(recipe)) {
            return RecommendationReason::Difficulty(difficulty);
        }

        if let (Some(minutes), Some(mean)) = (recipe.cooking_time, self.mean_cooking_time) {
            if (minutes as f32 - mean).abs() <= self.config.cooking_time.near {
                return RecommendationReason::CookingTime(minutes);
            }
        }

        RecommendationReason::Preferences
    }

    fn shares_difficulty(&self, recipe: &Recipe) -> bool {
        recipe.difficulty.is_some()
            && self
                .favorites
                .iter()
                .any(|favorite| favorite.difficulty == recipe.difficulty)
    }
}

fn mean(values: impl Iterator<Item = u32>) -> Option<f32> {
    let (sum, count) = values.fold((0.0f64, 0u32), |(sum, count), value| {
        (sum + f64::from(value), count + 1)
    });

    (count > 0).then(|| (sum / f64::from(count)) as f32)
}

/// Ranks every non-favorite recipe and keeps the best `config.limit`.
///
/// Returns nothing when there are no favorites to learn from.
pub fn recommend<R: Rng>(
    snapshot: Snapshot<'_>,
    config: &RecommendationConfig,
    rng: &mut R,
) -> Vec<Recommendation> {
    if snapshot.favorites.is_empty() {
        return Vec::new();
    }

    let scorer = Scorer::new(snapshot, config);
    let jitter = config.jitter;

    let mut ranked: Vec<Recommendation> = snapshot
        .recipes
        .iter()
        .filter(|recipe| !snapshot.is_favorite(recipe.id))
        .map(|recipe| {
            let noise = if jitter.is_finite() && jitter > 0.0 {
                rng.random_range(0.0..jitter)
            } else {
                0.0
            };

            Recommendation {
                recipe: recipe.clone(),
                score: scorer.score(recipe) + noise,
                reason: scorer.reason(recipe),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(config.limit);

    ranked
}

impl RecipeStore {
    /// Recommendations drawn with the store's own random source.
    pub fn recommendations(&mut self) -> Vec<Recommendation> {
        let snapshot = Snapshot {
            recipes: &self.recipes,
            favorites: &self.favorites,
            preferences: &self.preferences,
            viewed: &self.viewed,
        };

        recommend(snapshot, &self.recommendation, &mut self.rng)
    }

    pub fn recommendations_with<R: Rng>(&self, rng: &mut R) -> Vec<Recommendation> {
        recommend(self.snapshot(), &self.recommendation, rng)
    }
}
