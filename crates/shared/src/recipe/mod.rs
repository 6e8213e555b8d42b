mod input;

pub use input::*;

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl RecipeId {
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for RecipeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

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
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Recipe {
    /// Builds the stored record from a draft. Tags default to empty and
    /// difficulty to [`Difficulty::Medium`].
    pub fn from_input(id: RecipeId, input: RecipeInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            ingredients: input.ingredients,
            instructions: input.instructions,
            prep_time: input.prep_time,
            cooking_time: input.cooking_time,
            servings: input.servings,
            tags: input.tags,
            difficulty: Some(input.difficulty.unwrap_or_default()),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn shared_tags<'a>(&'a self, other: &'a Recipe) -> impl Iterator<Item = &'a String> {
        self.tags.intersection(&other.tags)
    }
}
