use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use validator::{Validate, ValidationError};

use super::Difficulty;

/// Recipe draft as handed over by a form or an import file.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub title: String,
    #[validate(length(max = 2000), custom(function = "not_blank"))]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cooking_time: Option<u32>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub servings: Option<u32>,
    #[validate(custom(function = "no_blank_tag"))]
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl RecipeInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = Some(minutes);
        self
    }

    pub fn with_cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time = Some(minutes);
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Trims every text field and drops blank tags. Ingredient and
    /// instruction entries holding several lines become one entry per line.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            ingredients: split_entries(&self.ingredients),
            instructions: split_entries(&self.instructions),
            tags: trim_entries(self.tags),
            ..self
        }
    }
}

/// Partial update. `None` keeps the stored value; for optional fields
/// `Some(None)` clears it.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub prep_time: Option<Option<u32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cooking_time: Option<Option<u32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub servings: Option<Option<u32>>,
    pub tags: Option<BTreeSet<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub difficulty: Option<Option<Difficulty>>,
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Splits multi-line form input into trimmed, non-empty entries.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn split_entries(entries: &[String]) -> Vec<String> {
    entries.iter().flat_map(|entry| parse_lines(entry)).collect()
}

fn trim_entries(entries: BTreeSet<String>) -> BTreeSet<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_owned())
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }

    Ok(())
}

fn no_blank_tag(tags: &BTreeSet<String>) -> Result<(), ValidationError> {
    if tags.iter().any(|tag| tag.trim().is_empty()) {
        return Err(ValidationError::new("blank_tag").with_message("tags must not be blank".into()));
    }

    Ok(())
}
