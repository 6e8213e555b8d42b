//! JSON fixture loading for the command line.

use anyhow::Context;
use cookbook_recipe::{RecipeInput, RecipeStore};
use std::path::Path;
use validator::Validate;

use crate::Config;

/// Reads a JSON array of recipe drafts.
pub fn load_inputs(path: impl AsRef<Path>) -> cookbook_shared::Result<Vec<RecipeInput>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;

    let inputs: Vec<RecipeInput> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse fixture {}", path.display()))?;

    Ok(inputs)
}

/// Builds a store from a fixture. Ids follow file order starting at 1.
///
/// Drafts are normalized before import; invalid ones are only reported.
pub fn load_store(path: impl AsRef<Path>, config: &Config) -> anyhow::Result<RecipeStore> {
    let inputs: Vec<RecipeInput> = load_inputs(path)?
        .into_iter()
        .map(RecipeInput::normalized)
        .collect();

    for (index, input) in inputs.iter().enumerate() {
        if let Err(errors) = input.validate() {
            tracing::warn!(index, title = %input.title, %errors, "invalid recipe draft imported");
        }
    }

    let mut store = RecipeStore::new(config.store_config());
    let ids = store.add_recipes(inputs);
    tracing::info!(total = ids.len(), "fixture loaded");

    Ok(store)
}
