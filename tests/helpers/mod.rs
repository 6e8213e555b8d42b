//! Fixture helpers for command line tests

#![allow(dead_code)]

use cookbook_recipe::{Difficulty, RecipeInput};
use temp_dir::TempDir;

pub fn fixture() -> Vec<RecipeInput> {
    vec![
        RecipeInput::new("Vegetable Curry", "Mild coconut curry")
            .with_ingredients(["coconut milk", "chickpeas", "spinach"])
            .with_prep_time(15)
            .with_cooking_time(30)
            .with_servings(4)
            .with_tags(["dinner", "vegetarian"])
            .with_difficulty(Difficulty::Easy),
        RecipeInput::new("Apple Crumble", "Warm apples under a buttery crumble")
            .with_ingredients(["apples", "butter", "oats"])
            .with_prep_time(20)
            .with_cooking_time(40)
            .with_servings(6)
            .with_tags(["baking", "dessert"])
            .with_difficulty(Difficulty::Medium),
        RecipeInput::new("Lemon Tart", "Sharp and sweet")
            .with_prep_time(10)
            .with_cooking_time(35)
            .with_servings(8)
            .with_tags(["citrus", "dessert"])
            .with_difficulty(Difficulty::Hard),
        RecipeInput::new("Tomato Soup", "Quick weeknight soup").with_cooking_time(25),
    ]
}

/// Writes [`fixture`] into `dir` and returns the file path.
pub fn write_fixture(dir: &TempDir) -> anyhow::Result<String> {
    let path = dir.child("recipes.json");
    std::fs::write(&path, serde_json::to_string_pretty(&fixture())?)?;

    Ok(path.display().to_string())
}
