#![allow(dead_code)]

use cookbook_recipe::{Difficulty, RecipeId, RecipeInput, RecipeStore, RecommendationConfig, StoreConfig};

pub fn setup_store() -> RecipeStore {
    RecipeStore::new(StoreConfig {
        recommendation: RecommendationConfig {
            seed: Some(7),
            ..Default::default()
        },
        ..Default::default()
    })
}

pub fn sample_inputs() -> Vec<RecipeInput> {
    vec![
        RecipeInput::new("Spaghetti Carbonara", "Roman pasta with eggs and pecorino")
            .with_ingredients(["spaghetti", "eggs", "pecorino", "guanciale"])
            .with_instructions(["Boil pasta", "Mix eggs and cheese", "Toss together"])
            .with_prep_time(10)
            .with_cooking_time(15)
            .with_servings(4)
            .with_tags(["italian", "pasta", "dinner"])
            .with_difficulty(Difficulty::Medium),
        RecipeInput::new("Chocolate Cake", "Rich layered cake")
            .with_ingredients(["flour", "cocoa", "sugar", "butter"])
            .with_prep_time(30)
            .with_cooking_time(45)
            .with_servings(8)
            .with_tags(["dessert", "baking"])
            .with_difficulty(Difficulty::Hard),
        RecipeInput::new("Greek Salad", "Tomatoes, cucumber and feta")
            .with_ingredients(["tomato", "cucumber", "feta", "olives"])
            .with_prep_time(15)
            .with_servings(2)
            .with_tags(["salad", "quick", "vegetarian"])
            .with_difficulty(Difficulty::Easy),
        RecipeInput::new("Banana Pancakes", "Fluffy breakfast pancakes")
            .with_ingredients(["banana", "flour", "milk"])
            .with_cooking_time(20)
            .with_tags(["breakfast", "dessert", "quick"]),
        RecipeInput::new("Beef Stew", "Slow cooked comfort food")
            .with_prep_time(25)
            .with_cooking_time(150)
            .with_servings(6)
            .with_tags(["dinner", "comfort"])
            .with_difficulty(Difficulty::Medium),
    ]
}

pub fn seeded_store() -> (RecipeStore, Vec<RecipeId>) {
    let mut store = setup_store();
    let ids = store.add_recipes(sample_inputs());

    (store, ids)
}

pub fn titles(recipes: &[&cookbook_recipe::Recipe]) -> Vec<String> {
    recipes.iter().map(|recipe| recipe.title.to_owned()).collect()
}
