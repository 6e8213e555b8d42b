use cookbook_shared::recipe::Recipe;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use super::{RecipesQuery, SortBy};

/// Runs search, range filters and sort over `recipes`.
///
/// The result borrows from the input and is rebuilt on every call.
pub fn filter<'a>(recipes: &'a [Recipe], query: &RecipesQuery) -> Vec<&'a Recipe> {
    let needle = query.search.trim().to_lowercase();

    let mut matched: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| needle.is_empty() || matches_search(recipe, &needle))
        .filter(|recipe| query.filters.accepts(recipe))
        .collect();

    sort(&mut matched, query.sort_by);

    matched
}

/// Case-insensitive substring match over every text field. `needle` must
/// already be lowercased.
pub fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);

    contains(recipe.title.as_str())
        || contains(recipe.description.as_str())
        || recipe.ingredients.iter().any(|value| contains(value.as_str()))
        || recipe.instructions.iter().any(|value| contains(value.as_str()))
        || recipe.tags.iter().any(|value| contains(value.as_str()))
}

/// Stable in-place sort.
pub fn sort(recipes: &mut [&Recipe], sort_by: SortBy) {
    match sort_by {
        SortBy::Title => recipes.sort_by_cached_key(|recipe| title_key(&recipe.title)),
        SortBy::PrepTime => recipes.sort_by_key(|recipe| recipe.prep_time.unwrap_or(0)),
        SortBy::CookingTime => recipes.sort_by_key(|recipe| recipe.cooking_time.unwrap_or(0)),
        SortBy::Servings => recipes.sort_by_key(|recipe| recipe.servings.unwrap_or(0)),
        SortBy::Newest => recipes.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

/// Collation key for titles. Accents and case are folded for the primary
/// comparison; ties fall back to the lowercased title and then the raw one.
fn title_key(title: &str) -> (String, String, String) {
    let lowered = title.to_lowercase();
    let folded = lowered
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    (folded, lowered, title.to_owned())
}
