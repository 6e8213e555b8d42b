use cookbook_recipe::{Difficulty, RecipeId, RecipePatch};

mod helpers;

#[test]
fn test_update_no_fields() -> anyhow::Result<()> {
    let (mut store, ids) = helpers::seeded_store();
    let before = store.find(ids[0]).cloned();

    store.try_update_recipe(ids[0], RecipePatch::default())?;

    assert_eq!(store.find(ids[0]).cloned(), before);

    Ok(())
}

#[test]
fn test_update_merges_fields() -> anyhow::Result<()> {
    let (mut store, ids) = helpers::seeded_store();
    let patch: RecipePatch = serde_json::from_str(
        r#"{"title":"Carbonara","prepTime":null,"servings":2,"difficulty":"hard"}"#,
    )?;

    store.try_update_recipe(ids[0], patch)?;

    let recipe = store.find(ids[0]).unwrap();
    assert_eq!(recipe.title, "Carbonara");
    assert_eq!(recipe.description, "Roman pasta with eggs and pecorino");
    assert_eq!(recipe.prep_time, None);
    assert_eq!(recipe.cooking_time, Some(15));
    assert_eq!(recipe.servings, Some(2));
    assert_eq!(recipe.difficulty, Some(Difficulty::Hard));
    assert!(recipe.has_tag("pasta"));

    Ok(())
}

#[test]
fn test_update_unknown() {
    let (mut store, _) = helpers::seeded_store();
    let patch = RecipePatch {
        title: Some("Ghost".to_owned()),
        ..Default::default()
    };

    assert!(!store.update_recipe(RecipeId(99), patch.clone()));

    let err = store.try_update_recipe(RecipeId(99), patch).unwrap_err();
    assert_eq!(err.to_string(), "recipe 99 not found".to_owned());
    assert!(store.recipes().iter().all(|recipe| recipe.title != "Ghost"));
}
