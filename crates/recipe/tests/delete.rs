use cookbook_recipe::{RecipeId, RecipeInput};

mod helpers;

#[test]
fn test_delete() -> anyhow::Result<()> {
    let (mut store, ids) = helpers::seeded_store();
    let cake = ids[1];

    store.add_favorite(cake);
    store.add_viewed_recipe(cake);
    assert!(store.is_favorite(cake));

    store.try_delete_recipe(cake)?;

    assert!(store.find(cake).is_none());
    assert!(!store.is_favorite(cake));
    assert!(store.favorite_recipes().is_empty());
    assert!(store.preferences().contains("dessert"));

    let err = store.try_delete_recipe(cake).unwrap_err();
    assert_eq!(err.to_string(), "recipe 2 not found".to_owned());

    Ok(())
}

#[test]
fn test_delete_unknown_is_noop() {
    let (mut store, _) = helpers::seeded_store();

    assert!(!store.delete_recipe(RecipeId(404)));
    assert_eq!(store.len(), 5);
}

#[test]
fn test_delete_every_id_clears_every_favorite() {
    let (mut store, ids) = helpers::seeded_store();
    for id in &ids {
        store.add_favorite(*id);
    }

    for id in &ids {
        store.delete_recipe(*id);
        assert!(!store.is_favorite(*id));
    }

    assert!(store.is_empty());
    assert!(store.favorites().is_empty());
}

#[test]
fn test_ids_never_reused_after_delete() {
    let (mut store, ids) = helpers::seeded_store();
    let last = *ids.last().unwrap();

    store.delete_recipe(last);
    let id = store.add_recipe(RecipeInput::new("Focaccia", "Oily bread"));

    assert!(id > last);
}
