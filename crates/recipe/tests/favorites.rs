use cookbook_recipe::RecipeId;

mod helpers;

#[test]
fn test_toggle_twice_restores_membership() {
    let (mut store, ids) = helpers::seeded_store();
    store.add_favorite(ids[2]);

    for id in &ids {
        let favorites = store.favorites().to_vec();
        let preferences = store.preferences().clone();

        store.toggle_favorite(*id);
        store.toggle_favorite(*id);

        assert_eq!(store.favorites().contains(id), favorites.contains(id));
        assert!(preferences.is_subset(store.preferences()));
    }
}

#[test]
fn test_preferences_only_grow() {
    let (mut store, ids) = helpers::seeded_store();

    store.toggle_favorite(ids[0]);
    store.toggle_favorite(ids[3]);
    assert_eq!(
        store.preferences().preferred_tags(),
        ["dinner", "italian", "pasta", "breakfast", "dessert", "quick"]
    );

    store.toggle_favorite(ids[0]);
    store.delete_recipe(ids[3]);

    assert!(store.favorites().is_empty());
    assert_eq!(store.preferences().len(), 6);
}

#[test]
fn test_favorite_unknown_recipe_is_ignored() {
    let (mut store, _) = helpers::seeded_store();

    assert!(!store.add_favorite(RecipeId(77)));
    assert!(!store.is_favorite(RecipeId(77)));
    assert!(store.preferences().is_empty());
}

#[test]
fn test_add_favorite_is_idempotent() {
    let (mut store, ids) = helpers::seeded_store();

    assert!(store.add_favorite(ids[1]));
    assert!(!store.add_favorite(ids[1]));
    assert_eq!(store.favorites(), &[ids[1]]);
}

#[test]
fn test_set_recipes_drops_dangling_favorites() {
    let (mut store, ids) = helpers::seeded_store();
    store.add_favorite(ids[0]);
    store.add_favorite(ids[4]);
    store.add_viewed_recipe(ids[4]);

    let kept: Vec<_> = store
        .recipes()
        .iter()
        .filter(|recipe| recipe.id != ids[4])
        .cloned()
        .collect();
    store.set_recipes(kept);

    assert_eq!(store.favorites(), &[ids[0]]);
    assert!(!store.viewed().contains(ids[4]));

    let fresh = store.add_recipe(cookbook_recipe::RecipeInput::new("Risotto", "Creamy"));
    assert!(fresh > ids[4]);
}
