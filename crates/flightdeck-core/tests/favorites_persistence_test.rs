// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use flightdeck_core::favorites::{FavoritesStore, JsonFavoritesStore};

#[test]
fn test_favorites_roundtrip() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("favorites.json");

    let mut store = JsonFavoritesStore::open(&path)?;
    assert!(store.list()?.is_empty());

    let route = store.add("FCO", "DUB")?;
    assert_eq!(route.id, 1);
    assert!(route.matches("FCO", "DUB"));

    // A fresh handle sees the mutation: the write is durable before add returns
    let reopened = JsonFavoritesStore::open(&path)?;
    let routes = reopened.list()?;
    assert_eq!(routes.len(), 1);
    assert!(routes[0].matches("FCO", "DUB"));

    Ok(())
}

#[test]
fn test_duplicate_pairs_accepted() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("favorites.json");

    let mut store = JsonFavoritesStore::open(&path)?;
    store.add("FCO", "DUB")?;
    store.add("FCO", "DUB")?;
    store.add("FCO", "VIE")?;

    let routes = store.list()?;
    assert_eq!(routes.len(), 3);

    // Store-assigned ids stay unique even for identical pairs
    let ids: Vec<i64> = routes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    Ok(())
}

#[test]
fn test_remove_clears_every_matching_row() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("favorites.json");

    let mut store = JsonFavoritesStore::open(&path)?;
    store.add("FCO", "DUB")?;
    store.add("FCO", "DUB")?;
    store.add("FCO", "VIE")?;

    assert_eq!(store.remove("FCO", "DUB")?, 2);
    assert_eq!(store.remove("FCO", "DUB")?, 0);

    let routes = store.list()?;
    assert_eq!(routes.len(), 1);
    assert!(routes[0].matches("FCO", "VIE"));

    // Direction matters: the reverse pair is a different route
    assert_eq!(store.remove("VIE", "FCO")?, 0);

    let reopened = JsonFavoritesStore::open(&path)?;
    assert_eq!(reopened.list()?.len(), 1);

    Ok(())
}
