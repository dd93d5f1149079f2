use flightdeck_core::prefs::{JsonPreferencesStore, PreferencesStore};

#[test]
fn test_query_string_roundtrip() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("preferences.json");

    // Missing file reads as the empty query
    let store = JsonPreferencesStore::new(&path);
    assert_eq!(store.query_string()?, "");

    let mut store = JsonPreferencesStore::new(&path);
    store.save_query_string("dublin")?;

    // A fresh handle returns the same string
    let fresh = JsonPreferencesStore::new(&path);
    assert_eq!(fresh.query_string()?, "dublin");

    // Overwriting with the empty string round-trips too
    store.save_query_string("")?;
    assert_eq!(JsonPreferencesStore::new(&path).query_string()?, "");

    Ok(())
}
