use super::*;

fn ids(raw: &[&str]) -> BTreeSet<UnitId> {
    raw.iter().map(|s| UnitId::from_raw(*s)).collect()
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn missing_file_loads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("progress.json"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn save_then_load_returns_sorted_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("progress.json"));
    store.save(&ids(&["Genesis-2", "Exodus-1", "Genesis-1"])).unwrap();

    let loaded = store.load().unwrap().unwrap();
    let raw: Vec<&str> = loaded.iter().map(UnitId::as_str).collect();
    assert_eq!(raw, ["Exodus-1", "Genesis-1", "Genesis-2"]);
    assert_eq!(entries(&dir.path().join("nested")), ["progress.json"]);
}

#[test]
fn later_saves_replace_earlier_ones() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("progress.json"));
    store.save(&ids(&["Genesis-1", "Genesis-2"])).unwrap();
    store.save(&ids(&["Ruth-4"])).unwrap();
    assert_eq!(store.load().unwrap().unwrap(), vec![UnitId::from_raw("Ruth-4")]);
}

#[test]
fn written_document_is_versioned() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    JsonFileStore::new(&path).save(&ids(&["Jude-1"])).unwrap();

    let doc: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc["version"], PROGRESS_DOCUMENT_VERSION);
    assert_eq!(doc["completed"][0], "Jude-1");
}

#[test]
fn legacy_array_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, r#"["Genesis-1","Leviticus-1"]"#).unwrap();
    let loaded = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(loaded.len(), 2);
}

#[test]
fn corrupt_file_is_a_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, b"{\"completed\": [").unwrap();
    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, ScripturaError::Serde(_)));
}

#[test]
fn unwritable_target_is_a_persistence_error() {
    let dir = tempfile::tempdir().unwrap();
    // a directory sits where the file should go
    let path = dir.path().join("progress.json");
    std::fs::create_dir_all(&path).unwrap();
    let err = JsonFileStore::new(&path).save(&ids(&["Jude-1"])).unwrap_err();
    assert!(matches!(err, ScripturaError::Persistence(_)));
}

#[test]
fn failed_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::create_dir_all(&path).unwrap();
    let store = JsonFileStore::new(&path);

    assert!(store.save(&ids(&["Jude-1"])).is_err());
    assert!(store.save(&ids(&["Jude-1"])).is_err());
    assert_eq!(entries(dir.path()), ["progress.json"]);
    assert!(path.is_dir());
}

#[test]
fn concurrent_saves_never_tear_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");

    let handles: Vec<_> = (1..=8)
        .map(|chapter| {
            let store = JsonFileStore::new(&path);
            std::thread::spawn(move || {
                for _ in 0..10 {
                    store.save(&ids(&[format!("Psalms-{chapter}").as_str()])).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let loaded = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded[0].as_str().starts_with("Psalms-"));
    assert_eq!(entries(dir.path()), ["progress.json"]);
}

#[test]
fn in_memory_store_fails_on_demand() {
    let store = InMemoryStore::with_ids(["Genesis-1"]);
    assert_eq!(store.load().unwrap().unwrap().len(), 1);

    store.set_fail_loads(true);
    assert!(store.load().is_err());

    store.set_fail_saves(true);
    assert!(store.save(&ids(&["Genesis-2"])).is_err());
    assert_eq!(store.save_count(), 0);

    store.set_fail_saves(false);
    store.save(&ids(&["Genesis-2"])).unwrap();
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.contents().unwrap(), vec![UnitId::from_raw("Genesis-2")]);
}
