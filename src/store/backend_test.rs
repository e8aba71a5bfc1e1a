use super::*;

#[test]
fn file_backend_round_trips_values() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path());

    assert_eq!(backend.get("searchHistory"), None);
    backend.set("searchHistory", r#"["alpha","beta"]"#).unwrap();
    assert_eq!(backend.get("searchHistory").as_deref(), Some(r#"["alpha","beta"]"#));
}

#[test]
fn file_backend_set_overwrites_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path());

    backend.set("lastQuery", "\"first\"").unwrap();
    backend.set("lastQuery", "\"second\"").unwrap();
    assert_eq!(backend.get("lastQuery").as_deref(), Some("\"second\""));
}

#[test]
fn file_backend_remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path());

    backend.set("readingList", "[]").unwrap();
    backend.remove("readingList").unwrap();
    assert_eq!(backend.get("readingList"), None);
    backend.remove("readingList").unwrap();
}

#[test]
fn file_backend_creates_data_dir_on_first_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested").join("data");
    let backend = FileBackend::new(&nested);

    backend.set("lastQuery", "\"q\"").unwrap();
    assert!(nested.join("lastQuery.json").is_file());
}

#[test]
fn file_backend_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path());

    backend.set("searchHistory", "[]").unwrap();
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["searchHistory.json"]);
}

#[test]
fn memory_backend_round_trips_values() {
    let backend = MemoryBackend::new();
    assert_eq!(backend.get("k"), None);
    backend.set("k", "v").unwrap();
    assert_eq!(backend.get("k").as_deref(), Some("v"));
    backend.remove("k").unwrap();
    assert_eq!(backend.get("k"), None);
}
