use super::*;

#[test]
fn missing_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    assert_eq!(store.load(), None);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("nested").join("token"));
    store.save("t1");
    assert_eq!(store.load().as_deref(), Some("t1"));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "  t2\n").unwrap();
    assert_eq!(FileTokenStore::new(&path).load().as_deref(), Some("t2"));
}

#[test]
fn blank_file_is_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "\n").unwrap();
    assert_eq!(FileTokenStore::new(&path).load(), None);
}

#[test]
fn clear_removes_the_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    store.save("t1");
    store.clear();
    assert!(!store.path().exists());
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn default_path_ends_in_console_dir() {
    assert!(default_token_path().ends_with(".chaos-console/token"));
}
