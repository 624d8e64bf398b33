use std::fs;

use tempfile::TempDir;
use vibelift_sessions::{
    ExerciseLog, HistoryStore, SetEntry, SetType, StoreError, WorkoutSession,
};

fn session(id: &str, date: i64) -> WorkoutSession {
    WorkoutSession {
        id: id.to_string(),
        date,
        day_name: "Day 3 (Legs)".to_string(),
        exercises: vec![ExerciseLog {
            name: "Seated Leg Press".to_string(),
            sets: vec![
                SetEntry::new(SetType::Warmup, "Warmup", 90.0, 12),
                SetEntry::new(SetType::Working, "Working Set 1", 180.0, 10),
            ],
        }],
    }
}

/// Helper: a store pointing at a fresh temp directory.
fn temp_store() -> (TempDir, HistoryStore) {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::with_path(dir.path().join("history.json"));
    (dir, store)
}

#[test]
fn test_load_missing_file_is_empty() {
    let (_dir, store) = temp_store();
    assert!(store.load().is_empty());
}

#[test]
fn test_load_corrupt_file_fails_closed() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "{ not json").unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_load_wrong_shape_fails_closed() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), r#"{"sessions": []}"#).unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_load_reads_browser_format() {
    let (_dir, store) = temp_store();
    let blob = r#"[{"id":"1760000000000","date":1760000000000,"dayName":"Day 1 (Chest/Back)","exercises":[{"name":"Lat Pulldown","sets":[{"weight":40,"reps":12,"type":"warmup","label":"Warmup"},{"weight":60,"reps":10,"type":"working","label":"Working Set 1"}]}]}]"#;
    fs::write(store.path(), blob).unwrap();

    let history = store.load();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].day_name, "Day 1 (Chest/Back)");
    let sets = &history[0].exercises[0].sets;
    assert_eq!(sets[0].set_type, SetType::Warmup);
    assert_eq!(sets[1].set_type, SetType::Working);
    assert_eq!(sets[1].weight, 60.0);
}

#[test]
fn test_load_keeps_negative_reps() {
    let (_dir, store) = temp_store();
    let blob = r#"[
        {"id":"2","date":2000,"dayName":"Day 3 (Legs)","exercises":[{"name":"RDL","sets":[
            {"weight":100,"reps":-5,"type":"working","label":"Working Set 1"}]}]},
        {"id":"1","date":1000,"dayName":"Day 3 (Legs)","exercises":[{"name":"RDL","sets":[
            {"weight":90,"reps":8,"type":"working","label":"Working Set 1"}]}]}
    ]"#;
    fs::write(store.path(), blob).unwrap();

    let history = store.load();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].exercises[0].sets[0].reps, -5);
    assert_eq!(history[0].exercises[0].volume(), -500.0);
}

#[test]
fn test_save_then_load_round_trip() {
    let (_dir, store) = temp_store();
    let history = vec![session("2", 2_000), session("1", 1_000)];

    store.save(&history).unwrap();

    assert_eq!(store.load(), history);
}

#[test]
fn test_save_creates_parent_dirs_and_uses_camel_case() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::with_path(dir.path().join("nested").join("history.json"));

    store.save(&[session("1", 1_000)]).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"dayName\""));
    assert!(raw.contains("\"type\": \"working\""));
    assert!(!dir.path().join("nested").join("history.json.tmp").exists());
}

#[test]
fn test_load_sorts_newest_first() {
    let (_dir, store) = temp_store();
    store
        .save(&[session("old", 1_000), session("new", 3_000), session("mid", 2_000)])
        .unwrap();

    let ids: Vec<String> = store.load().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn test_add_prepends_and_persists() {
    let (_dir, store) = temp_store();
    store.add(session("1", 1_000)).unwrap();

    let next = store.add(session("2", 2_000)).unwrap();

    assert_eq!(next[0].id, "2");
    assert_eq!(next[1].id, "1");
    assert_eq!(store.load(), next);
}

#[test]
fn test_add_backdated_session_keeps_order() {
    let (_dir, store) = temp_store();
    store.add(session("2", 2_000)).unwrap();

    let next = store.add(session("1", 1_000)).unwrap();

    let ids: Vec<&str> = next.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn test_add_non_finite_weight_rejected() {
    let (_dir, store) = temp_store();
    store.add(session("1", 1_000)).unwrap();
    let mut bad = session("2", 2_000);
    bad.exercises[0].sets[1].weight = f64::NAN;

    let err = store.add(bad).unwrap_err();

    assert!(matches!(err, StoreError::NonFiniteWeight { ref id } if id == "2"));
    let history = store.load();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, "1");
}

#[test]
fn test_add_over_corrupt_file_sets_it_aside() {
    let (dir, store) = temp_store();
    fs::write(store.path(), "{ not json").unwrap();

    let next = store.add(session("1", 1_000)).unwrap();

    assert_eq!(next.len(), 1);
    assert_eq!(store.load(), next);
    let kept: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().contains(".corrupt-"))
        .collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(fs::read_to_string(&kept[0]).unwrap(), "{ not json");
}

#[test]
fn test_delete_over_corrupt_file_keeps_original_bytes() {
    let (dir, store) = temp_store();
    fs::write(store.path(), "[{\"id\": 1").unwrap();

    let err = store.delete("1").unwrap_err();

    assert!(matches!(err, StoreError::NotFound(_)));
    let kept = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.to_string_lossy().contains(".corrupt-"))
        .unwrap();
    assert_eq!(fs::read_to_string(kept).unwrap(), "[{\"id\": 1");
}

#[test]
fn test_add_duplicate_id_rejected() {
    let (_dir, store) = temp_store();
    store.add(session("1", 1_000)).unwrap();

    let err = store.add(session("1", 5_000)).unwrap_err();

    assert!(matches!(err, StoreError::DuplicateId(ref id) if id == "1"));
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_delete_removes_session() {
    let (_dir, store) = temp_store();
    store.save(&[session("2", 2_000), session("1", 1_000)]).unwrap();

    let next = store.delete("2").unwrap();

    assert_eq!(next.len(), 1);
    assert_eq!(next[0].id, "1");
    assert!(store.get("2").is_none());
    assert!(store.get("1").is_some());
}

#[test]
fn test_delete_unknown_id() {
    let (_dir, store) = temp_store();
    store.save(&[session("1", 1_000)]).unwrap();

    let err = store.delete("nope").unwrap_err();

    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(store.load().len(), 1);
}
