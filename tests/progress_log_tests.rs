use fitstart::{Draft, Entry, MemoryStorage, ProgressLog, ValidationError};

const KEY: &str = "fitstart_progress_v1";

fn draft(date: &str, weight: &str, workouts: &str) -> Draft {
    Draft::new(date, weight, workouts, None)
}

fn stored(storage: &MemoryStorage) -> Vec<Entry> {
    let raw = storage.raw(KEY).expect("slot written");
    serde_json::from_str(raw).expect("valid json")
}

fn entry(id: &str, date: &str, created_at: i64) -> Entry {
    Entry {
        id: id.to_string(),
        date: date.parse().expect("iso date"),
        weight_kg: 70.0,
        workouts: 3,
        notes: String::new(),
        created_at,
    }
}

#[test]
fn test_add_normalizes_and_persists() {
    let mut storage = MemoryStorage::new();
    {
        let mut log = ProgressLog::load(&mut storage, KEY);
        assert_eq!(log.count(), 0);

        let e = log
            .add(&Draft::new(
                "2024-03-01",
                "72.53",
                "4",
                Some(" feeling good ".to_string()),
            ))
            .expect("valid draft");

        assert_eq!(e.date_str(), "2024-03-01");
        assert_eq!(e.weight_kg, 72.5);
        assert_eq!(e.workouts, 4);
        assert_eq!(e.notes, "feeling good");
        assert!(!e.id.is_empty());

        assert_eq!(log.count(), 1);
        assert_eq!(log.latest(), Some(&e));
    }

    let saved = stored(&storage);
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].weight_kg, 72.5);
    assert_eq!(saved[0].notes, "feeling good");
}

#[test]
fn test_add_rejects_negative_weight() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);

    let res = log.add(&draft("2024-03-01", "-5", "3"));
    assert_eq!(res, Err(ValidationError::InvalidWeight));
    assert_eq!(log.count(), 0);
}

#[test]
fn test_add_rejects_too_many_workouts() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);

    let res = log.add(&draft("2024-03-01", "70", "20"));
    assert_eq!(res, Err(ValidationError::InvalidWorkouts));
    assert_eq!(log.count(), 0);
}

#[test]
fn test_failed_add_does_not_touch_storage() {
    let mut storage = MemoryStorage::new();
    {
        let mut log = ProgressLog::load(&mut storage, KEY);
        assert!(log.add(&draft("", "70", "3")).is_err());
    }
    assert!(storage.raw(KEY).is_none());
}

#[test]
fn test_new_entries_are_prepended() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);

    let first = log.add(&draft("2024-01-01", "80", "3")).unwrap();
    let second = log.add(&draft("2023-12-01", "81", "2")).unwrap();

    let ids: Vec<&str> = log.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    assert!(second.created_at > first.created_at);
}

#[test]
fn test_ids_are_unique() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);

    for _ in 0..20 {
        log.add(&draft("2024-01-01", "80", "3")).unwrap();
    }

    let mut ids: Vec<&str> = log.entries().iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_latest_prefers_later_date_regardless_of_insertion_order() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);

    let late = log.add(&draft("2024-01-05", "79", "4")).unwrap();
    log.add(&draft("2024-01-01", "80", "3")).unwrap();

    assert_eq!(log.latest().map(|e| e.id.as_str()), Some(late.id.as_str()));

    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);

    log.add(&draft("2024-01-01", "80", "3")).unwrap();
    let late = log.add(&draft("2024-01-05", "79", "4")).unwrap();

    assert_eq!(log.latest().map(|e| e.id.as_str()), Some(late.id.as_str()));
}

#[test]
fn test_latest_same_date_uses_creation_time() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);

    log.add(&draft("2024-02-10", "80", "3")).unwrap();
    let newer = log.add(&draft("2024-02-10", "79.5", "3")).unwrap();

    assert_eq!(log.latest().map(|e| e.id.as_str()), Some(newer.id.as_str()));
}

#[test]
fn test_latest_does_not_reorder_storage() {
    let blob = serde_json::to_string(&vec![
        entry("a", "2024-01-01", 1),
        entry("b", "2024-01-09", 2),
        entry("c", "2024-01-03", 3),
    ])
    .unwrap();
    let storage = MemoryStorage::with_value(KEY, &blob);
    let log = ProgressLog::load(storage, KEY);

    assert_eq!(log.latest().map(|e| e.id.as_str()), Some("b"));
    let ids: Vec<&str> = log.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_latest_full_tie_keeps_storage_order() {
    let blob = serde_json::to_string(&vec![
        entry("first", "2024-01-01", 5),
        entry("second", "2024-01-01", 5),
    ])
    .unwrap();
    let log = ProgressLog::load(MemoryStorage::with_value(KEY, &blob), KEY);

    assert_eq!(log.latest().map(|e| e.id.as_str()), Some("first"));
}

#[test]
fn test_delete_removes_entry() {
    let mut storage = MemoryStorage::new();
    {
        let mut log = ProgressLog::load(&mut storage, KEY);
        let a = log.add(&draft("2024-01-01", "80", "3")).unwrap();
        let b = log.add(&draft("2024-01-05", "79", "4")).unwrap();

        assert!(log.delete(&b.id));
        assert_eq!(log.count(), 1);
        assert!(log.get(&b.id).is_none());
        assert_eq!(log.latest().map(|e| e.id.clone()), Some(a.id.clone()));
    }
    assert_eq!(stored(&storage).len(), 1);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);
    log.add(&draft("2024-01-01", "80", "3")).unwrap();
    let before = log.entries().to_vec();

    assert!(!log.delete("does-not-exist"));
    assert_eq!(log.entries(), before.as_slice());
}

#[test]
fn test_clear_all_requires_confirmation() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);
    log.add(&draft("2024-01-01", "80", "3")).unwrap();
    log.add(&draft("2024-01-02", "80", "3")).unwrap();

    assert!(!log.clear_all(|| false));
    assert_eq!(log.count(), 2);

    assert!(log.clear_all(|| true));
    assert_eq!(log.count(), 0);
    assert!(log.latest().is_none());
}

#[test]
fn test_clear_all_persists_empty_list() {
    let mut storage = MemoryStorage::new();
    {
        let mut log = ProgressLog::load(&mut storage, KEY);
        log.add(&draft("2024-01-01", "80", "3")).unwrap();
        log.clear_all(|| true);
    }
    assert_eq!(storage.raw(KEY), Some("[]"));
}

#[test]
fn test_load_absent_slot_is_empty() {
    let log = ProgressLog::load(MemoryStorage::new(), KEY);
    assert_eq!(log.count(), 0);
    assert!(log.latest().is_none());
}

#[test]
fn test_load_corrupt_blob_is_empty() {
    for blob in ["not json", "{\"id\":\"x\"}", "[{\"id\": 3}]", ""] {
        let log = ProgressLog::load(MemoryStorage::with_value(KEY, blob), KEY);
        assert_eq!(log.count(), 0, "blob {:?}", blob);
    }
}

#[test]
fn test_load_unreadable_storage_is_empty() {
    let mut storage = MemoryStorage::with_value(KEY, "[]");
    storage.fail_reads = true;
    let log = ProgressLog::load(storage, KEY);
    assert!(log.is_empty());
}

#[test]
fn test_load_defaults_missing_optional_fields() {
    let blob = r#"[{"id":"x1","date":"2024-05-01","weightKg":75.5,"workouts":2}]"#;
    let log = ProgressLog::load(MemoryStorage::with_value(KEY, blob), KEY);

    let e = log.get("x1").expect("entry loaded");
    assert_eq!(e.notes, "");
    assert_eq!(e.created_at, 0);
    assert_eq!(e.weight_kg, 75.5);
}

#[test]
fn test_load_drops_invalid_and_duplicate_records() {
    let blob = r#"[
        {"id":"ok","date":"2024-05-01","weightKg":75.5,"workouts":2,"notes":"","createdAt":1},
        {"id":"ok","date":"2024-05-02","weightKg":75.0,"workouts":2,"notes":"","createdAt":2},
        {"id":"neg","date":"2024-05-03","weightKg":-1.0,"workouts":2,"notes":"","createdAt":3},
        {"id":"many","date":"2024-05-04","weightKg":70.0,"workouts":30,"notes":"","createdAt":4}
    ]"#;
    let log = ProgressLog::load(MemoryStorage::with_value(KEY, blob), KEY);

    assert_eq!(log.count(), 1);
    assert_eq!(log.entries()[0].date_str(), "2024-05-01");
}

#[test]
fn test_save_then_load_round_trip() {
    let mut storage = MemoryStorage::new();
    let original = {
        let mut log = ProgressLog::load(&mut storage, KEY);
        log.add(&draft("2024-01-01", "80.04", "3")).unwrap();
        log.add(&Draft::new("2024-01-02", "80.06", "2.5", Some("légère".into())))
            .unwrap();
        log.add(&draft("2024-01-03", "79", "")).unwrap();
        log.entries().to_vec()
    };

    let reloaded = ProgressLog::load(&mut storage, KEY);
    assert_eq!(reloaded.entries(), original.as_slice());
    assert_eq!(original[1].weight_kg, 80.1);
    assert_eq!(original[1].workouts, 3);
    assert_eq!(original[2].weight_kg, 80.0);
    assert_eq!(original[0].workouts, 0);
}

#[test]
fn test_serialized_field_names() {
    let mut storage = MemoryStorage::new();
    {
        let mut log = ProgressLog::load(&mut storage, KEY);
        log.add(&draft("2024-01-01", "80", "3")).unwrap();
    }

    let value: serde_json::Value = serde_json::from_str(storage.raw(KEY).unwrap()).unwrap();
    let obj = value[0].as_object().expect("record object");
    for field in ["id", "date", "weightKg", "workouts", "notes", "createdAt"] {
        assert!(obj.contains_key(field), "missing {}", field);
    }
    assert_eq!(obj["date"], "2024-01-01");
}

#[test]
fn test_write_failures_are_swallowed() {
    let mut storage = MemoryStorage::new();
    storage.fail_writes = true;
    let mut log = ProgressLog::load(storage, KEY);

    let e = log.add(&draft("2024-01-01", "80", "3")).expect("add still succeeds");
    assert_eq!(log.count(), 1);
    assert!(log.delete(&e.id));
    assert!(log.is_empty());
    assert!(log.save().is_err());
    assert!(log.storage().raw(KEY).is_none());
}

#[test]
fn test_summary() {
    let mut storage = MemoryStorage::new();
    let mut log = ProgressLog::load(&mut storage, KEY);

    let empty = log.summary();
    assert_eq!(empty.total_entries, 0);
    assert_eq!(empty.latest_weight(), None);

    log.add(&draft("2024-01-05", "79.8", "4")).unwrap();
    log.add(&draft("2024-01-01", "80.2", "3")).unwrap();

    let s = log.summary();
    assert_eq!(s.total_entries, 2);
    assert_eq!(s.latest_weight(), Some(79.8));
    assert_eq!(s.latest_workouts(), Some(4));
}

#[test]
fn test_load_keeps_good_records_next_to_bad_typed_ones() {
    let blob = r#"[
        {"id":"good","date":"2024-05-01","weightKg":75.5,"workouts":2,"notes":"","createdAt":1},
        {"id":"neg","date":"2024-05-02","weightKg":75.0,"workouts":-1,"notes":"","createdAt":2},
        {"id":"baddate","date":"05/03/2024","weightKg":75.0,"workouts":2,"notes":"","createdAt":3},
        {"id":"nonum","date":"2024-05-04","weightKg":"heavy","workouts":2,"createdAt":4},
        "not a record"
    ]"#;
    let log = ProgressLog::load(MemoryStorage::with_value(KEY, blob), KEY);

    assert_eq!(log.count(), 1);
    assert!(log.get("good").is_some());
}

#[test]
fn test_load_null_notes_read_as_empty() {
    let blob = r#"[{"id":"x1","date":"2024-05-01","weightKg":75.5,"workouts":2,"notes":null,"createdAt":7}]"#;
    let log = ProgressLog::load(MemoryStorage::with_value(KEY, blob), KEY);

    assert_eq!(log.count(), 1);
    assert_eq!(log.get("x1").map(|e| e.notes.as_str()), Some(""));
}

#[test]
fn test_add_after_max_created_at_does_not_overflow() {
    let blob = serde_json::to_string(&vec![entry("far", "2024-01-01", i64::MAX)]).unwrap();
    let mut log = ProgressLog::load(MemoryStorage::with_value(KEY, &blob), KEY);
    assert_eq!(log.count(), 1);

    let e = log.add(&draft("2024-01-02", "80", "3")).expect("add succeeds");
    assert_eq!(e.created_at, i64::MAX);
    assert_eq!(log.count(), 2);
    assert_eq!(log.latest().map(|x| x.id.as_str()), Some(e.id.as_str()));
}
