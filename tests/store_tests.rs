// Unit tests for the session store: ordering, deletion, merge and export.

use echonote::{ExportDocument, SessionStore};

#[test]
fn test_add_inserts_newest_first() {
    let mut store = SessionStore::new();
    let a = store.add("first pass", "en-US");
    let b = store.add("second pass", "en-US");

    let records = store.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, b.id, "newest record must be first");
    assert_eq!(records[1].id, a.id);
    assert!(records[0].created_at >= records[1].created_at);
}

#[test]
fn test_record_ids_are_unique() {
    let mut store = SessionStore::new();
    let a = store.add("one", "en-US");
    let b = store.add("two", "en-US");
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("sess_"));
}

#[test]
fn test_delete_removes_matching_record() {
    let mut store = SessionStore::new();
    let a = store.add("keep me", "en-US");
    let b = store.add("drop me", "en-US");

    assert!(store.delete(&b.id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].id, a.id);
    assert!(store.get(&b.id).is_none());
}

#[test]
fn test_delete_unknown_id_is_idempotent() {
    let mut store = SessionStore::new();
    store.add("only record", "en-US");
    let before: Vec<String> = store.records().iter().map(|r| r.id.clone()).collect();

    assert!(!store.delete("sess_does_not_exist"));
    assert!(!store.delete("sess_does_not_exist"));

    let after: Vec<String> = store.records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(before, after, "history must be unchanged");
}

#[test]
fn test_merge_all_joins_in_history_order_without_mutation() {
    let mut store = SessionStore::new();
    store.add("B", "en-US");
    store.add("A", "en-US"); // A is newest, so it comes first

    let merged = store.merge_all_to_text();
    assert_eq!(merged, "A\n\nB");

    // Merging must not alter order or contents.
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].text, "A");
    assert_eq!(store.records()[1].text, "B");
    assert_eq!(store.merge_all_to_text(), "A\n\nB");
}

#[test]
fn test_merge_all_on_empty_store() {
    let store = SessionStore::new();
    assert_eq!(store.merge_all_to_text(), "");
}

#[test]
fn test_serialize_snapshot_shape() {
    let mut store = SessionStore::new();
    store.add("older text", "en-US");
    store.add("newer text", "de-DE");

    let document = store.serialize("live text");
    let json: serde_json::Value =
        serde_json::from_str(&document.to_json().unwrap()).unwrap();

    assert_eq!(json["live"], "live text");
    let sessions = json["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["text"], "newer text", "sessions must be newest first");
    assert_eq!(sessions[0]["lang"], "de-DE");
    assert_eq!(sessions[1]["text"], "older text");

    // Field names are part of the export contract.
    let first = sessions[0].as_object().unwrap();
    for key in ["id", "text", "createdAt", "lang"] {
        assert!(first.contains_key(key), "missing export field {key}");
    }

    // createdAt must be a parseable ISO-8601 timestamp.
    let created_at = sessions[0]["createdAt"].as_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(created_at).expect("createdAt must be ISO-8601");
}

#[test]
fn test_export_document_roundtrip_through_file() {
    let mut store = SessionStore::new();
    store.add("persisted text", "en-US");
    let document = store.serialize("");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("echonote.json");
    std::fs::write(&path, document.to_json().unwrap()).unwrap();

    let restored: ExportDocument =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored.live, "");
    assert_eq!(restored.sessions.len(), 1);
    assert_eq!(restored.sessions[0].text, "persisted text");
    assert_eq!(restored.sessions[0].language, "en-US");
}
