#![forbid(unsafe_code)]

use ck_storage::{CustomerInsertRequest, SqliteStore, StoreConfig, StoreError};
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("ck_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn alice() -> CustomerInsertRequest {
    CustomerInsertRequest {
        name: "Alice Wonderland".to_string(),
        birthday: Some("1990-05-15".to_string()),
        email: Some("alice@example.com".to_string()),
        phone_number: Some("555-123-4567".to_string()),
        address: Some("10 Tea Party Lane, Fantasyland".to_string()),
        preferred_contact: Some("email".to_string()),
    }
}

fn bob() -> CustomerInsertRequest {
    CustomerInsertRequest {
        name: "Bob The Builder".to_string(),
        birthday: Some("1975-12-01".to_string()),
        email: Some("bob@buildit.com".to_string()),
        phone_number: Some("555-987-6543".to_string()),
        address: Some("20 Tool Box Road, Fixit City".to_string()),
        preferred_contact: Some("phone".to_string()),
    }
}

#[test]
fn open_twice_is_idempotent() {
    let storage_dir = temp_dir("open_twice_is_idempotent");
    let config = StoreConfig::new(&storage_dir);

    let mut store = SqliteStore::open(&config).expect("first open");
    store.insert(alice()).expect("insert");
    drop(store);

    // Second open reruns the schema install against the existing file.
    let store = SqliteStore::open(&config).expect("second open");
    let rows = store.list_all().expect("list all");
    assert_eq!(rows.len(), 1, "reopen must not lose or duplicate rows");
}

#[test]
fn fresh_store_lists_empty() {
    let storage_dir = temp_dir("fresh_store_lists_empty");
    let store = SqliteStore::open(&StoreConfig::new(&storage_dir)).expect("open store");
    let rows = store.list_all().expect("list all");
    assert!(rows.is_empty(), "expected no rows, found {}", rows.len());
}

#[test]
fn insert_round_trips_full_record() {
    let storage_dir = temp_dir("insert_round_trips_full_record");
    let mut store = SqliteStore::open(&StoreConfig::new(&storage_dir)).expect("open store");

    let id = store.insert(alice()).expect("insert alice");
    let rows = store.list_all().expect("list all");
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.id, id);
    assert_eq!(row.name, "Alice Wonderland");
    assert_eq!(row.birthday.as_deref(), Some("1990-05-15"));
    assert_eq!(row.email.as_deref(), Some("alice@example.com"));
    assert_eq!(row.phone_number.as_deref(), Some("555-123-4567"));
    assert_eq!(row.address.as_deref(), Some("10 Tea Party Lane, Fantasyland"));
    assert_eq!(row.preferred_contact.as_deref(), Some("email"));
}

#[test]
fn successive_inserts_assign_increasing_ids() {
    let storage_dir = temp_dir("successive_inserts_assign_increasing_ids");
    let mut store = SqliteStore::open(&StoreConfig::new(&storage_dir)).expect("open store");

    let first = store.insert(alice()).expect("insert alice");
    let second = store.insert(bob()).expect("insert bob");
    assert!(
        second > first,
        "expected increasing ids, got {first} then {second}"
    );

    let rows = store.list_all().expect("list all");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first);
    assert_eq!(rows[1].id, second);
}

#[test]
fn empty_name_is_rejected_without_a_row() {
    let storage_dir = temp_dir("empty_name_is_rejected_without_a_row");
    let mut store = SqliteStore::open(&StoreConfig::new(&storage_dir)).expect("open store");

    for name in ["", "   "] {
        let err = store
            .insert(CustomerInsertRequest {
                name: name.to_string(),
                ..Default::default()
            })
            .expect_err("empty name must fail");
        match err {
            StoreError::InvalidInput(message) => {
                assert_eq!(message, "name must not be empty");
            }
            other => panic!("expected InvalidInput error, got {other:?}"),
        }
    }

    let rows = store.list_all().expect("list all");
    assert!(rows.is_empty(), "rejected insert must not leave a row");
}

#[test]
fn unknown_preferred_contact_is_rejected() {
    let storage_dir = temp_dir("unknown_preferred_contact_is_rejected");
    let mut store = SqliteStore::open(&StoreConfig::new(&storage_dir)).expect("open store");

    let mut request = alice();
    request.preferred_contact = Some("pigeon".to_string());
    let err = store.insert(request).expect_err("unknown channel must fail");
    assert!(err.is_validation(), "expected validation error, got {err:?}");

    let rows = store.list_all().expect("list all");
    assert!(rows.is_empty());
}

#[test]
fn preferred_contact_is_normalized_to_lowercase() {
    let storage_dir = temp_dir("preferred_contact_is_normalized_to_lowercase");
    let mut store = SqliteStore::open(&StoreConfig::new(&storage_dir)).expect("open store");

    // Form frontends submit capitalized labels.
    let mut request = alice();
    request.preferred_contact = Some(" Email ".to_string());
    store.insert(request).expect("insert");

    let rows = store.list_all().expect("list all");
    assert_eq!(rows[0].preferred_contact.as_deref(), Some("email"));
}

#[test]
fn malformed_birthday_is_rejected() {
    let storage_dir = temp_dir("malformed_birthday_is_rejected");
    let mut store = SqliteStore::open(&StoreConfig::new(&storage_dir)).expect("open store");

    for bad in ["15-05-1990", "1990-13-01", "1990-02-30", "yesterday"] {
        let mut request = alice();
        request.birthday = Some(bad.to_string());
        let err = store
            .insert(request)
            .expect_err("malformed birthday must fail");
        assert!(err.is_validation(), "expected validation error, got {err:?}");
    }

    let rows = store.list_all().expect("list all");
    assert!(rows.is_empty());
}

#[test]
fn blank_optional_fields_are_stored_as_null() {
    let storage_dir = temp_dir("blank_optional_fields_are_stored_as_null");
    let mut store = SqliteStore::open(&StoreConfig::new(&storage_dir)).expect("open store");

    store
        .insert(CustomerInsertRequest {
            name: "  Carol  ".to_string(),
            birthday: Some("   ".to_string()),
            email: Some(String::new()),
            phone_number: None,
            address: Some("  1 Main St ".to_string()),
            preferred_contact: Some(String::new()),
        })
        .expect("insert");

    let rows = store.list_all().expect("list all");
    let row = &rows[0];
    assert_eq!(row.name, "Carol");
    assert_eq!(row.birthday, None);
    assert_eq!(row.email, None);
    assert_eq!(row.phone_number, None);
    assert_eq!(row.address.as_deref(), Some("1 Main St"));
    assert_eq!(row.preferred_contact, None);
}

#[test]
fn read_only_open_requires_an_existing_database() {
    let storage_dir = temp_dir("read_only_open_requires_an_existing_database");

    let err = SqliteStore::open_read_only(&StoreConfig::new(&storage_dir))
        .err()
        .expect("read-only open of a missing file must fail");
    assert!(!err.is_validation(), "expected storage error, got {err:?}");
}

#[test]
fn read_only_store_sees_writer_rows() {
    let storage_dir = temp_dir("read_only_store_sees_writer_rows");
    let config = StoreConfig::new(&storage_dir);

    let mut store = SqliteStore::open(&config).expect("open store");
    store.insert(alice()).expect("insert alice");
    store.insert(bob()).expect("insert bob");
    drop(store);

    let viewer = SqliteStore::open_read_only(&config).expect("open read-only");
    let rows = viewer.list_all().expect("list all");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Alice Wonderland");
    assert_eq!(rows[1].name, "Bob The Builder");
}
