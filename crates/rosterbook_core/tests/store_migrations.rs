use rosterbook_core::storage::migrations::{apply_migrations, latest_version};
use rosterbook_core::{open_store_in_memory, StorageError};
use rusqlite::Connection;

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn latest_version_is_positive() {
    assert!(latest_version() > 0);
}

#[test]
fn open_store_applies_all_migrations() {
    let conn = open_store_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'local_storage';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table_count, 1);
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = Connection::open_in_memory().unwrap();

    apply_migrations(&mut conn).unwrap();
    let version_after_first = user_version(&conn);

    apply_migrations(&mut conn).unwrap();
    assert_eq!(user_version(&conn), version_after_first);
}

#[test]
fn future_schema_versions_are_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        StorageError::UnsupportedSchemaVersion { .. }
    ));
}
