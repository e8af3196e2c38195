use grocery_core::db::migrations::latest_version;
use grocery_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

const ITEMS_V1_SQL: &str = include_str!("../src/db/migrations/0001_items.sql");

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name;")
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names
}

#[test]
fn fresh_database_has_items_and_ui_state_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    let tables = table_names(&conn);
    assert!(tables.iter().any(|name| name == "items"), "{tables:?}");
    assert!(tables.iter().any(|name| name == "ui_state"), "{tables:?}");
}

#[test]
fn version_one_list_is_upgraded_without_losing_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old-list.db");

    let old = Connection::open(&path).unwrap();
    old.execute_batch(ITEMS_V1_SQL).unwrap();
    old.execute_batch("PRAGMA user_version = 1;").unwrap();
    old.execute(
        "INSERT INTO items (id, title, is_completed)
         VALUES ('5f0c6a4e-8d1b-4c3e-9a7f-2b1d0e9c8a76', 'Cereals', 1);",
        [],
    )
    .unwrap();
    drop(old);

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());
    assert!(table_names(&conn).iter().any(|name| name == "ui_state"));
    let (title, done): (String, i64) = conn
        .query_row("SELECT title, is_completed FROM items;", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!((title.as_str(), done), ("Cereals", 1));
    drop(conn);

    let reopened = open_db(&path).unwrap();
    assert_eq!(user_version(&reopened), latest_version());
}

#[test]
fn list_written_by_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 42;")
        .unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(err.to_string().contains("schema v42"));
    assert!(matches!(
        err,
        DbError::SchemaTooNew { found: 42, supported } if supported == latest_version()
    ));
}

#[test]
fn blank_titles_are_rejected_by_the_schema_itself() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO items (id, title, is_completed) VALUES ('x', '   ', 0);",
        [],
    );
    assert!(result.is_err());
}
