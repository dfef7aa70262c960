#![forbid(unsafe_code)]
#![allow(dead_code)]

use ic_core::ids::UserId;
use ic_core::model::Caller;
use ic_storage::SqliteStore;
use rusqlite::Connection;
use rusqlite::types::Value;
use tempfile::TempDir;

/// A fresh store with two registered users. The store is dropped before its directory.
pub struct Fixture {
    pub store: SqliteStore,
    pub alice: Caller,
    pub bob: Caller,
    _dir: TempDir,
}

pub fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut store = SqliteStore::open(dir.path()).expect("open store");
    let alice = store.create_user("alice").expect("alice");
    let bob = store.create_user("bob").expect("bob");
    Fixture {
        store,
        alice: Caller::new(alice.id),
        bob: Caller::new(bob.id),
        _dir: dir,
    }
}

/// Side connection for seeding rows the store does not own and for inspecting tables.
pub fn raw(store: &SqliteStore) -> Connection {
    Connection::open(store.db_path()).expect("raw connection")
}

pub fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .expect("count rows")
}

/// Every row of a table, every column, in id order.
pub fn snapshot(conn: &Connection, table: &str) -> Vec<Vec<Value>> {
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {table} ORDER BY id"))
        .expect("prepare snapshot");
    let columns = stmt.column_count();
    stmt.query_map([], |row| {
        (0..columns)
            .map(|idx| row.get::<_, Value>(idx))
            .collect::<Result<Vec<_>, _>>()
    })
    .expect("query snapshot")
    .collect::<Result<Vec<_>, _>>()
    .expect("read snapshot")
}

pub fn stranger() -> Caller {
    Caller::new(UserId::new(9_999))
}
