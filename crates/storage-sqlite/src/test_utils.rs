//! Temporary databases for repository tests.

use std::sync::Arc;

use diesel::prelude::*;
use tempfile::TempDir;

use crate::db::{create_pool, get_connection, run_migrations, spawn_writer, DbPool, WriteHandle};
use crate::schema::{categories, users};

pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    // Keeps the database file alive for the test's duration.
    _dir: TempDir,
}

/// Migrated database in a fresh temp dir. Must be called inside a Tokio runtime.
pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("test.db").to_string_lossy().to_string();
    let pool = create_pool(&path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());
    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

pub fn seed_user(db: &TestDb, email: &str) -> i64 {
    let mut conn = get_connection(&db.pool).expect("Failed to get connection");
    diesel::insert_into(users::table)
        .values((
            users::email.eq(email),
            users::password_hash.eq("hash"),
            users::name.eq("Test User"),
            users::created_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .returning(users::id)
        .get_result(&mut conn)
        .expect("Failed to seed user")
}

pub fn seed_category(db: &TestDb, name: &str, kind: &str) -> i64 {
    let mut conn = get_connection(&db.pool).expect("Failed to get connection");
    diesel::insert_into(categories::table)
        .values((categories::name.eq(name), categories::kind.eq(kind)))
        .returning(categories::id)
        .get_result(&mut conn)
        .expect("Failed to seed category")
}
