//! Shared fixtures for repository tests: a single-connection in-memory
//! pool with the sellers and books schemas applied.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub(crate) async fn seed_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    sqlx::query(
        "CREATE TABLE sellers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            e_mail TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("sellers schema");

    sqlx::query(
        "CREATE TABLE books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            year INTEGER NOT NULL,
            pages INTEGER NOT NULL,
            seller_id INTEGER REFERENCES sellers(id)
        )",
    )
    .execute(&pool)
    .await
    .expect("books schema");

    pool
}
