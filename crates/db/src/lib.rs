//! Persistence layer for the bookstore service, SQLite via sqlx.
//!
//! Each entity gets a repository struct holding a [`sqlx::SqlitePool`]
//! clone. Lookups return `Result<Option<T>>` so absence stays a normal
//! outcome; deletes return `Result<bool>` (true if a row was removed);
//! constraint violations are translated into [`DbError::Conflict`] instead
//! of leaking raw driver errors.

pub mod books;
pub mod error;
pub mod pool;
pub mod sellers;

#[cfg(test)]
pub(crate) mod testing;

pub use books::{BookRecord, BookUpdate, BooksRepository, NewBook};
pub use error::{DbError, Result};
pub use pool::create_pool;
pub use sellers::{NewSeller, SellerRecord, SellerUpdate, SellersRepository};
