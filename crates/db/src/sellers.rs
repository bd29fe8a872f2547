use sqlx::SqlitePool;

use crate::books::BookRecord;
use crate::error::{DbError, Result};

/// A seller row as stored. `password` stays inside the service; callers
/// map records into wire shapes that omit it.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SellerRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub password: String,
}

/// Fields required to insert a seller
#[derive(Debug, Clone)]
pub struct NewSeller {
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub password: String,
}

/// Mutable seller fields; `id` and `password` are fixed after creation
#[derive(Debug, Clone)]
pub struct SellerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
}

/// Data access for the sellers table
#[derive(Debug, Clone)]
pub struct SellersRepository {
    pool: SqlitePool,
}

impl SellersRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a seller and return the stored row, generated id included.
    /// A duplicate `e_mail` surfaces as [`DbError::Conflict`].
    #[tracing::instrument(skip(self, new), fields(e_mail = %new.e_mail))]
    pub async fn create_seller(&self, new: NewSeller) -> Result<SellerRecord> {
        sqlx::query_as(
            "INSERT INTO sellers (first_name, last_name, e_mail, password) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, first_name, last_name, e_mail, password",
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.e_mail)
        .bind(&new.password)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from_write)
    }

    /// All sellers in insertion order
    #[tracing::instrument(skip(self))]
    pub async fn list_sellers(&self) -> Result<Vec<SellerRecord>> {
        let sellers = sqlx::query_as(
            "SELECT id, first_name, last_name, e_mail, password FROM sellers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(sellers)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_seller(&self, id: i64) -> Result<Option<SellerRecord>> {
        let seller = sqlx::query_as(
            "SELECT id, first_name, last_name, e_mail, password FROM sellers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(seller)
    }

    /// Fetch a seller together with every book it owns, in one call
    #[tracing::instrument(skip(self))]
    pub async fn get_seller_with_books(
        &self,
        id: i64,
    ) -> Result<Option<(SellerRecord, Vec<BookRecord>)>> {
        let Some(seller) = self.get_seller(id).await? else {
            return Ok(None);
        };

        let books = sqlx::query_as(
            "SELECT id, title, author, year, pages, seller_id \
             FROM books WHERE seller_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some((seller, books)))
    }

    /// Overwrite the mutable seller fields, returning the updated row, or
    /// `None` when no seller with the id exists.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_seller(
        &self,
        id: i64,
        update: SellerUpdate,
    ) -> Result<Option<SellerRecord>> {
        let updated = sqlx::query_as(
            "UPDATE sellers SET first_name = ?, last_name = ?, e_mail = ? \
             WHERE id = ? \
             RETURNING id, first_name, last_name, e_mail, password",
        )
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.e_mail)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from_write)?;

        Ok(updated)
    }

    /// Delete a seller, leaving its books behind with `seller_id` cleared.
    /// Both statements run in one transaction. Returns false when no seller
    /// with the id exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_seller(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE books SET seller_id = NULL WHERE seller_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM sellers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(deleted > 0)
    }
}
