use sqlx::SqlitePool;

use crate::error::{DbError, Result};

/// A book row as stored; `seller_id` is null for unowned books
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
    pub seller_id: Option<i64>,
}

/// Fields required to insert a book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
    pub seller_id: Option<i64>,
}

/// Mutable book fields; only `id` is fixed after creation
#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
    pub seller_id: Option<i64>,
}

/// Data access for the books table
#[derive(Debug, Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a book and return the stored row. A `seller_id` pointing at
    /// a missing seller surfaces as [`DbError::Conflict`].
    #[tracing::instrument(skip(self, new), fields(title = %new.title))]
    pub async fn create_book(&self, new: NewBook) -> Result<BookRecord> {
        sqlx::query_as(
            "INSERT INTO books (title, author, year, pages, seller_id) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING id, title, author, year, pages, seller_id",
        )
        .bind(&new.title)
        .bind(&new.author)
        .bind(new.year)
        .bind(new.pages)
        .bind(new.seller_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from_write)
    }

    /// All books in insertion order
    #[tracing::instrument(skip(self))]
    pub async fn list_books(&self) -> Result<Vec<BookRecord>> {
        let books = sqlx::query_as(
            "SELECT id, title, author, year, pages, seller_id FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_book(&self, id: i64) -> Result<Option<BookRecord>> {
        let book = sqlx::query_as(
            "SELECT id, title, author, year, pages, seller_id FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Overwrite the mutable book fields, returning the updated row, or
    /// `None` when no book with the id exists.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_book(&self, id: i64, update: BookUpdate) -> Result<Option<BookRecord>> {
        let updated = sqlx::query_as(
            "UPDATE books SET title = ?, author = ?, year = ?, pages = ?, seller_id = ? \
             WHERE id = ? \
             RETURNING id, title, author, year, pages, seller_id",
        )
        .bind(&update.title)
        .bind(&update.author)
        .bind(update.year)
        .bind(update.pages)
        .bind(update.seller_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from_write)?;

        Ok(updated)
    }

    /// Returns false when no book with the id exists
    #[tracing::instrument(skip(self))]
    pub async fn delete_book(&self, id: i64) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sellers::{NewSeller, SellersRepository};
    use crate::testing::seed_pool;

    fn mziri(seller_id: Option<i64>) -> NewBook {
        NewBook {
            title: "Mziri".to_string(),
            author: "Lermontov".to_string(),
            year: 1997,
            pages: 104,
            seller_id,
        }
    }

    #[tokio::test]
    async fn create_without_owner() {
        let pool = seed_pool().await;
        let repo = BooksRepository::new(pool);

        let book = repo.create_book(mziri(None)).await.unwrap();

        assert!(book.id > 0);
        assert_eq!(book.title, "Mziri");
        assert_eq!(book.seller_id, None);
    }

    #[tokio::test]
    async fn create_with_missing_seller_is_a_conflict() {
        let pool = seed_pool().await;
        let repo = BooksRepository::new(pool);

        let err = repo.create_book(mziri(Some(404))).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_can_reassign_owner() {
        let pool = seed_pool().await;
        let sellers = SellersRepository::new(pool.clone());
        let repo = BooksRepository::new(pool);

        let seller = sellers
            .create_seller(NewSeller {
                first_name: "Maria".to_string(),
                last_name: "Kuznetsova".to_string(),
                e_mail: "kuznetsmari@yandex.ru".to_string(),
                password: "VmK!+/*&15".to_string(),
            })
            .await
            .unwrap();
        let book = repo.create_book(mziri(None)).await.unwrap();

        let updated = repo
            .update_book(
                book.id,
                BookUpdate {
                    title: "Mtsyri".to_string(),
                    author: book.author.clone(),
                    year: 1840,
                    pages: 112,
                    seller_id: Some(seller.id),
                },
            )
            .await
            .unwrap()
            .expect("book exists");

        assert_eq!(updated.id, book.id);
        assert_eq!(updated.title, "Mtsyri");
        assert_eq!(updated.year, 1840);
        assert_eq!(updated.seller_id, Some(seller.id));
    }

    #[tokio::test]
    async fn update_absent_book_is_none() {
        let pool = seed_pool().await;
        let repo = BooksRepository::new(pool);

        let updated = repo
            .update_book(
                404,
                BookUpdate {
                    title: "X".to_string(),
                    author: "Y".to_string(),
                    year: 2000,
                    pages: 1,
                    seller_id: None,
                },
            )
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let pool = seed_pool().await;
        let repo = BooksRepository::new(pool);

        let kept = repo.create_book(mziri(None)).await.unwrap();
        let gone = repo.create_book(mziri(None)).await.unwrap();

        assert!(repo.delete_book(gone.id).await.unwrap());
        assert!(!repo.delete_book(gone.id).await.unwrap());

        let books = repo.list_books().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, kept.id);
    }
}
