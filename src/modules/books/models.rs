use serde::{Deserialize, Serialize};

use bookstore_db::BookRecord;
use bookstore_http::error::AppError;

use crate::modules::validation::{check_positive, check_text};

const MAX_TITLE_LEN: usize = 100;
const MAX_AUTHOR_LEN: usize = 100;

/// Payload for adding a book; `seller_id` is optional, a book need not
/// belong to a seller
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingBook {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
    pub seller_id: Option<i64>,
}

impl IncomingBook {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut details = Vec::new();
        check_text(&mut details, "title", &self.title, MAX_TITLE_LEN);
        check_text(&mut details, "author", &self.author, MAX_AUTHOR_LEN);
        check_positive(&mut details, "year", self.year);
        check_positive(&mut details, "pages", self.pages);

        if details.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                details,
                "book payload failed validation",
            ))
        }
    }
}

/// Book fields exposed to clients, `seller_id` echoed back as stored.
/// Doubles as the update payload; its `id` is ignored in favor of the
/// path parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnedBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
    pub seller_id: Option<i64>,
}

impl ReturnedBook {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut details = Vec::new();
        check_text(&mut details, "title", &self.title, MAX_TITLE_LEN);
        check_text(&mut details, "author", &self.author, MAX_AUTHOR_LEN);
        check_positive(&mut details, "year", self.year);
        check_positive(&mut details, "pages", self.pages);

        if details.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                details,
                "book payload failed validation",
            ))
        }
    }
}

impl From<BookRecord> for ReturnedBook {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            year: record.year,
            pages: record.pages,
            seller_id: record.seller_id,
        }
    }
}

/// Container shape for the list endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ReturnedAllBooks {
    pub books: Vec<ReturnedBook>,
}
