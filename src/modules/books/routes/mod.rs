//! HTTP handlers for the books resource

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bookstore_db::{BookUpdate, BooksRepository, NewBook};
use bookstore_http::error::AppError;

use super::models::{IncomingBook, ReturnedAllBooks, ReturnedBook};

/// Add a book, optionally owned by an existing seller
pub async fn create_book(
    State(repository): State<BooksRepository>,
    Json(book): Json<IncomingBook>,
) -> Result<(StatusCode, Json<ReturnedBook>), AppError> {
    book.validate()?;

    let created = repository
        .create_book(NewBook {
            title: book.title,
            author: book.author,
            year: book.year,
            pages: book.pages,
            seller_id: book.seller_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Every book, wrapped in a `books` container
pub async fn get_all_books(
    State(repository): State<BooksRepository>,
) -> Result<Json<ReturnedAllBooks>, AppError> {
    let books = repository.list_books().await?;

    Ok(Json(ReturnedAllBooks {
        books: books.into_iter().map(Into::into).collect(),
    }))
}

/// One book by id
pub async fn get_book(
    State(repository): State<BooksRepository>,
    Path(book_id): Path<i64>,
) -> Result<Json<ReturnedBook>, AppError> {
    let book = repository
        .get_book(book_id)
        .await?
        .ok_or_else(|| AppError::not_found("book not found"))?;

    Ok(Json(book.into()))
}

/// Overwrite every mutable book field; the body's `id` is ignored, the
/// path parameter is authoritative
pub async fn update_book(
    State(repository): State<BooksRepository>,
    Path(book_id): Path<i64>,
    Json(new_book_data): Json<ReturnedBook>,
) -> Result<Json<ReturnedBook>, AppError> {
    new_book_data.validate()?;

    let updated = repository
        .update_book(
            book_id,
            BookUpdate {
                title: new_book_data.title,
                author: new_book_data.author,
                year: new_book_data.year,
                pages: new_book_data.pages,
                seller_id: new_book_data.seller_id,
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("book not found"))?;

    Ok(Json(updated.into()))
}

/// Remove a book
pub async fn delete_book(
    State(repository): State<BooksRepository>,
    Path(book_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repository.delete_book(book_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("book not found"))
    }
}
