mod support;

use axum::http::StatusCode;
use serde_json::json;

use bookstore_db::{NewBook, NewSeller};

fn maria() -> NewSeller {
    NewSeller {
        first_name: "Maria".to_string(),
        last_name: "Kuznetsova".to_string(),
        e_mail: "kuznetsmari@yandex.ru".to_string(),
        password: "VmK!+/*&15".to_string(),
    }
}

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
async fn create_unowned_book() {
    let app = support::spawn_app().await;

    let data = json!({
        "title": "Mziri",
        "author": "Lermontov",
        "year": 1997,
        "pages": 104
    });
    let (status, body) = support::send(&app.router, "POST", "/api/v1/books/", Some(data)).await;

    assert_eq!(status, StatusCode::CREATED);

    let result = support::parse_json(&body);
    assert!(result["id"].as_i64().expect("integer id") > 0);
    assert_eq!(result["title"], "Mziri");
    assert_eq!(result["author"], "Lermontov");
    assert_eq!(result["year"], 1997);
    assert_eq!(result["pages"], 104);
    assert_eq!(result["seller_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn create_book_owned_by_seller() {
    let app = support::spawn_app().await;

    let seller = app.sellers.create_seller(maria()).await.unwrap();

    let data = json!({
        "title": "Mziri",
        "author": "Lermontov",
        "year": 1997,
        "pages": 104,
        "seller_id": seller.id
    });
    let (status, body) = support::send(&app.router, "POST", "/api/v1/books/", Some(data)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(support::parse_json(&body)["seller_id"], seller.id);
}

#[tokio::test]
async fn create_book_with_missing_seller_is_a_conflict() {
    let app = support::spawn_app().await;

    let data = json!({
        "title": "Mziri",
        "author": "Lermontov",
        "year": 1997,
        "pages": 104,
        "seller_id": 404
    });
    let (status, body) = support::send(&app.router, "POST", "/api/v1/books/", Some(data)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(support::parse_json(&body)["error"]["code"], "conflict");
}

#[tokio::test]
async fn create_book_with_zero_pages_fails_validation() {
    let app = support::spawn_app().await;

    let data = json!({
        "title": "Mziri",
        "author": "Lermontov",
        "year": 1997,
        "pages": 0
    });
    let (status, body) = support::send(&app.router, "POST", "/api/v1/books/", Some(data)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let parsed = support::parse_json(&body);
    assert_eq!(parsed["error"]["code"], "validation_error");
    assert_eq!(parsed["error"]["details"][0]["field"], "pages");
}

#[tokio::test]
async fn get_all_books_reflects_store_contents() {
    let app = support::spawn_app().await;

    let first = app.books.create_book(mziri(None)).await.unwrap();
    let second = app.books.create_book(mziri(None)).await.unwrap();

    let (status, body) = support::send(&app.router, "GET", "/api/v1/books/", None).await;

    assert_eq!(status, StatusCode::OK);

    let parsed = support::parse_json(&body);
    let books = parsed["books"].as_array().expect("books container");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["id"], first.id);
    assert_eq!(books[1]["id"], second.id);
}

#[tokio::test]
async fn get_single_book() {
    let app = support::spawn_app().await;

    let seller = app.sellers.create_seller(maria()).await.unwrap();
    let book = app.books.create_book(mziri(Some(seller.id))).await.unwrap();

    let (status, body) = support::send(
        &app.router,
        "GET",
        &format!("/api/v1/books/{}", book.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        support::parse_json(&body),
        json!({
            "id": book.id,
            "title": "Mziri",
            "author": "Lermontov",
            "year": 1997,
            "pages": 104,
            "seller_id": seller.id
        })
    );
}

#[tokio::test]
async fn update_book_overwrites_every_mutable_field() {
    let app = support::spawn_app().await;

    let book = app.books.create_book(mziri(None)).await.unwrap();
    let seller = app.sellers.create_seller(maria()).await.unwrap();

    let (status, body) = support::send(
        &app.router,
        "PUT",
        &format!("/api/v1/books/{}", book.id),
        Some(json!({
            "id": book.id,
            "title": "Mtsyri",
            "author": "Lermontov",
            "year": 1840,
            "pages": 112,
            "seller_id": seller.id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let parsed = support::parse_json(&body);
    assert_eq!(parsed["id"], book.id);
    assert_eq!(parsed["title"], "Mtsyri");
    assert_eq!(parsed["year"], 1840);
    assert_eq!(parsed["seller_id"], seller.id);

    let stored = app
        .books
        .get_book(book.id)
        .await
        .unwrap()
        .expect("book still present");
    assert_eq!(stored.title, "Mtsyri");
    assert_eq!(stored.seller_id, Some(seller.id));
}

#[tokio::test]
async fn delete_book_removes_exactly_one_row() {
    let app = support::spawn_app().await;

    let kept = app.books.create_book(mziri(None)).await.unwrap();
    let gone = app.books.create_book(mziri(None)).await.unwrap();

    let (status, body) = support::send(
        &app.router,
        "DELETE",
        &format!("/api/v1/books/{}", gone.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let books = app.books.list_books().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, kept.id);
}

#[tokio::test]
async fn missing_book_returns_bare_404() {
    let app = support::spawn_app().await;

    let requests = [
        ("GET", None),
        (
            "PUT",
            Some(json!({
                "id": 404,
                "title": "Mtsyri",
                "author": "Lermontov",
                "year": 1840,
                "pages": 112,
                "seller_id": null
            })),
        ),
        ("DELETE", None),
    ];

    for (method, payload) in requests {
        let (status, body) = support::send(&app.router, method, "/api/v1/books/404", payload).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} status");
        assert!(body.is_empty(), "{method} body must be empty");
    }
}
