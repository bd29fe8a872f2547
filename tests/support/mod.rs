//! Shared fixtures for the HTTP scenario tests: the full router over a
//! single-connection in-memory database, plus repositories for seeding
//! rows directly.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use bookstore_app::modules;
use bookstore_db::{BooksRepository, SellersRepository};
use bookstore_kernel::settings::Settings;
use bookstore_kernel::{InitCtx, ModuleRegistry};

pub struct TestApp {
    pub router: Router,
    pub sellers: SellersRepository,
    pub books: BooksRepository,
}

pub async fn spawn_app() -> TestApp {
    let mut settings = Settings::default();
    settings.database.url = "sqlite::memory:".to_string();
    settings.database.max_connections = 1;

    let pool = bookstore_db::create_pool(&settings.database)
        .await
        .expect("in-memory pool");

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &pool);

    let ctx = InitCtx {
        settings: &settings,
        pool: &pool,
    };
    registry.run_migrations(&ctx).await.expect("migrations");

    let router = bookstore_http::build_router(&registry, &settings);

    TestApp {
        router,
        sellers: SellersRepository::new(pool.clone()),
        books: BooksRepository::new(pool),
    }
}

/// Fire one request at the router, returning status and raw body bytes
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes.to_vec())
}

pub fn parse_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("json body")
}
