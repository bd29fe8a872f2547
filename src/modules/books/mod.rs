pub mod models;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use sqlx::SqlitePool;

use bookstore_db::BooksRepository;
use bookstore_kernel::{InitCtx, Migration, Module};

/// Books resource module: CRUD over the books table. Ownership lives in
/// the nullable `seller_id` column the sellers module eager-loads through.
pub struct BooksModule {
    repository: BooksRepository,
}

impl BooksModule {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: BooksRepository::new(pool),
        }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(routes::get_all_books).post(routes::create_book))
            .route(
                "/{book_id}",
                get(routes::get_book)
                    .put(routes::update_book)
                    .delete(routes::delete_book),
            )
            .with_state(self.repository.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Add a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/IncomingBook"}
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Book created",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ReturnedBook"}
                                    }
                                }
                            },
                            "409": {
                                "description": "seller_id references a missing seller",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            },
                            "422": {
                                "description": "Validation error",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    },
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "All books",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ReturnedAllBooks"}
                                    }
                                }
                            }
                        }
                    }
                },
                "/{book_id}": {
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "book_id",
                            "in": "path",
                            "required": true,
                            "schema": {"type": "integer", "format": "int64"}
                        }],
                        "responses": {
                            "200": {
                                "description": "Book",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ReturnedBook"}
                                    }
                                }
                            },
                            "404": {"description": "Book not found"}
                        }
                    },
                    "put": {
                        "summary": "Update a book",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "book_id",
                            "in": "path",
                            "required": true,
                            "schema": {"type": "integer", "format": "int64"}
                        }],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ReturnedBook"}
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Updated book",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ReturnedBook"}
                                    }
                                }
                            },
                            "404": {"description": "Book not found"}
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "book_id",
                            "in": "path",
                            "required": true,
                            "schema": {"type": "integer", "format": "int64"}
                        }],
                        "responses": {
                            "204": {"description": "Book deleted"},
                            "404": {"description": "Book not found"}
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "IncomingBook": {
                        "type": "object",
                        "properties": {
                            "title": {"type": "string", "maxLength": 100},
                            "author": {"type": "string", "maxLength": 100},
                            "year": {"type": "integer", "format": "int64"},
                            "pages": {"type": "integer", "format": "int64"},
                            "seller_id": {"type": "integer", "format": "int64", "nullable": true}
                        },
                        "required": ["title", "author", "year", "pages"]
                    },
                    "ReturnedBook": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer", "format": "int64"},
                            "title": {"type": "string"},
                            "author": {"type": "string"},
                            "year": {"type": "integer", "format": "int64"},
                            "pages": {"type": "integer", "format": "int64"},
                            "seller_id": {"type": "integer", "format": "int64", "nullable": true}
                        },
                        "required": ["id", "title", "author", "year", "pages"]
                    },
                    "ReturnedAllBooks": {
                        "type": "object",
                        "properties": {
                            "books": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/ReturnedBook"}
                            }
                        },
                        "required": ["books"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_create_books",
            up: "CREATE TABLE IF NOT EXISTS books (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    author TEXT NOT NULL,
                    year INTEGER NOT NULL,
                    pages INTEGER NOT NULL,
                    seller_id INTEGER REFERENCES sellers(id)
                )",
        }]
    }
}

/// Create the books module over the shared pool
pub fn create_module(pool: SqlitePool) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(pool))
}
