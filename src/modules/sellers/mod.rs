pub mod models;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use sqlx::SqlitePool;

use bookstore_db::SellersRepository;
use bookstore_kernel::{InitCtx, Migration, Module};

/// Sellers resource module: CRUD over the sellers table plus the
/// books-included detail view
pub struct SellersModule {
    repository: SellersRepository,
}

impl SellersModule {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: SellersRepository::new(pool),
        }
    }
}

#[async_trait]
impl Module for SellersModule {
    fn name(&self) -> &'static str {
        "sellers"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "sellers module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route(
                "/",
                get(routes::get_all_sellers).post(routes::create_seller),
            )
            .route(
                "/{seller_id}",
                get(routes::get_seller_with_books)
                    .put(routes::update_seller)
                    .delete(routes::delete_seller),
            )
            .with_state(self.repository.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Register a seller",
                        "tags": ["Sellers"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/IncomingSeller"}
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Seller created",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ReturnedSeller"}
                                    }
                                }
                            },
                            "409": {
                                "description": "E-mail already registered",
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
                        "summary": "List sellers",
                        "tags": ["Sellers"],
                        "responses": {
                            "200": {
                                "description": "All sellers",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ReturnedAllSellers"}
                                    }
                                }
                            }
                        }
                    }
                },
                "/{seller_id}": {
                    "get": {
                        "summary": "Get a seller with its books",
                        "tags": ["Sellers"],
                        "parameters": [{
                            "name": "seller_id",
                            "in": "path",
                            "required": true,
                            "schema": {"type": "integer", "format": "int64"}
                        }],
                        "responses": {
                            "200": {
                                "description": "Seller with owned books",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ReturnedSellerWithBooks"}
                                    }
                                }
                            },
                            "404": {"description": "Seller not found"}
                        }
                    },
                    "put": {
                        "summary": "Update a seller",
                        "tags": ["Sellers"],
                        "parameters": [{
                            "name": "seller_id",
                            "in": "path",
                            "required": true,
                            "schema": {"type": "integer", "format": "int64"}
                        }],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/ReturnedSeller"}
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Updated seller",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ReturnedSeller"}
                                    }
                                }
                            },
                            "404": {"description": "Seller not found"}
                        }
                    },
                    "delete": {
                        "summary": "Delete a seller",
                        "tags": ["Sellers"],
                        "parameters": [{
                            "name": "seller_id",
                            "in": "path",
                            "required": true,
                            "schema": {"type": "integer", "format": "int64"}
                        }],
                        "responses": {
                            "204": {"description": "Seller deleted; owned books are kept without an owner"},
                            "404": {"description": "Seller not found"}
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "IncomingSeller": {
                        "type": "object",
                        "properties": {
                            "first_name": {"type": "string", "maxLength": 50},
                            "last_name": {"type": "string", "maxLength": 50},
                            "e_mail": {"type": "string", "maxLength": 50},
                            "password": {"type": "string", "maxLength": 20}
                        },
                        "required": ["first_name", "last_name", "e_mail", "password"]
                    },
                    "ReturnedSeller": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer", "format": "int64"},
                            "first_name": {"type": "string"},
                            "last_name": {"type": "string"},
                            "e_mail": {"type": "string"}
                        },
                        "required": ["id", "first_name", "last_name", "e_mail"]
                    },
                    "ReturnedAllSellers": {
                        "type": "object",
                        "properties": {
                            "sellers": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/ReturnedSeller"}
                            }
                        },
                        "required": ["sellers"]
                    },
                    "ReturnedSellerWithBooks": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer", "format": "int64"},
                            "first_name": {"type": "string"},
                            "last_name": {"type": "string"},
                            "e_mail": {"type": "string"},
                            "books": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/ReturnedBook"}
                            }
                        },
                        "required": ["id", "first_name", "last_name", "e_mail", "books"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_create_sellers",
            up: "CREATE TABLE IF NOT EXISTS sellers (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    e_mail TEXT NOT NULL UNIQUE,
                    password TEXT NOT NULL
                )",
        }]
    }
}

/// Create the sellers module over the shared pool
pub fn create_module(pool: SqlitePool) -> Arc<dyn Module> {
    Arc::new(SellersModule::new(pool))
}
