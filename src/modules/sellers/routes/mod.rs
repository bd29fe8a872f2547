//! HTTP handlers for the sellers resource

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bookstore_db::{NewSeller, SellerUpdate, SellersRepository};
use bookstore_http::error::AppError;

use super::models::{IncomingSeller, ReturnedAllSellers, ReturnedSeller, ReturnedSellerWithBooks};

/// Register a seller, returning the stored row without the password
pub async fn create_seller(
    State(repository): State<SellersRepository>,
    Json(seller): Json<IncomingSeller>,
) -> Result<(StatusCode, Json<ReturnedSeller>), AppError> {
    seller.validate()?;

    let created = repository
        .create_seller(NewSeller {
            first_name: seller.first_name,
            last_name: seller.last_name,
            e_mail: seller.e_mail,
            password: seller.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Every seller, wrapped in a `sellers` container
pub async fn get_all_sellers(
    State(repository): State<SellersRepository>,
) -> Result<Json<ReturnedAllSellers>, AppError> {
    let sellers = repository.list_sellers().await?;

    Ok(Json(ReturnedAllSellers {
        sellers: sellers.into_iter().map(Into::into).collect(),
    }))
}

/// One seller with its books eager-loaded
pub async fn get_seller_with_books(
    State(repository): State<SellersRepository>,
    Path(seller_id): Path<i64>,
) -> Result<Json<ReturnedSellerWithBooks>, AppError> {
    let Some((seller, books)) = repository.get_seller_with_books(seller_id).await? else {
        return Err(AppError::not_found("seller not found"));
    };

    Ok(Json(ReturnedSellerWithBooks::new(seller, books)))
}

/// Overwrite first_name/last_name/e_mail; password and book ownership are
/// untouched. The body carries an `id` for wire compatibility, but the
/// path parameter is authoritative.
pub async fn update_seller(
    State(repository): State<SellersRepository>,
    Path(seller_id): Path<i64>,
    Json(new_seller_data): Json<ReturnedSeller>,
) -> Result<Json<ReturnedSeller>, AppError> {
    new_seller_data.validate()?;

    let updated = repository
        .update_seller(
            seller_id,
            SellerUpdate {
                first_name: new_seller_data.first_name,
                last_name: new_seller_data.last_name,
                e_mail: new_seller_data.e_mail,
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("seller not found"))?;

    Ok(Json(updated.into()))
}

/// Remove a seller; its books stay behind with `seller_id` cleared
pub async fn delete_seller(
    State(repository): State<SellersRepository>,
    Path(seller_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repository.delete_seller(seller_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("seller not found"))
    }
}
