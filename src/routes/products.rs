use axum::{
    Json,
    extract::{Path, State},
};
use weekly_meals_shared::Product;

use super::AppState;
use crate::error::AppError;

/// GET /products/{ingredient}
pub async fn show(
    State(state): State<AppState>,
    Path(ingredient): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.products.lookup(&ingredient)?;

    Ok(Json(product.clone()))
}
