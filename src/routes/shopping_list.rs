use axum::{Json, extract::State, extract::rejection::JsonRejection};
use weekly_meals_shared::GeneratedMeal;
use weekly_meals_shopping::ShoppingList;

use super::AppState;
use crate::error::AppError;

/// POST /shopping-list - aggregate a generated plan into a priced list
pub async fn build(
    State(state): State<AppState>,
    payload: Result<Json<Vec<GeneratedMeal>>, JsonRejection>,
) -> Result<Json<ShoppingList>, AppError> {
    let Json(meals) = payload?;

    Ok(Json(state.shopping.build(&meals)))
}
