use axum::{Json, extract::State, extract::rejection::JsonRejection};
use weekly_meals_mealplan::MealPlanRequest;
use weekly_meals_shared::GeneratedMeal;

use super::AppState;
use crate::error::AppError;

/// POST /generate-meal-plan
///
/// A plan that cannot be completed comes back as an empty array.
#[tracing::instrument(skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<MealPlanRequest>, JsonRejection>,
) -> Result<Json<Vec<GeneratedMeal>>, AppError> {
    let Json(request) = payload?;

    match state.planner.plan(&request).await {
        Ok(plan) => Ok(Json(plan)),
        Err(err) => {
            tracing::warn!(error = %err, nights = request.nights, "meal plan generation failed");
            Ok(Json(vec![]))
        }
    }
}
