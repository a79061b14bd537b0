use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use weekly_meals_shared::{ProductCatalog, builtin_products, builtin_recipes};
use weekly_meals_shopping::ShoppingListAggregator;

use crate::{config::Config, planner::Planner};

mod health;
mod meal_plan;
mod products;
mod shopping_list;

#[derive(Clone)]
pub struct AppState {
    pub planner: Planner,
    pub products: Arc<ProductCatalog>,
    pub shopping: ShoppingListAggregator,
}

impl AppState {
    pub fn new(planner: Planner, products: Arc<ProductCatalog>) -> Self {
        Self {
            planner,
            shopping: ShoppingListAggregator::new(products.clone()),
            products,
        }
    }

    /// State backed by the built-in recipe and product catalogs.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let products = Arc::new(builtin_products());
        let planner = Planner::from_config(config, Arc::new(builtin_recipes()), products.clone())?;

        Ok(Self::new(planner, products))
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/generate-meal-plan", post(meal_plan::generate))
        .route("/products/{ingredient}", get(products::show))
        .route("/shopping-list", post(shopping_list::build))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
