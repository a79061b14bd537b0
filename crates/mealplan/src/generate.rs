use std::sync::Arc;

use weekly_meals_shared::{GeneratedMeal, Preference, ProductCatalog, Recipe, RecipeCatalog};

use crate::{MealPlanRequest, PlanError, RandomSource};

/// Upper bound on plan length; the form renders one week.
pub const DEFAULT_MAX_NIGHTS: u32 = 7;

/// Picks one catalog recipe per night.
///
/// Every night draws independently and uniformly from the recipes that
/// pass the style and health filters, so a recipe may repeat. When stock
/// checking is enabled a recipe also needs every ingredient in the product
/// catalog. A night without candidates fails the whole plan.
#[derive(Debug, Clone)]
pub struct PlanGenerator {
    recipes: Arc<RecipeCatalog>,
    stock: Option<Arc<ProductCatalog>>,
    max_nights: u32,
}

impl PlanGenerator {
    pub fn new(recipes: Arc<RecipeCatalog>) -> Self {
        Self {
            recipes,
            stock: None,
            max_nights: DEFAULT_MAX_NIGHTS,
        }
    }

    pub fn max_nights(mut self, max_nights: u32) -> Self {
        self.max_nights = max_nights;
        self
    }

    pub fn require_stocked(mut self, products: Arc<ProductCatalog>) -> Self {
        self.stock = Some(products);
        self
    }

    pub fn nights_for(&self, requested: u32) -> u32 {
        requested.min(self.max_nights)
    }

    pub fn candidates(&self, style: &Preference, health: &Preference) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.matches(style, health))
            .filter(|recipe| self.stock.as_ref().is_none_or(|stock| stock.stocks(recipe)))
            .collect()
    }

    #[tracing::instrument(
        skip_all,
        fields(nights = request.nights, style = %request.style, health = %request.health)
    )]
    pub fn generate(
        &self,
        request: &MealPlanRequest,
        random: &mut impl RandomSource,
    ) -> Result<Vec<GeneratedMeal>, PlanError> {
        let nights = self.nights_for(request.nights);
        let mut plan = Vec::with_capacity(nights as usize);

        for night in 1..=nights {
            let candidates = self.candidates(&request.style, &request.health);
            if candidates.is_empty() {
                return Err(PlanError::NoMatchingRecipe {
                    style: request.style.clone(),
                    health: request.health.clone(),
                });
            }

            let index = random.next_index(candidates.len()).min(candidates.len() - 1);
            plan.push(GeneratedMeal {
                night,
                recipe: candidates[index].clone(),
            });
        }

        tracing::debug!(meals = plan.len(), "meal plan generated");

        Ok(plan)
    }
}
