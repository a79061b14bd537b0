use std::sync::Arc;

use futures::future::try_join_all;
use weekly_meals_shared::{GeneratedMeal, Ingredient, Recipe, normalize_ingredient};

use super::{ProviderRecipe, RecipeProvider};
use crate::{DEFAULT_MAX_NIGHTS, MealPlanRequest, PlanError, ProviderError};

pub const DEFAULT_MAIN_TAG: &str = "main course";
pub const DEFAULT_SIDE_TAG: &str = "side dish";

/// Builds a plan from an external provider: one main and one side per
/// night, merged into a single meal sized for the household.
#[derive(Clone)]
pub struct ProviderPlanner {
    provider: Arc<dyn RecipeProvider>,
    main_tag: String,
    side_tag: String,
    max_nights: u32,
}

impl ProviderPlanner {
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self {
            provider,
            main_tag: DEFAULT_MAIN_TAG.to_owned(),
            side_tag: DEFAULT_SIDE_TAG.to_owned(),
            max_nights: DEFAULT_MAX_NIGHTS,
        }
    }

    pub fn tags(mut self, main: impl Into<String>, side: impl Into<String>) -> Self {
        self.main_tag = main.into();
        self.side_tag = side.into();
        self
    }

    pub fn max_nights(mut self, max_nights: u32) -> Self {
        self.max_nights = max_nights;
        self
    }

    fn course_tags(&self, course: &str, request: &MealPlanRequest) -> Vec<String> {
        [Some(course), request.style.category(), request.health.category()]
            .into_iter()
            .flatten()
            .map(|tag| tag.to_lowercase())
            .collect()
    }

    /// Fetches every night concurrently and returns meals in night order.
    /// The first failed fetch aborts the plan.
    #[tracing::instrument(
        skip_all,
        fields(nights = request.nights, style = %request.style, health = %request.health)
    )]
    pub async fn generate(&self, request: &MealPlanRequest) -> Result<Vec<GeneratedMeal>, PlanError> {
        let nights = request.nights.min(self.max_nights);
        let persons = request.persons();
        let main_tags = &self.course_tags(&self.main_tag, request);
        let side_tags = &self.course_tags(&self.side_tag, request);

        let fetches = (1..=nights).map(move |night| async move {
            let (main, side) = futures::try_join!(
                self.provider.random_recipe(main_tags),
                self.provider.random_recipe(side_tags),
            )?;

            Ok::<_, ProviderError>(combine(night, main, side, persons, request))
        });

        let plan = try_join_all(fetches).await?;

        tracing::debug!(meals = plan.len(), persons, "provider meal plan generated");

        Ok(plan)
    }
}

fn combine(
    night: u32,
    main: ProviderRecipe,
    side: ProviderRecipe,
    persons: u32,
    request: &MealPlanRequest,
) -> GeneratedMeal {
    let quantity = f64::from(persons);
    let ingredients = main
        .ingredients
        .iter()
        .chain(&side.ingredients)
        .map(|name| Ingredient::new(normalize_ingredient(name), quantity))
        .collect();

    let instructions: Vec<String> = [main.instructions, side.instructions]
        .into_iter()
        .flatten()
        .filter(|text| !text.trim().is_empty())
        .collect();

    GeneratedMeal {
        night,
        recipe: Recipe {
            name: format!("{} with {}", main.title, side.title),
            ingredients,
            style: request.style.to_string(),
            health: request.health.to_string(),
            recipe_text: (!instructions.is_empty()).then(|| instructions.join("\n\n")),
            recipe_urls: [main.source_url, side.source_url]
                .into_iter()
                .flatten()
                .collect(),
        },
    }
}
