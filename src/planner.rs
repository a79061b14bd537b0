use std::sync::Arc;
use std::time::Duration;

use weekly_meals_mealplan::{
    HttpRecipeProvider, MealPlanRequest, PlanError, PlanGenerator, ProviderPlanner, RngSource,
};
use weekly_meals_shared::{GeneratedMeal, ProductCatalog, RecipeCatalog};

use crate::config::{Config, RecipeSource};

/// The configured way of producing meal plans.
#[derive(Clone)]
pub enum Planner {
    Catalog {
        generator: PlanGenerator,
        seed: Option<u64>,
    },
    Provider(ProviderPlanner),
}

impl Planner {
    pub fn from_config(
        config: &Config,
        recipes: Arc<RecipeCatalog>,
        products: Arc<ProductCatalog>,
    ) -> anyhow::Result<Self> {
        let planner = match config.planner.source {
            RecipeSource::Catalog => {
                let mut generator =
                    PlanGenerator::new(recipes).max_nights(config.planner.max_nights);
                if config.planner.require_stocked_ingredients {
                    generator = generator.require_stocked(products);
                }

                Planner::Catalog {
                    generator,
                    seed: config.planner.seed,
                }
            }
            RecipeSource::Provider => {
                let provider = HttpRecipeProvider::new(
                    config.provider.base_url.as_str(),
                    config.provider.api_key.as_str(),
                    Duration::from_secs(config.provider.timeout_secs),
                )?;

                Planner::Provider(
                    ProviderPlanner::new(Arc::new(provider))
                        .tags(
                            config.provider.main_tag.as_str(),
                            config.provider.side_tag.as_str(),
                        )
                        .max_nights(config.planner.max_nights),
                )
            }
        };

        Ok(planner)
    }

    pub async fn plan(&self, request: &MealPlanRequest) -> Result<Vec<GeneratedMeal>, PlanError> {
        match self {
            Planner::Catalog { generator, seed } => {
                let mut random = match seed {
                    Some(seed) => RngSource::seeded(*seed),
                    None => RngSource::from_entropy(),
                };
                generator.generate(request, &mut random)
            }
            Planner::Provider(planner) => planner.generate(request).await,
        }
    }
}
