mod http;
mod plan;

pub use http::*;
pub use plan::*;

use async_trait::async_trait;

use crate::ProviderError;

/// A recipe as returned by an external provider, before it is merged into a
/// plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub source_url: Option<String>,
    pub instructions: Option<String>,
}

/// Fetches one random recipe carrying all of the given tags.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    async fn random_recipe(&self, tags: &[String]) -> Result<ProviderRecipe, ProviderError>;
}
