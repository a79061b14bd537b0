use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;

use super::{ProviderRecipe, RecipeProvider};
use crate::ProviderError;

/// Client for a Spoonacular-compatible `GET /recipes/random` endpoint.
#[derive(Debug, Clone)]
pub struct HttpRecipeProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpRecipeProvider {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = ClientBuilder::new().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        })
    }
}

#[derive(Deserialize)]
struct RandomRecipes {
    #[serde(default)]
    recipes: Vec<RemoteRecipe>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteRecipe {
    title: String,
    #[serde(default)]
    extended_ingredients: Vec<RemoteIngredient>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    instructions: Option<String>,
}

#[derive(Deserialize)]
struct RemoteIngredient {
    name: String,
}

impl From<RemoteRecipe> for ProviderRecipe {
    fn from(value: RemoteRecipe) -> Self {
        Self {
            title: value.title,
            ingredients: value
                .extended_ingredients
                .into_iter()
                .map(|ingredient| ingredient.name)
                .collect(),
            source_url: value.source_url,
            instructions: value.instructions,
        }
    }
}

#[async_trait]
impl RecipeProvider for HttpRecipeProvider {
    #[tracing::instrument(skip(self))]
    async fn random_recipe(&self, tags: &[String]) -> Result<ProviderRecipe, ProviderError> {
        let tags = tags.join(",");
        let url = format!("{}/recipes/random", self.base_url);

        let body: RandomRecipes = self
            .client
            .get(url)
            .query(&[
                ("number", "1"),
                ("tags", tags.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        body.recipes
            .into_iter()
            .next()
            .map(ProviderRecipe::from)
            .ok_or(ProviderError::Empty { tags })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_recipes_payload() {
        let body: RandomRecipes = serde_json::from_str(
            r#"{
                "recipes": [{
                    "id": 716429,
                    "title": "Pasta with Garlic",
                    "sourceUrl": "https://example.com/pasta",
                    "instructions": "Boil pasta.",
                    "extendedIngredients": [
                        {"id": 1, "name": "spaghetti", "amount": 2},
                        {"id": 2, "name": "garlic"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let recipe: ProviderRecipe = body.recipes.into_iter().next().unwrap().into();
        assert_eq!(recipe.title, "Pasta with Garlic");
        assert_eq!(recipe.ingredients, ["spaghetti", "garlic"]);
        assert_eq!(recipe.source_url.as_deref(), Some("https://example.com/pasta"));
        assert_eq!(recipe.instructions.as_deref(), Some("Boil pasta."));
    }

    #[test]
    fn test_missing_fields_default() {
        let body: RandomRecipes =
            serde_json::from_str(r#"{"recipes": [{"title": "Plain Rice"}]}"#).unwrap();

        let recipe: ProviderRecipe = body.recipes.into_iter().next().unwrap().into();
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.source_url.is_none());
    }

    #[tokio::test]
    async fn test_failed_request_hides_api_key() {
        let provider =
            HttpRecipeProvider::new("http://127.0.0.1:1", "SECRET123", Duration::from_secs(1))
                .unwrap();

        let err = provider
            .random_recipe(&["main course".to_owned()])
            .await
            .unwrap_err();
        let rendered = crate::PlanError::from(err).to_string();

        assert!(rendered.starts_with("recipe provider failed: request failed"));
        assert!(!rendered.contains("SECRET123"));
        assert!(!rendered.contains("apiKey"));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider =
            HttpRecipeProvider::new("https://api.test/", "key", Duration::from_secs(1)).unwrap();
        assert_eq!(provider.base_url, "https://api.test");
    }
}
