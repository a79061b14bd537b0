use weekly_meals_shared::Preference;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("no recipe matches style {style} and health {health}")]
    NoMatchingRecipe {
        style: Preference,
        health: Preference,
    },

    #[error("recipe provider failed: {0}")]
    ProviderFetchFailure(#[from] ProviderError),
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("provider returned no recipe for tags {tags:?}")]
    Empty { tags: String },
}

/// The request URL carries the API key, so it never reaches the error.
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err.without_url())
    }
}
