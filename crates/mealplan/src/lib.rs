mod error;
mod generate;
pub mod provider;
mod random;
mod request;

pub use error::*;
pub use generate::*;
pub use provider::{
    DEFAULT_MAIN_TAG, DEFAULT_SIDE_TAG, HttpRecipeProvider, ProviderPlanner, ProviderRecipe,
    RecipeProvider,
};
pub use random::*;
pub use request::*;
