mod catalog;
mod error;
mod normalize;
pub mod product;
pub mod recipe;

pub use catalog::*;
pub use error::*;
pub use normalize::*;
pub use product::{Product, ProductCatalog};
pub use recipe::{GeneratedMeal, Ingredient, Preference, Recipe, RecipeCatalog};
