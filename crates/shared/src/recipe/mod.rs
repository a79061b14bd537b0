use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, normalize_ingredient};

/// A recipe ingredient with its quantity in the product's unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IngredientInput")]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn one(name: impl Into<String>) -> Self {
        Self::new(name, 1.0)
    }

    /// Catalog key this ingredient aggregates under.
    pub fn key(&self) -> String {
        normalize_ingredient(&self.name)
    }
}

/// Parses the legacy `"<qty> <name>"` form. A missing or unparsable
/// quantity prefix counts as one unit of the whole text.
impl FromStr for Ingredient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidIngredient(s.to_owned()));
        }

        if let Some((head, rest)) = s.split_once(char::is_whitespace) {
            let rest = rest.trim();
            match head.parse::<f64>() {
                Ok(quantity) if quantity.is_finite() && quantity >= 0.0 && !rest.is_empty() => {
                    return Ok(Self::new(rest, quantity));
                }
                _ => {}
            }
        }

        Ok(Self::one(s))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientInput {
    Text(String),
    Structured {
        name: String,
        #[serde(default = "default_quantity")]
        quantity: f64,
    },
}

fn default_quantity() -> f64 {
    1.0
}

impl TryFrom<IngredientInput> for Ingredient {
    type Error = Error;

    fn try_from(value: IngredientInput) -> Result<Self, Self::Error> {
        match value {
            IngredientInput::Text(text) => text.parse(),
            IngredientInput::Structured { name, quantity } => {
                if name.trim().is_empty() || !quantity.is_finite() || quantity < 0.0 {
                    return Err(Error::InvalidIngredient(name));
                }
                Ok(Self::new(name, quantity))
            }
        }
    }
}

/// A style or health filter. `Any` lets every recipe through on that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Preference {
    #[default]
    Any,
    Only(String),
}

impl Preference {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("any") {
            Self::Any
        } else {
            Self::Only(value.to_owned())
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted.eq_ignore_ascii_case(category.trim()),
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Only(category) => Some(category),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Only(category) => f.write_str(category),
        }
    }
}

impl From<String> for Preference {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for Preference {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Preference> for String {
    fn from(value: Preference) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub style: String,
    pub health: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipe_urls: Vec<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        style: impl Into<String>,
        health: impl Into<String>,
        ingredients: impl IntoIterator<Item = Ingredient>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().collect(),
            style: style.into(),
            health: health.into(),
            recipe_text: None,
            recipe_urls: vec![],
        }
    }

    pub fn matches(&self, style: &Preference, health: &Preference) -> bool {
        style.accepts(&self.style) && health.accepts(&self.health)
    }
}

/// Read-only recipe list the planner draws from.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// The recipe chosen for one night of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMeal {
    #[serde(default)]
    pub night: u32,
    #[serde(flatten)]
    pub recipe: Recipe,
}
