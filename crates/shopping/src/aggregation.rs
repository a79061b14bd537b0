use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use fraction::Fraction;
use serde::{Deserialize, Serialize};
use weekly_meals_shared::{Error, GeneratedMeal, Ingredient, ProductCatalog};

/// Shopping list line backed by a catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockedItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub total_price: f64,
    pub purchase_link: String,
}

/// Either a priced line or the marker for an ingredient the store lacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShoppingListItem {
    Stocked(StockedItem),
    Missing { error: String },
}

impl ShoppingListItem {
    pub fn total_price(&self) -> f64 {
        match self {
            Self::Stocked(item) => item.total_price,
            Self::Missing { .. } => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
    pub total: f64,
}

impl ShoppingList {
    pub fn stocked(&self) -> impl Iterator<Item = &StockedItem> {
        self.items.iter().filter_map(|item| match item {
            ShoppingListItem::Stocked(item) => Some(item),
            ShoppingListItem::Missing { .. } => None,
        })
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            ShoppingListItem::Missing { error } => Some(error.as_str()),
            ShoppingListItem::Stocked(_) => None,
        })
    }

    /// Priced lines as ingredients, so a list can be aggregated again.
    /// Product names normalize back to their catalog keys.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.stocked()
            .map(|item| Ingredient::new(item.name.clone(), item.quantity))
            .collect()
    }
}

/// Turns planned meals into a priced shopping list.
///
/// Ingredients are grouped by their normalized name and their quantities
/// summed as exact fractions, then each group is priced from the product
/// catalog. Groups without a product, and ingredients whose name has no
/// letters, become error lines and add nothing to the total. Lines come out
/// sorted by name, so the input order of meals never changes the result.
#[derive(Debug, Clone)]
pub struct ShoppingListAggregator {
    products: Arc<ProductCatalog>,
}

impl ShoppingListAggregator {
    pub fn new(products: Arc<ProductCatalog>) -> Self {
        Self { products }
    }

    pub fn build(&self, meals: &[GeneratedMeal]) -> ShoppingList {
        self.aggregate(meals.iter().flat_map(|meal| &meal.recipe.ingredients))
    }

    #[tracing::instrument(skip_all)]
    pub fn aggregate<'a>(&self, ingredients: impl IntoIterator<Item = &'a Ingredient>) -> ShoppingList {
        let mut groups: BTreeMap<String, Fraction> = BTreeMap::new();
        let mut unnamed: BTreeSet<String> = BTreeSet::new();

        for ingredient in ingredients {
            let key = ingredient.key();
            if key.is_empty() {
                tracing::warn!(ingredient = %ingredient.name, "ingredient has no usable name");
                unnamed.insert(ingredient.name.trim().to_owned());
                continue;
            }

            *groups.entry(key).or_insert_with(|| Fraction::new(0u64, 1u64)) +=
                Fraction::from(ingredient.quantity);
        }

        let mut items: Vec<ShoppingListItem> = groups
            .into_iter()
            .map(|(key, quantity)| {
                let quantity = to_f64(quantity);
                match self.products.lookup(&key) {
                    Ok(product) => ShoppingListItem::Stocked(StockedItem {
                        name: product.name.clone(),
                        quantity,
                        unit: product.unit.clone(),
                        total_price: round_cents(product.unit_price * quantity),
                        purchase_link: product.purchase_link.clone(),
                    }),
                    Err(err) => {
                        tracing::debug!(ingredient = %key, "no product in stock");
                        ShoppingListItem::Missing {
                            error: err.to_string(),
                        }
                    }
                }
            })
            .collect();

        items.extend(unnamed.into_iter().map(|name| ShoppingListItem::Missing {
            error: Error::ProductNotFound(name).to_string(),
        }));

        let total = round_cents(items.iter().map(ShoppingListItem::total_price).sum());

        ShoppingList { items, total }
    }
}

fn to_f64(quantity: Fraction) -> f64 {
    match (quantity.numer(), quantity.denom()) {
        (Some(numer), Some(denom)) => *numer as f64 / *denom as f64,
        _ => 0.0,
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
