use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Recipe, Result, normalize_ingredient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub unit_price: f64,
    pub unit: String,
    pub purchase_link: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        unit_price: f64,
        unit: impl Into<String>,
        purchase_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            unit: unit.into(),
            purchase_link: purchase_link.into(),
        }
    }
}

/// Products keyed by normalized ingredient name.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    /// Builds the catalog; keys go through [`normalize_ingredient`] so
    /// lookups and aggregation agree on spelling.
    pub fn new<K: AsRef<str>>(products: impl IntoIterator<Item = (K, Product)>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|(key, product)| (normalize_ingredient(key.as_ref()), product))
                .collect(),
        }
    }

    pub fn get(&self, ingredient: &str) -> Option<&Product> {
        self.products.get(&normalize_ingredient(ingredient))
    }

    pub fn lookup(&self, ingredient: &str) -> Result<&Product> {
        let key = normalize_ingredient(ingredient);
        self.products
            .get(&key)
            .ok_or(Error::ProductNotFound(key))
    }

    /// True when every ingredient of the recipe has a product.
    pub fn stocks(&self, recipe: &Recipe) -> bool {
        recipe
            .ingredients
            .iter()
            .all(|ingredient| self.products.contains_key(&ingredient.key()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ingredient;

    fn catalog() -> ProductCatalog {
        ProductCatalog::new([
            ("pasta", Product::new("Pasta", 1.5, "box", "https://shop.test/pasta")),
            ("Soy Sauce", Product::new("Soy Sauce", 2.25, "bottle", "https://shop.test/soy")),
        ])
    }

    #[test]
    fn test_lookup_normalizes_keys_and_queries() {
        let catalog = catalog();

        assert_eq!(catalog.get("PASTA").map(|p| p.unit_price), Some(1.5));
        assert_eq!(catalog.get("spaghetti").map(|p| p.name.as_str()), Some("Pasta"));
        assert_eq!(catalog.get("soy  sauce").map(|p| p.unit.as_str()), Some("bottle"));
    }

    #[test]
    fn test_lookup_missing_product() {
        let err = catalog().lookup("Cheese").unwrap_err();
        assert_eq!(err, Error::ProductNotFound("cheese".to_owned()));
        assert_eq!(err.to_string(), "Not found in stock: cheese");
    }

    #[test]
    fn test_stocks_requires_every_ingredient() {
        let catalog = catalog();
        let stocked = Recipe::new("Noodles", "Asian", "Regular", [
            Ingredient::one("pasta"),
            Ingredient::one("soy sauce"),
        ]);
        let missing = Recipe::new("Pasta", "Italian", "Regular", [
            Ingredient::one("pasta"),
            Ingredient::one("cheese"),
        ]);

        assert!(catalog.stocks(&stocked));
        assert!(!catalog.stocks(&missing));
    }

    #[test]
    fn test_product_json_is_camel_case() {
        let json = serde_json::to_value(Product::new("Rice", 2.0, "bag", "https://shop.test/rice"))
            .unwrap();

        assert_eq!(json["unitPrice"], 2.0);
        assert_eq!(json["purchaseLink"], "https://shop.test/rice");
    }
}
