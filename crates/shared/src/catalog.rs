use crate::{Ingredient, Product, ProductCatalog, Recipe, RecipeCatalog};

const STORE_SEARCH: &str = "https://www.walmart.com/search?q=";

/// Recipes served when no external provider is configured.
pub fn builtin_recipes() -> RecipeCatalog {
    let recipe = |name: &str, style: &str, health: &str, ingredients: [&str; 3]| {
        Recipe::new(name, style, health, ingredients.map(Ingredient::one))
    };

    RecipeCatalog::new([
        recipe("Pasta", "Italian", "Regular", ["pasta", "sauce", "cheese"]),
        recipe("Salad", "Healthy", "Low-Carb", ["lettuce", "tomato", "dressing"]),
        recipe("Tacos", "Mexican", "Regular", ["tortillas", "beef", "salsa"]),
        recipe(
            "Veggie Stir-Fry",
            "Healthy",
            "Vegetarian",
            ["rice", "broccoli", "soy sauce"],
        ),
    ])
}

/// Simulated store stock. Units are catalog data, never inferred.
pub fn builtin_products() -> ProductCatalog {
    let product = |name: &str, unit_price: f64, unit: &str| {
        let link = format!("{STORE_SEARCH}{}", name.to_lowercase().replace(' ', "+"));
        (name.to_owned(), Product::new(name, unit_price, unit, link))
    };

    ProductCatalog::new([
        product("Pasta", 1.50, "box"),
        product("Sauce", 2.00, "jar"),
        product("Lettuce", 1.00, "head"),
        product("Tomato", 0.75, "each"),
        product("Dressing", 2.50, "bottle"),
        product("Tortillas", 2.00, "pack"),
        product("Beef", 5.00, "lb"),
        product("Salsa", 1.75, "jar"),
        product("Rice", 2.00, "bag"),
        product("Broccoli", 1.50, "bunch"),
        product("Soy Sauce", 2.25, "bottle"),
    ])
}
