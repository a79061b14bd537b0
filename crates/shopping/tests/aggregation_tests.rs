use std::sync::Arc;

use weekly_meals_shared::{GeneratedMeal, Ingredient, Product, ProductCatalog, Recipe, builtin_products};
use weekly_meals_shopping::{ShoppingList, ShoppingListAggregator, ShoppingListItem};

fn pasta_meal(night: u32) -> GeneratedMeal {
    GeneratedMeal {
        night,
        recipe: Recipe::new(
            "Pasta",
            "Italian",
            "Regular",
            ["pasta", "sauce", "cheese"].map(Ingredient::one),
        ),
    }
}

fn meal(night: u32, name: &str, ingredients: &[(&str, f64)]) -> GeneratedMeal {
    GeneratedMeal {
        night,
        recipe: Recipe::new(
            name,
            "Any",
            "Any",
            ingredients
                .iter()
                .map(|(name, quantity)| Ingredient::new(*name, *quantity)),
        ),
    }
}

fn quantities(list: &ShoppingList) -> Vec<(String, f64)> {
    list.stocked()
        .map(|item| (item.name.clone(), item.quantity))
        .collect()
}

#[test]
fn test_two_nights_of_pasta() {
    let products = ProductCatalog::new([
        ("pasta", Product::new("Pasta", 1.50, "box", "https://shop.test/pasta")),
        ("sauce", Product::new("Sauce", 2.00, "jar", "https://shop.test/sauce")),
    ]);
    let aggregator = ShoppingListAggregator::new(Arc::new(products));

    let list = aggregator.build(&[pasta_meal(1), pasta_meal(2)]);

    assert_eq!(
        quantities(&list),
        [("Pasta".to_owned(), 2.0), ("Sauce".to_owned(), 2.0)]
    );
    assert_eq!(list.total, 7.00);
    assert_eq!(list.missing().collect::<Vec<_>>(), ["Not found in stock: cheese"]);
    assert_eq!(list.items.len(), 3);
}

#[test]
fn test_empty_plan_gives_empty_list() {
    let aggregator = ShoppingListAggregator::new(Arc::new(builtin_products()));

    let list = aggregator.build(&[]);

    assert!(list.items.is_empty());
    assert_eq!(list.total, 0.0);
}

#[test]
fn test_meal_order_does_not_matter() {
    let aggregator = ShoppingListAggregator::new(Arc::new(builtin_products()));
    let meals = vec![
        meal(1, "Tacos", &[("tortillas", 1.0), ("beef", 2.0), ("salsa", 1.0)]),
        meal(2, "Stir-Fry", &[("rice", 1.0), ("broccoli", 1.0), ("soy sauce", 1.0)]),
        meal(3, "Rice Bowl", &[("Rice", 2.0), ("Ground Beef", 1.0), ("kimchi", 1.0)]),
    ];

    let forward = aggregator.build(&meals);
    let mut reversed = meals.clone();
    reversed.reverse();
    let rotated = [meals[1].clone(), meals[2].clone(), meals[0].clone()];

    assert_eq!(aggregator.build(&reversed), forward);
    assert_eq!(aggregator.build(&rotated), forward);
    assert_eq!(forward.total, 28.5);
}

#[test]
fn test_reaggregating_a_list_keeps_totals() {
    let aggregator = ShoppingListAggregator::new(Arc::new(builtin_products()));
    let meals = [
        meal(1, "Salad", &[("lettuce", 1.0), ("cherry tomatoes", 3.0), ("dressing", 1.0)]),
        meal(2, "Pasta", &[("spaghetti", 2.0), ("sauce", 1.0), ("parmesan", 1.0)]),
    ];

    let first = aggregator.build(&meals);
    let second = aggregator.aggregate(&first.ingredients());

    assert_eq!(second.total, first.total);
    assert_eq!(quantities(&second), quantities(&first));
    assert!(second.missing().next().is_none());
}

#[test]
fn test_stocked_lines_carry_catalog_units() {
    let aggregator = ShoppingListAggregator::new(Arc::new(builtin_products()));

    let list = aggregator.build(&[meal(1, "Tacos", &[("tortillas", 2.0)])]);

    match &list.items[0] {
        ShoppingListItem::Stocked(item) => {
            assert_eq!(item.unit, "pack");
            assert_eq!(item.total_price, 4.0);
            assert_eq!(item.purchase_link, "https://www.walmart.com/search?q=tortillas");
        }
        other => panic!("expected a stocked line, got {other:?}"),
    }
}

#[test]
fn test_fractional_quantities_do_not_depend_on_meal_order() {
    let aggregator = ShoppingListAggregator::new(Arc::new(builtin_products()));
    let meals = vec![
        meal(1, "Small Pasta", &[("pasta", 0.1), ("sauce", 0.7)]),
        meal(2, "Pasta Salad", &[("spaghetti", 0.2), ("sauce", 0.1), ("lettuce", 0.25)]),
        meal(3, "Side Pasta", &[("penne", 0.3), ("lettuce", 0.75)]),
    ];

    let forward = aggregator.build(&meals);
    let mut reversed = meals.clone();
    reversed.reverse();
    let rotated = [meals[2].clone(), meals[0].clone(), meals[1].clone()];

    assert_eq!(aggregator.build(&reversed), forward);
    assert_eq!(aggregator.build(&rotated), forward);
    assert_eq!(
        quantities(&forward),
        [
            ("Lettuce".to_owned(), 1.0),
            ("Pasta".to_owned(), 0.6),
            ("Sauce".to_owned(), 0.8),
        ]
    );
}
