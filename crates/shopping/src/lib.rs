pub mod aggregation;

pub use aggregation::{ShoppingList, ShoppingListAggregator, ShoppingListItem, StockedItem};
