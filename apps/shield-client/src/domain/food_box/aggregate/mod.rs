//! Food box aggregate and its line items.

mod food_box;
mod item;

pub use food_box::{FoodBox, FoodBoxItemPayload, FoodBoxPayload};
pub use item::FoodBoxItem;
