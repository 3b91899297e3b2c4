/// A sellable dish and the ingredients one portion consumes.
use super::{IngredientId, Requirement};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DishId(pub u32);

impl From<u32> for DishId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dish_{}", self.0)
    }
}

/// Quantity of one ingredient per portion. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishIngredient {
    pub ingredient_id: IngredientId,
    pub quantity: Decimal,
}

impl DishIngredient {
    pub fn new(ingredient_id: IngredientId, quantity: Decimal) -> Self {
        Self {
            ingredient_id,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub ingredients: Vec<DishIngredient>,
}

impl Dish {
    /// Ingredient amounts for `quantity` portions, in recipe order.
    ///
    /// `None` if any amount does not fit in a `Decimal`.
    pub fn requirements_for(&self, quantity: u32) -> Option<Vec<Requirement>> {
        let portions = Decimal::from(quantity);
        self.ingredients
            .iter()
            .map(|line| {
                line.quantity
                    .checked_mul(portions)
                    .map(|amount| Requirement::new(line.ingredient_id, amount))
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct DishCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub ingredients: Vec<DishIngredient>,
}

/// Non-structural changes only; the recipe is fixed once created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    pub price: Option<Decimal>,
    pub description: Option<String>,
}
