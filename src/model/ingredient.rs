/// An ingredient and its quantity on hand.
///
/// # Actor Framework
/// Managed by the stock ledger actor. See [`crate::stock_actor`] for the
/// debit and restock operations.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IngredientId(pub u32);

impl From<u32> for IngredientId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ingredient_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    /// Never negative.
    pub stock: Decimal,
}

impl Ingredient {
    pub fn new(id: IngredientId, name: impl Into<String>, stock: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngredientCreate {
    pub name: String,
    pub stock: Decimal,
}

/// Renames an ingredient. Stock only moves through debit and restock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientUpdate {
    pub name: Option<String>,
}

/// An amount of one ingredient needed by an order or a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub ingredient_id: IngredientId,
    pub amount: Decimal,
}

impl Requirement {
    pub fn new(ingredient_id: IngredientId, amount: Decimal) -> Self {
        Self {
            ingredient_id,
            amount,
        }
    }
}
