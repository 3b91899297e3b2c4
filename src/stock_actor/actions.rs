use crate::model::{IngredientCreate, IngredientId, Requirement};
use rust_decimal::Decimal;

/// Operations on a single ingredient.
#[derive(Debug, Clone)]
pub enum StockAction {
    CheckStock,
    /// Add to the quantity on hand. The amount must not be negative.
    Restock(Decimal),
}

/// Each variant carries the stock level after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum StockActionResult {
    CheckStock(Decimal),
    Restock(Decimal),
}

/// Operations spanning several ingredients.
#[derive(Debug, Clone)]
pub enum StockStoreAction {
    /// Debit every requirement or none of them. Repeated ingredients are summed.
    CheckAndDebit(Vec<Requirement>),
    /// Add the stock to the ingredient with the same name (trimmed, case-insensitive),
    /// or create it when there is none.
    CreateOrRestock(IngredientCreate),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StockStoreActionResult {
    Debited,
    Stocked {
        id: IngredientId,
        /// `false` when an existing ingredient was topped up.
        created: bool,
        level: Decimal,
    },
}
