use crate::model::Requirement;

#[derive(Debug, Clone)]
pub enum DishAction {
    /// Ingredient amounts for this many portions.
    Requirements(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DishActionResult {
    Requirements(Vec<Requirement>),
}
