use crate::model::TableStatus;

/// Operations on one table. Each returns the table as it is afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// free -> occupied
    Claim,
    /// occupied -> free or cleaning
    Release(TableStatus),
    /// Admin override, any -> any.
    SetStatus(TableStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStoreAction {
    /// Occupy the free table with the lowest id.
    ClaimFree,
}
