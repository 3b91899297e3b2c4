use crate::model::{ArrivalId, OrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Move to a new status. Returns the updated order.
    ChangeStatus(OrderStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStoreAction {
    /// Orders placed by one arrival, oldest first.
    ByArrival(ArrivalId),
}
