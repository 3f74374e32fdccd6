//! Events emitted by the backend worker toward the UI thread.

use shared::domain::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    UpdateOrder,
    UpdateWaiter,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Info(String),
    /// A fetch round-trip completed; the payload replaces the collection
    /// wholesale.
    OrdersFetched(Vec<Order>),
    /// A mutation round-trip came back with a success status. Failed
    /// round-trips emit nothing here.
    MutationApplied(MutationKind),
}
