use hermes_core::OrderId;
use thiserror::Error;

/// Errors surfaced by the order store port
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Order insert failed: {0}")]
    InsertFailed(String),

    #[error("Expired-order query failed: {0}")]
    QueryFailed(String),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Delete failed for order {0}: {1}")]
    DeleteFailed(OrderId, String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
