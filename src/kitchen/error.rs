//! Error types for the kitchen actor.

use thiserror::Error;

use crate::model::OrderId;

/// Errors surfaced to kitchen clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KitchenError {
    /// No order with this id was ever accepted by the kitchen.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// The kitchen actor is no longer accepting requests.
    #[error("kitchen closed")]
    KitchenClosed,

    /// The kitchen actor dropped the response channel.
    #[error("kitchen dropped response channel")]
    KitchenDropped,
}

/// Error returned when shutdown finds the actor task failed.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// The kitchen task panicked or was aborted before it could finish.
    #[error("kitchen task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
