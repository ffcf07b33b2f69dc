//! Facade error type.

use common::OrderId;
use domain::{CatalogError, OrderError, SessionError};
use store::StoreError;
use thiserror::Error;

/// Errors surfaced by session-scoped and cross-registry operations.
///
/// Component errors pass through transparently so callers can match on
/// the distinct kind; the extra variants cover rules that only exist at
/// the facade (ownership, evaluation gating).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No active session, or bad credentials.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A catalog rule rejected the operation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An order rule rejected the operation.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The order exists but belongs to another client.
    #[error("Order {id} does not belong to this client")]
    NotOrderOwner { id: OrderId },

    /// A pizza count below 1 was requested.
    #[error("Count must be at least 1")]
    InvalidCount,

    /// The rating is above the maximum.
    #[error("Invalid rating: {rating} (must be at most 5)")]
    InvalidRating { rating: u8 },

    /// The client never received this pizza in a processed order.
    #[error("Pizza never purchased: {name}")]
    NotPurchased { name: String },

    /// The client already rated this pizza; the first evaluation stands.
    #[error("Pizza already rated: {name}")]
    AlreadyRated { name: String },
}
