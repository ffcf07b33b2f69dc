use serde::{Deserialize, Serialize};

/// Unique identifier for an order.
///
/// Order ids are allocated by the order ledger from a monotonically
/// increasing counter, so ids are strictly increasing and never reused
/// within one registry. Wrapping the counter value in a newtype prevents
/// mixing order ids up with other integer quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates an order id from a raw counter value.
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying counter value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<OrderId> for u64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}
