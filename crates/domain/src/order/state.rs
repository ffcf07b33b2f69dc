//! Order state machine.

use serde::{Deserialize, Serialize};

/// The state of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// Created ──► Validated ──► Processed
/// ```
///
/// No transition skips a state and there is no path back from
/// `Validated`. Cancellation is not a transition: it deletes a `Created`
/// order outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderState {
    /// Order is being composed; pizzas can be added and removed.
    #[default]
    Created,

    /// Order was handed to the operator; the pizza list is frozen.
    Validated,

    /// Order was batch-processed (terminal state).
    Processed,
}

impl OrderState {
    /// Returns true if pizzas can be added or removed in this state.
    pub fn can_modify(&self) -> bool {
        matches!(self, OrderState::Created)
    }

    /// Returns true if the order can be validated in this state.
    pub fn can_validate(&self) -> bool {
        matches!(self, OrderState::Created)
    }

    /// Returns true if the order can be processed in this state.
    pub fn can_process(&self) -> bool {
        matches!(self, OrderState::Validated)
    }

    /// Returns true if the order can still be cancelled (deleted).
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderState::Created)
    }

    /// Returns true if this is the terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Processed)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Created => "Created",
            OrderState::Validated => "Validated",
            OrderState::Processed => "Processed",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
