//! Orders and their lifecycle.

mod state;

pub use state::OrderState;

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::money::Money;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The order is not in a state that allows the attempted action.
    #[error("Invalid state transition: cannot {action} from {state} state")]
    InvalidTransition {
        state: OrderState,
        action: &'static str,
    },

    /// The order has no pizzas and cannot be validated.
    #[error("Order has no pizzas")]
    Empty,

    /// The pizza is not part of the order.
    #[error("Pizza not in order: {name}")]
    PizzaNotInOrder { name: String },

    /// No order registered under that id.
    #[error("Unknown order: {id}")]
    Unknown { id: OrderId },
}

/// A client's order: a mutable-then-frozen list of pizza references.
///
/// Pizzas are referenced by name and may repeat. Prices are derived on
/// demand against the catalog, so an operator price change before
/// processing is reflected in the totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    client_email: String,
    pizzas: Vec<String>,
    created_at: DateTime<Utc>,
    state: OrderState,
}

impl Order {
    pub(crate) fn new(id: OrderId, client_email: impl Into<String>) -> Self {
        Self {
            id,
            client_email: client_email.into(),
            pizzas: Vec::new(),
            created_at: Utc::now(),
            state: OrderState::Created,
        }
    }

    /// The ledger-allocated identifier.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Email of the owning client.
    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Pizza name references, with repeats, in the order they were added.
    pub fn pizzas(&self) -> &[String] {
        &self.pizzas
    }

    /// When the order was opened.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Returns true if the order contains the pizza (case-insensitive).
    pub fn contains_pizza(&self, name: &str) -> bool {
        self.pizzas.iter().any(|p| p.eq_ignore_ascii_case(name))
    }

    /// Appends a pizza reference. Only allowed while `Created`.
    pub fn add_pizza(&mut self, name: impl Into<String>) -> Result<(), OrderError> {
        if !self.state.can_modify() {
            return Err(OrderError::InvalidTransition {
                state: self.state,
                action: "add pizza",
            });
        }
        self.pizzas.push(name.into());
        Ok(())
    }

    /// Removes one occurrence of a pizza. Only allowed while `Created`.
    pub fn remove_pizza(&mut self, name: &str) -> Result<(), OrderError> {
        if !self.state.can_modify() {
            return Err(OrderError::InvalidTransition {
                state: self.state,
                action: "remove pizza",
            });
        }
        match self
            .pizzas
            .iter()
            .position(|p| p.eq_ignore_ascii_case(name))
        {
            Some(pos) => {
                self.pizzas.remove(pos);
                Ok(())
            }
            None => Err(OrderError::PizzaNotInOrder {
                name: name.to_string(),
            }),
        }
    }

    /// Freezes the pizza list and hands the order to the operator side.
    /// Fails on an empty order.
    pub fn validate(&mut self) -> Result<(), OrderError> {
        if !self.state.can_validate() {
            return Err(OrderError::InvalidTransition {
                state: self.state,
                action: "validate",
            });
        }
        if self.pizzas.is_empty() {
            return Err(OrderError::Empty);
        }
        self.state = OrderState::Validated;
        Ok(())
    }

    /// Marks the order processed. Only a `Validated` order can be
    /// processed.
    pub fn process(&mut self) -> Result<(), OrderError> {
        if !self.state.can_process() {
            return Err(OrderError::InvalidTransition {
                state: self.state,
                action: "process",
            });
        }
        self.state = OrderState::Processed;
        Ok(())
    }

    /// Total price: the sum of current sale prices of the ordered pizzas.
    pub fn total_price(&self, catalog: &Catalog) -> Money {
        self.pizzas
            .iter()
            .filter_map(|name| catalog.pizza(name))
            .map(|p| catalog.sale_price(p))
            .sum()
    }

    /// Total profit: the sum of (sale price - minimal price) per pizza.
    pub fn profit(&self, catalog: &Catalog) -> Money {
        self.pizzas
            .iter()
            .filter_map(|name| catalog.pizza(name))
            .map(|p| catalog.unit_profit(p))
            .sum()
    }
}
