//! Order ledger: the operator's split view of pending and processed orders.

use std::collections::BTreeMap;

use common::OrderId;

use crate::order::{Order, OrderError};

/// Owns every order and the id counter.
///
/// Ids are allocated from a monotonically increasing counter owned by the
/// ledger, so they are strictly increasing and unique. All mutation goes
/// through `&mut self`, which is the single mutual-exclusion boundary the
/// check-then-act transitions rely on.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    orders: BTreeMap<OrderId, Order>,
    pending: Vec<OrderId>,
    processed: Vec<OrderId>,
    next_id: u64,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    /// Creates an empty ledger. The first allocated id is 1.
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            pending: Vec::new(),
            processed: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a ledger from persisted parts. Used by the store layer.
    pub fn from_parts(
        orders: Vec<Order>,
        pending: Vec<OrderId>,
        processed: Vec<OrderId>,
        next_id: u64,
    ) -> Self {
        Self {
            orders: orders.into_iter().map(|o| (o.id(), o)).collect(),
            pending,
            processed,
            next_id,
        }
    }

    /// Opens a new order for a client and returns its id.
    pub fn open_order(&mut self, client_email: &str) -> OrderId {
        let id = OrderId::from_u64(self.next_id);
        self.next_id += 1;
        self.orders.insert(id, Order::new(id, client_email));
        tracing::info!(%id, client_email, "order opened");
        id
    }

    /// Looks up an order.
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Mutable lookup, for composing a `Created` order.
    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    /// Iterates over every order the ledger knows, by ascending id.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Validates an order and queues it for processing.
    pub fn validate(&mut self, id: OrderId) -> Result<(), OrderError> {
        let order = self
            .orders
            .get_mut(&id)
            .ok_or(OrderError::Unknown { id })?;
        order.validate()?;
        self.pending.push(id);
        tracing::info!(%id, "order validated");
        Ok(())
    }

    /// Cancels a `Created` order: the order is deleted, not transitioned.
    pub fn cancel(&mut self, id: OrderId) -> Result<(), OrderError> {
        let order = self.orders.get(&id).ok_or(OrderError::Unknown { id })?;
        if !order.state().can_cancel() {
            return Err(OrderError::InvalidTransition {
                state: order.state(),
                action: "cancel",
            });
        }
        self.orders.remove(&id);
        tracing::info!(%id, "order cancelled");
        Ok(())
    }

    /// Processes every pending order, in validation order, and returns the
    /// batch just processed.
    pub fn process_pending(&mut self) -> Vec<OrderId> {
        let batch: Vec<OrderId> = std::mem::take(&mut self.pending);
        for id in &batch {
            match self.orders.get_mut(id).map(Order::process) {
                Some(Ok(())) => self.processed.push(*id),
                Some(Err(e)) => tracing::warn!(id = %id, error = %e, "skipping order in batch"),
                None => tracing::warn!(id = %id, "pending order missing from ledger"),
            }
        }
        tracing::info!(count = batch.len(), "processed pending orders");
        batch
    }

    /// Ids awaiting processing, in validation order.
    pub fn pending(&self) -> &[OrderId] {
        &self.pending
    }

    /// Ids already processed, in processing order.
    pub fn processed(&self) -> &[OrderId] {
        &self.processed
    }

    /// Processed orders sorted by creation time ascending.
    pub fn processed_orders(&self) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .processed
            .iter()
            .filter_map(|id| self.orders.get(id))
            .collect();
        orders.sort_by_key(|o| o.created_at());
        orders
    }

    /// Processed orders of one client, sorted by creation time ascending.
    pub fn processed_orders_for(&self, client_email: &str) -> Vec<&Order> {
        self.processed_orders()
            .into_iter()
            .filter(|o| o.client_email().eq_ignore_ascii_case(client_email))
            .collect()
    }

    /// The next id the counter will hand out. Used by the store layer.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
