//! Profit aggregations.

use common::OrderId;
use domain::{Money, OrderState};

use crate::SalesStats;

impl SalesStats<'_> {
    /// Per-unit profit for every pizza in the catalog (sale price minus
    /// minimal price), in catalog order. Independent of order counts.
    pub fn profit_per_pizza(&self) -> Vec<(String, Money)> {
        self.catalog
            .pizzas()
            .iter()
            .map(|p| (p.name().to_string(), self.catalog.unit_profit(p)))
            .collect()
    }

    /// Profit of one processed order. Returns `None` for an unknown order
    /// or one that has not been processed yet.
    pub fn order_profit(&self, id: OrderId) -> Option<Money> {
        let order = self.ledger.order(id)?;
        if order.state() != OrderState::Processed {
            return None;
        }
        Some(order.profit(self.catalog))
    }

    /// Total profit across all processed orders.
    pub fn total_profit(&self) -> Money {
        self.ledger
            .processed_orders()
            .iter()
            .map(|o| o.profit(self.catalog))
            .sum()
    }
}
