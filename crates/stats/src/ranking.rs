//! Purchase counts and popularity ranking.

use crate::SalesStats;

/// A pizza and the number of times it appears in processed orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaPopularity {
    pub name: String,
    pub count: u64,
}

impl SalesStats<'_> {
    /// Number of occurrences of a pizza across all processed orders'
    /// pizza lists. Returns `None` for a pizza the catalog does not know.
    pub fn purchase_count(&self, pizza_name: &str) -> Option<u64> {
        let pizza = self.catalog.pizza(pizza_name)?;
        let count = self
            .ledger
            .processed_orders()
            .iter()
            .flat_map(|o| o.pizzas())
            .filter(|name| name.eq_ignore_ascii_case(pizza.name()))
            .count() as u64;
        Some(count)
    }

    /// Pizzas ranked by purchase count, descending. Ties keep catalog
    /// insertion order (the sort is stable).
    pub fn ranking_by_purchase_count(&self) -> Vec<PizzaPopularity> {
        let mut ranking: Vec<PizzaPopularity> = self
            .catalog
            .pizzas()
            .iter()
            .map(|p| PizzaPopularity {
                name: p.name().to_string(),
                count: self.purchase_count(p.name()).unwrap_or(0),
            })
            .collect();
        ranking.sort_by(|a, b| b.count.cmp(&a.count));
        ranking
    }
}
