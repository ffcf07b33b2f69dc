//! Per-client aggregates.

use std::collections::BTreeMap;

use domain::{Money, PersonalInfo};

use crate::SalesStats;

/// One client's accumulated activity over processed orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientActivity {
    /// The client's registered email, the unique identity key.
    pub email: String,
    /// Personal information, when the client is still in the directory.
    pub info: Option<PersonalInfo>,
    /// Number of pizza occurrences across the client's processed orders.
    pub pizzas_ordered: u64,
    /// Accumulated profit from the client's processed orders.
    pub profit: Money,
}

impl SalesStats<'_> {
    /// Activity per client, accumulated only from processed orders and
    /// sorted by email. Clients without processed orders do not appear.
    pub fn client_activity(&self) -> Vec<ClientActivity> {
        let mut by_email: BTreeMap<String, ClientActivity> = BTreeMap::new();
        for order in self.ledger.processed_orders() {
            let key = order.client_email().to_lowercase();
            let entry = by_email
                .entry(key)
                .or_insert_with(|| ClientActivity {
                    email: order.client_email().to_string(),
                    info: self
                        .directory
                        .client(order.client_email())
                        .map(|c| c.info().clone()),
                    pizzas_ordered: 0,
                    profit: Money::zero(),
                });
            entry.pizzas_ordered += order.pizzas().len() as u64;
            entry.profit += order.profit(self.catalog);
        }
        by_email.into_values().collect()
    }

    /// Personal information of every registered client, in registration
    /// order.
    pub fn clients(&self) -> Vec<&PersonalInfo> {
        self.directory.clients().map(|c| c.info()).collect()
    }
}

#[cfg(test)]
mod tests {
    use domain::{Catalog, ClientDirectory, OrderLedger, PizzaKind};

    use super::*;

    fn fixtures() -> (Catalog, OrderLedger, ClientDirectory) {
        let mut catalog = Catalog::new();
        catalog
            .create_ingredient("Cheese", Money::from_cents(200))
            .unwrap();
        catalog
            .create_pizza("Margherita", PizzaKind::Regional)
            .unwrap();
        catalog
            .add_ingredient_to_pizza("Margherita", "Cheese")
            .unwrap();
        // minimal 2.80, sale 3.00, unit profit 0.20
        catalog
            .set_sale_price("Margherita", Money::from_cents(300))
            .unwrap();

        let mut directory = ClientDirectory::new();
        directory
            .register(
                "marie@example.fr",
                "secret123",
                PersonalInfo::new("Dupont", "Marie", "1 rue des Lilas", 30),
            )
            .unwrap();
        (catalog, OrderLedger::new(), directory)
    }

    #[test]
    fn no_processed_orders_mean_empty_activity() {
        let (catalog, ledger, directory) = fixtures();
        let stats = SalesStats::new(&catalog, &ledger, &directory);
        assert!(stats.client_activity().is_empty());
        assert_eq!(stats.clients().len(), 1);
    }

    #[test]
    fn activity_accumulates_across_processed_orders() {
        let (catalog, mut ledger, directory) = fixtures();
        for _ in 0..2 {
            let id = ledger.open_order("marie@example.fr");
            let order = ledger.order_mut(id).unwrap();
            order.add_pizza("Margherita").unwrap();
            order.add_pizza("Margherita").unwrap();
            ledger.validate(id).unwrap();
        }
        ledger.process_pending();

        let stats = SalesStats::new(&catalog, &ledger, &directory);
        let activity = stats.client_activity();
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].email, "marie@example.fr");
        assert_eq!(activity[0].pizzas_ordered, 4);
        assert_eq!(activity[0].profit, Money::from_cents(80));
        assert_eq!(
            activity[0].info.as_ref().map(|i| i.first_name.as_str()),
            Some("Marie")
        );
    }

    #[test]
    fn pending_orders_are_excluded() {
        let (catalog, mut ledger, directory) = fixtures();
        let id = ledger.open_order("marie@example.fr");
        ledger.order_mut(id).unwrap().add_pizza("Margherita").unwrap();
        ledger.validate(id).unwrap();
        let stats = SalesStats::new(&catalog, &ledger, &directory);
        assert!(stats.client_activity().is_empty());
    }
}
