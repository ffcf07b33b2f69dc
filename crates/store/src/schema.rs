//! The explicit record schema for registry snapshots.

use common::OrderId;
use domain::{Catalog, Client, ClientDirectory, Ingredient, Order, OrderLedger, Pizza, PizzaKind};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Current snapshot schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Operator-declared forbidden ingredients for one pizza kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestrictionRecord {
    pub kind: PizzaKind,
    pub ingredients: Vec<String>,
}

/// A full snapshot of the operator's registry.
///
/// Records reference each other by name/id, never by embedded copies:
/// pizzas name their ingredients, orders name their pizzas, clients list
/// their order ids. Restoring rebuilds the exact registry state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub version: u32,
    pub ingredients: Vec<Ingredient>,
    pub restrictions: Vec<RestrictionRecord>,
    pub pizzas: Vec<Pizza>,
    pub clients: Vec<Client>,
    pub orders: Vec<Order>,
    pub pending: Vec<OrderId>,
    pub processed: Vec<OrderId>,
    pub next_order_id: u64,
}

impl RegistrySnapshot {
    /// Captures the current state of the registries.
    pub fn capture(
        catalog: &Catalog,
        directory: &ClientDirectory,
        ledger: &OrderLedger,
    ) -> Self {
        let mut ingredients: Vec<Ingredient> = catalog.ingredients().cloned().collect();
        ingredients.sort_by_key(Ingredient::key);
        let restrictions = PizzaKind::ALL
            .into_iter()
            .map(|kind| RestrictionRecord {
                kind,
                ingredients: catalog
                    .operator_forbidden(kind)
                    .map(str::to_string)
                    .collect(),
            })
            .collect();
        Self {
            version: SCHEMA_VERSION,
            ingredients,
            restrictions,
            pizzas: catalog.pizzas().to_vec(),
            clients: directory.clients().cloned().collect(),
            orders: ledger.orders().cloned().collect(),
            pending: ledger.pending().to_vec(),
            processed: ledger.processed().to_vec(),
            next_order_id: ledger.next_id(),
        }
    }

    /// Rebuilds the registries from the snapshot. Fails on an unknown
    /// schema version.
    pub fn restore(self) -> Result<(Catalog, ClientDirectory, OrderLedger)> {
        if self.version != SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                version: self.version,
            });
        }
        let catalog = Catalog::from_parts(
            self.ingredients,
            self.restrictions
                .into_iter()
                .map(|r| (r.kind, r.ingredients))
                .collect(),
            self.pizzas,
        );
        let directory = ClientDirectory::from_parts(self.clients);
        let ledger = OrderLedger::from_parts(
            self.orders,
            self.pending,
            self.processed,
            self.next_order_id,
        );
        Ok((catalog, directory, ledger))
    }
}
