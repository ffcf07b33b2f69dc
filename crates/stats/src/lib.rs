//! Read-only sales statistics for the pizzeria engine.
//!
//! [`SalesStats`] borrows the catalog, ledger, and client directory and
//! derives aggregates from **processed** orders only. Every query is a
//! pure read: zero processed orders yield zero/empty results, never an
//! error.

mod customers;
mod profit;
mod ranking;

pub use customers::ClientActivity;
pub use ranking::PizzaPopularity;

use domain::{Catalog, ClientDirectory, OrderLedger};

/// Read-only view over the registries, computing sales aggregates.
#[derive(Debug, Clone, Copy)]
pub struct SalesStats<'a> {
    catalog: &'a Catalog,
    ledger: &'a OrderLedger,
    directory: &'a ClientDirectory,
}

impl<'a> SalesStats<'a> {
    /// Creates a statistics view over the given registries.
    pub fn new(
        catalog: &'a Catalog,
        ledger: &'a OrderLedger,
        directory: &'a ClientDirectory,
    ) -> Self {
        Self {
            catalog,
            ledger,
            directory,
        }
    }
}
