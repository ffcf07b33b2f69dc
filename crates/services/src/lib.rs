//! Client- and operator-facing facade for the pizzeria engine.
//!
//! [`Pizzeria`] wires the catalog, client directory, order ledger, and the
//! client-side filter together and exposes the two role surfaces the
//! presentation layer consumes:
//! - client: registration, sessions, browsing/filtering, order lifecycle,
//!   evaluations ([`client`] module)
//! - operator: catalog curation, batch processing, history, statistics,
//!   persistence ([`operator`] module)

pub mod client;
mod error;
pub mod operator;

pub use error::ServiceError;

use std::path::Path;

use domain::{Catalog, ClientDirectory, OrderLedger, PizzaFilter};
use stats::SalesStats;
use store::RegistrySnapshot;

/// The assembled pizzeria: one catalog, one client directory, one order
/// ledger, and the persistent browsing filter.
///
/// All mutation goes through `&mut self`; wrap the whole value in a mutex
/// if it ever has to serve concurrent callers.
#[derive(Debug, Default)]
pub struct Pizzeria {
    catalog: Catalog,
    directory: ClientDirectory,
    ledger: OrderLedger,
    filter: PizzaFilter,
}

impl Pizzeria {
    /// Creates an empty pizzeria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the client directory.
    pub fn directory(&self) -> &ClientDirectory {
        &self.directory
    }

    /// Read access to the order ledger.
    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    /// Statistics view over the current state.
    pub fn stats(&self) -> SalesStats<'_> {
        SalesStats::new(&self.catalog, &self.ledger, &self.directory)
    }

    /// Saves the whole registry to a `.dat` file.
    #[tracing::instrument(skip(self))]
    pub fn save(&self, path: impl AsRef<Path> + std::fmt::Debug) -> Result<(), ServiceError> {
        let snapshot = RegistrySnapshot::capture(&self.catalog, &self.directory, &self.ledger);
        store::save_to(path, &snapshot)?;
        Ok(())
    }

    /// Loads a registry previously written by [`save`](Pizzeria::save).
    /// Sessions and browsing filters start fresh.
    #[tracing::instrument]
    pub fn load(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self, ServiceError> {
        let snapshot = store::load_from(path)?;
        let (catalog, directory, ledger) = snapshot.restore()?;
        Ok(Self {
            catalog,
            directory,
            ledger,
            filter: PizzaFilter::new(),
        })
    }
}
