//! Versioned snapshot persistence for the pizzeria registry.
//!
//! Instead of an opaque object graph, the registry is serialized as an
//! explicit, versioned record schema: ingredient records, per-kind
//! restriction sets, pizza records referencing ingredients by name, client
//! records referencing orders by id, and order records referencing pizzas
//! by name. Snapshots round-trip through JSON in a `.dat` file.

mod error;
mod file;
mod schema;

pub use error::{Result, StoreError};
pub use file::{load_from, save_to};
pub use schema::{RegistrySnapshot, RestrictionRecord, SCHEMA_VERSION};
