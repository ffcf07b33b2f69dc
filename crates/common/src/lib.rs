//! Shared identifier types used across the pizzeria engine crates.

mod types;

pub use types::OrderId;
