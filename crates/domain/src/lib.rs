//! Domain engine for the pizzeria ordering system.
//!
//! This crate provides the core domain types and registries:
//! - [`Catalog`] owning ingredients, pizzas, and the per-kind restriction
//!   policy, and computing minimal/sale prices
//! - [`Order`] with its three-state lifecycle and the [`OrderLedger`]
//!   splitting orders into pending and processed
//! - [`ClientDirectory`] with registration, credential checks, and explicit
//!   [`Session`] values
//! - [`PizzaFilter`] composable predicates over the pizza set

pub mod catalog;
pub mod client;
pub mod directory;
pub mod evaluation;
pub mod filter;
pub mod ingredient;
pub mod ledger;
pub mod money;
pub mod order;
pub mod pizza;

pub use catalog::{Catalog, CatalogError};
pub use client::{Client, PersonalInfo};
pub use directory::{ClientDirectory, RegisterError, Session, SessionError};
pub use evaluation::Evaluation;
pub use filter::PizzaFilter;
pub use ingredient::Ingredient;
pub use ledger::OrderLedger;
pub use money::Money;
pub use order::{Order, OrderError, OrderState};
pub use pizza::{Pizza, PizzaKind};
