//! Operator-facing operations: catalog curation, restrictions, batch
//! processing, and order history.

use common::OrderId;
use domain::{CatalogError, Money, Order, PizzaKind};

use crate::{Pizzeria, ServiceError};

impl Pizzeria {
    // ------------------------------------------------------------------
    // Ingredient curation
    // ------------------------------------------------------------------

    /// Registers a new ingredient with its unit price.
    #[tracing::instrument(skip(self))]
    pub fn create_ingredient(&mut self, name: &str, price: Money) -> Result<(), CatalogError> {
        self.catalog.create_ingredient(name, price)
    }

    /// Changes an ingredient's price. Every pizza carrying it sees its
    /// price floor move immediately.
    #[tracing::instrument(skip(self))]
    pub fn set_ingredient_price(&mut self, name: &str, price: Money) -> Result<(), CatalogError> {
        self.catalog.set_ingredient_price(name, price)
    }

    /// Corrects an ingredient's name across the whole catalog.
    #[tracing::instrument(skip(self))]
    pub fn rename_ingredient(&mut self, name: &str, new_name: &str) -> Result<(), CatalogError> {
        self.catalog.rename_ingredient(name, new_name)
    }

    /// Registered ingredient names, sorted.
    pub fn ingredient_names(&self) -> Vec<String> {
        self.catalog.ingredient_names()
    }

    /// Forbids an ingredient for a pizza kind, on top of the built-in
    /// policy. Returns false if the restriction was already declared.
    #[tracing::instrument(skip(self))]
    pub fn forbid_ingredient(
        &mut self,
        name: &str,
        kind: PizzaKind,
    ) -> Result<bool, CatalogError> {
        self.catalog.forbid_ingredient(name, kind)
    }

    // ------------------------------------------------------------------
    // Pizza curation
    // ------------------------------------------------------------------

    /// Puts a new, empty pizza on the menu.
    #[tracing::instrument(skip(self))]
    pub fn create_pizza(&mut self, name: &str, kind: PizzaKind) -> Result<(), CatalogError> {
        self.catalog.create_pizza(name, kind)
    }

    /// Adds a registered ingredient to a pizza's composition.
    #[tracing::instrument(skip(self))]
    pub fn add_ingredient_to_pizza(
        &mut self,
        pizza_name: &str,
        ingredient_name: &str,
    ) -> Result<(), CatalogError> {
        self.catalog.add_ingredient_to_pizza(pizza_name, ingredient_name)
    }

    /// Removes an ingredient from a pizza's composition.
    #[tracing::instrument(skip(self))]
    pub fn remove_ingredient_from_pizza(
        &mut self,
        pizza_name: &str,
        ingredient_name: &str,
    ) -> Result<(), CatalogError> {
        self.catalog.remove_ingredient_from_pizza(pizza_name, ingredient_name)
    }

    /// Sets a pizza's sale price. Rejected below the current price floor.
    #[tracing::instrument(skip(self))]
    pub fn set_sale_price(&mut self, pizza_name: &str, price: Money) -> Result<(), CatalogError> {
        self.catalog.set_sale_price(pizza_name, price)
    }

    /// Attaches a photo file to a pizza.
    #[tracing::instrument(skip(self))]
    pub fn attach_photo(&mut self, pizza_name: &str, path: &str) -> Result<(), CatalogError> {
        self.catalog.attach_photo(pizza_name, path)
    }

    /// Ingredients on a pizza that violate its kind's restrictions, for
    /// the operator to review after tightening a policy.
    pub fn forbidden_ingredients_present(
        &self,
        pizza_name: &str,
    ) -> Result<Vec<String>, CatalogError> {
        self.catalog.forbidden_ingredients_present(pizza_name)
    }

    /// A pizza's current price floor.
    pub fn minimal_price_of(&self, pizza_name: &str) -> Result<Money, ServiceError> {
        let pizza = self
            .catalog
            .pizza(pizza_name)
            .ok_or_else(|| CatalogError::UnknownPizza {
                name: pizza_name.to_string(),
            })?;
        Ok(self.catalog.minimal_price(pizza))
    }

    /// A pizza's effective sale price (the floor when none was set).
    pub fn sale_price_of(&self, pizza_name: &str) -> Result<Money, ServiceError> {
        let pizza = self
            .catalog
            .pizza(pizza_name)
            .ok_or_else(|| CatalogError::UnknownPizza {
                name: pizza_name.to_string(),
            })?;
        Ok(self.catalog.sale_price(pizza))
    }

    // ------------------------------------------------------------------
    // Order processing & history
    // ------------------------------------------------------------------

    /// Processes every pending validated order in one batch. Returns the
    /// ids of the orders processed in this batch.
    #[tracing::instrument(skip(self))]
    pub fn process_pending_orders(&mut self) -> Vec<OrderId> {
        self.ledger.process_pending()
    }

    /// Every processed order, oldest first.
    pub fn processed_orders(&self) -> Vec<&Order> {
        self.ledger.processed_orders()
    }

    /// Processed orders of one client, oldest first.
    pub fn processed_orders_for_client(&self, client_email: &str) -> Vec<&Order> {
        self.ledger.processed_orders_for(client_email)
    }
}
