//! Client-facing operations: sessions, browsing, orders, evaluations.

use common::OrderId;
use domain::evaluation::MAX_RATING;
use domain::{
    CatalogError, Evaluation, Money, Order, OrderError, OrderState, PersonalInfo, Pizza,
    PizzaKind, RegisterError, Session, SessionError,
};

use crate::{Pizzeria, ServiceError};

impl Pizzeria {
    // ------------------------------------------------------------------
    // Account & session
    // ------------------------------------------------------------------

    /// Registers a new client account.
    #[tracing::instrument(skip(self, password, info))]
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        info: PersonalInfo,
    ) -> Result<(), RegisterError> {
        self.directory.register(email, password, info)
    }

    /// Opens a session for a registered client.
    #[tracing::instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, SessionError> {
        self.directory.login(email, password)
    }

    /// Closes a session.
    #[tracing::instrument(skip(self, session))]
    pub fn logout(&mut self, session: &Session) -> Result<(), SessionError> {
        self.directory.logout(session)
    }

    // ------------------------------------------------------------------
    // Browsing & filters
    // ------------------------------------------------------------------

    /// Every pizza on sale, in catalog order.
    pub fn pizzas(&self) -> &[Pizza] {
        self.catalog.pizzas()
    }

    /// Restricts browsing to one pizza kind.
    pub fn set_kind_filter(&mut self, kind: PizzaKind) {
        self.filter.set_kind(kind);
    }

    /// Restricts browsing to pizzas at or below a sale price.
    pub fn set_max_price_filter(&mut self, price: Money) {
        self.filter.set_max_price(price);
    }

    /// Restricts browsing to pizzas carrying all the given ingredients.
    pub fn require_ingredient_filter<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter.require_ingredients(names);
    }

    /// Drops every active browsing filter.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// The pizzas matching the active filters.
    pub fn filtered_pizzas(&self) -> Vec<&Pizza> {
        self.filter.apply(&self.catalog)
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    /// Opens a new empty order for the session's client.
    #[tracing::instrument(skip(self, session))]
    pub fn start_order(&mut self, session: &Session) -> Result<OrderId, ServiceError> {
        let email = self.directory.client_for(session)?.email().to_string();
        let id = self.ledger.open_order(&email);
        self.directory.attach_order(&email, id);
        Ok(id)
    }

    // Resolves the session and checks the order exists and belongs to it.
    fn own_order(&self, session: &Session, id: OrderId) -> Result<(), ServiceError> {
        let client = self.directory.client_for(session)?;
        if self.ledger.order(id).is_none() {
            return Err(OrderError::Unknown { id }.into());
        }
        if !client.owns_order(id) {
            return Err(ServiceError::NotOrderOwner { id });
        }
        Ok(())
    }

    /// Adds `count` copies of a pizza to one of the client's orders.
    #[tracing::instrument(skip(self, session))]
    pub fn add_pizzas_to_order(
        &mut self,
        session: &Session,
        id: OrderId,
        pizza_name: &str,
        count: u32,
    ) -> Result<(), ServiceError> {
        self.own_order(session, id)?;
        if count == 0 {
            return Err(ServiceError::InvalidCount);
        }
        let canonical = self
            .catalog
            .pizza(pizza_name)
            .ok_or_else(|| CatalogError::UnknownPizza {
                name: pizza_name.to_string(),
            })?
            .name()
            .to_string();
        if let Some(order) = self.ledger.order_mut(id) {
            for _ in 0..count {
                order.add_pizza(canonical.clone())?;
            }
        }
        Ok(())
    }

    /// Removes one occurrence of a pizza from one of the client's orders.
    #[tracing::instrument(skip(self, session))]
    pub fn remove_pizza_from_order(
        &mut self,
        session: &Session,
        id: OrderId,
        pizza_name: &str,
    ) -> Result<(), ServiceError> {
        self.own_order(session, id)?;
        if let Some(order) = self.ledger.order_mut(id) {
            order.remove_pizza(pizza_name)?;
        }
        Ok(())
    }

    /// Validates an order, handing it over for processing.
    #[tracing::instrument(skip(self, session))]
    pub fn validate_order(&mut self, session: &Session, id: OrderId) -> Result<(), ServiceError> {
        self.own_order(session, id)?;
        self.ledger.validate(id)?;
        Ok(())
    }

    /// Cancels (deletes) an order that is still being composed.
    #[tracing::instrument(skip(self, session))]
    pub fn cancel_order(&mut self, session: &Session, id: OrderId) -> Result<(), ServiceError> {
        self.own_order(session, id)?;
        let email = self.directory.client_for(session)?.email().to_string();
        self.ledger.cancel(id)?;
        self.directory.detach_order(&email, id);
        Ok(())
    }

    /// The client's orders still being composed, by creation time
    /// ascending.
    pub fn orders_in_progress(&self, session: &Session) -> Result<Vec<&Order>, ServiceError> {
        self.client_orders(session, |state| state == OrderState::Created)
    }

    /// The client's validated and processed orders, by creation time
    /// ascending.
    pub fn past_orders(&self, session: &Session) -> Result<Vec<&Order>, ServiceError> {
        self.client_orders(session, |state| state != OrderState::Created)
    }

    fn client_orders(
        &self,
        session: &Session,
        keep: impl Fn(OrderState) -> bool,
    ) -> Result<Vec<&Order>, ServiceError> {
        let client = self.directory.client_for(session)?;
        let mut orders: Vec<&Order> = client
            .orders()
            .iter()
            .filter_map(|id| self.ledger.order(*id))
            .filter(|o| keep(o.state()))
            .collect();
        orders.sort_by_key(|o| o.created_at());
        Ok(orders)
    }

    // ------------------------------------------------------------------
    // Evaluations
    // ------------------------------------------------------------------

    /// Rates a pizza the client received in a processed order. Each
    /// client rates a given pizza at most once; a repeat attempt fails
    /// and leaves the first evaluation untouched.
    #[tracing::instrument(skip(self, session, comment))]
    pub fn rate_pizza(
        &mut self,
        session: &Session,
        pizza_name: &str,
        rating: u8,
        comment: Option<String>,
    ) -> Result<(), ServiceError> {
        let client = self.directory.client_for(session)?;
        let email = client.email().to_string();
        let order_ids = client.orders().to_vec();

        let canonical = {
            let pizza = self
                .catalog
                .pizza(pizza_name)
                .ok_or_else(|| CatalogError::UnknownPizza {
                    name: pizza_name.to_string(),
                })?;
            if pizza.rated_by(&email) {
                return Err(ServiceError::AlreadyRated {
                    name: pizza.name().to_string(),
                });
            }
            pizza.name().to_string()
        };
        if rating > MAX_RATING {
            return Err(ServiceError::InvalidRating { rating });
        }

        let purchased = order_ids
            .iter()
            .filter_map(|id| self.ledger.order(*id))
            .any(|o| o.state() == OrderState::Processed && o.contains_pizza(&canonical));
        if !purchased {
            return Err(ServiceError::NotPurchased { name: canonical });
        }

        let evaluation = Evaluation::new(email, rating, comment)
            .ok_or(ServiceError::InvalidRating { rating })?;
        self.catalog.record_evaluation(&canonical, evaluation)?;
        Ok(())
    }

    /// Average rating of a pizza. `Ok(None)` means "no ratings yet",
    /// distinct from the unknown-pizza error.
    pub fn average_rating(&self, pizza_name: &str) -> Result<Option<f64>, ServiceError> {
        let pizza = self
            .catalog
            .pizza(pizza_name)
            .ok_or_else(|| CatalogError::UnknownPizza {
                name: pizza_name.to_string(),
            })?;
        let evaluations = pizza.evaluations();
        if evaluations.is_empty() {
            return Ok(None);
        }
        let sum: u64 = evaluations.iter().map(|e| u64::from(e.rating())).sum();
        Ok(Some(sum as f64 / evaluations.len() as f64))
    }

    /// All evaluations left on a pizza, in creation order.
    pub fn evaluations(&self, pizza_name: &str) -> Result<&[Evaluation], ServiceError> {
        let pizza = self
            .catalog
            .pizza(pizza_name)
            .ok_or_else(|| CatalogError::UnknownPizza {
                name: pizza_name.to_string(),
            })?;
        Ok(pizza.evaluations())
    }
}
