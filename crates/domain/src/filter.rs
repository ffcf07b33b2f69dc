//! Composable filters over the pizza set.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::money::Money;
use crate::pizza::{Pizza, PizzaKind};

/// Three independent, optional predicates over the catalog's pizzas.
///
/// Filters accumulate across calls until [`clear`](PizzaFilter::clear);
/// applying them is a pure read. An empty filter matches everything, and
/// composition is a logical AND.
#[derive(Debug, Clone, Default)]
pub struct PizzaFilter {
    kind: Option<PizzaKind>,
    max_price: Option<Money>,
    ingredients: BTreeSet<String>,
}

impl PizzaFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an exact kind match.
    pub fn set_kind(&mut self, kind: PizzaKind) {
        self.kind = Some(kind);
    }

    /// Requires the sale price to be at most `price` (inclusive). A
    /// non-positive bound is ignored.
    pub fn set_max_price(&mut self, price: Money) {
        if price.is_positive() {
            self.max_price = Some(price);
        }
    }

    /// Requires every given ingredient name to be present on the pizza
    /// (case-insensitive). Blank entries are ignored; names accumulate.
    pub fn require_ingredients<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if !name.trim().is_empty() {
                self.ingredients.insert(name.to_lowercase());
            }
        }
    }

    /// Drops every active filter.
    pub fn clear(&mut self) {
        self.kind = None;
        self.max_price = None;
        self.ingredients.clear();
    }

    /// Returns true if no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.max_price.is_none() && self.ingredients.is_empty()
    }

    /// Returns true if the pizza satisfies every active predicate.
    pub fn matches(&self, catalog: &Catalog, pizza: &Pizza) -> bool {
        if let Some(kind) = self.kind
            && pizza.kind() != kind
        {
            return false;
        }
        if let Some(max) = self.max_price
            && catalog.sale_price(pizza) > max
        {
            return false;
        }
        self.ingredients
            .iter()
            .all(|name| pizza.has_ingredient(name))
    }

    /// The matching subset of the catalog, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Pizza> {
        catalog
            .pizzas()
            .iter()
            .filter(|p| self.matches(catalog, p))
            .collect()
    }
}
