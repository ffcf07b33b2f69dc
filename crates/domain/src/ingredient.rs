//! Ingredient value type.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// An ingredient available to the operator.
///
/// The catalog keys ingredients by their lowercased name; the struct keeps
/// the display name as entered. Price and name are mutable, but both are
/// guarded so an ingredient never ends up blank or free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    price: Money,
}

impl Ingredient {
    /// Creates an ingredient. Returns `None` for a blank name or a
    /// non-positive price.
    pub fn new(name: impl Into<String>, price: Money) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() || !price.is_positive() {
            return None;
        }
        Some(Self { name, price })
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lowercased key the catalog indexes this ingredient by.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns the current price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Updates the price. A non-positive price is rejected.
    pub fn set_price(&mut self, price: Money) -> bool {
        if !price.is_positive() {
            return false;
        }
        self.price = price;
        true
    }

    /// Corrects the display name. A blank name is rejected.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() {
            return false;
        }
        self.name = name;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_name() {
        assert!(Ingredient::new("  ", Money::from_cents(100)).is_none());
    }

    #[test]
    fn new_rejects_non_positive_price() {
        assert!(Ingredient::new("Cheese", Money::zero()).is_none());
        assert!(Ingredient::new("Cheese", Money::from_cents(-10)).is_none());
    }

    #[test]
    fn key_is_lowercased() {
        let ing = Ingredient::new("Cheese", Money::from_cents(200)).unwrap();
        assert_eq!(ing.key(), "cheese");
        assert_eq!(ing.name(), "Cheese");
    }

    #[test]
    fn set_price_guards_zero() {
        let mut ing = Ingredient::new("Ham", Money::from_cents(150)).unwrap();
        assert!(!ing.set_price(Money::zero()));
        assert_eq!(ing.price(), Money::from_cents(150));
        assert!(ing.set_price(Money::from_cents(180)));
        assert_eq!(ing.price(), Money::from_cents(180));
    }

    #[test]
    fn set_name_rejects_blank() {
        let mut ing = Ingredient::new("Ham", Money::from_cents(150)).unwrap();
        assert!(!ing.set_name(""));
        assert_eq!(ing.name(), "Ham");
        assert!(ing.set_name("Smoked ham"));
        assert_eq!(ing.name(), "Smoked ham");
    }
}
