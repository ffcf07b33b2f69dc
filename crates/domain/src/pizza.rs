//! Pizzas and pizza kinds.

use serde::{Deserialize, Serialize};

use crate::evaluation::Evaluation;
use crate::money::Money;

/// The fixed enumeration of pizza kinds.
///
/// Each kind carries a built-in set of forbidden ingredient names; the
/// catalog tracks operator-declared restrictions separately on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaKind {
    Meat,
    Vegetarian,
    Regional,
}

impl PizzaKind {
    /// All kinds, in declaration order.
    pub const ALL: [PizzaKind; 3] = [PizzaKind::Meat, PizzaKind::Vegetarian, PizzaKind::Regional];

    /// Built-in forbidden ingredient names (lowercase) for this kind.
    pub fn builtin_forbidden(&self) -> &'static [&'static str] {
        match self {
            PizzaKind::Vegetarian => &["ham", "beef", "bacon"],
            PizzaKind::Meat | PizzaKind::Regional => &[],
        }
    }

    /// Returns true if the built-in policy forbids the given ingredient
    /// name (compared case-insensitively).
    pub fn forbids(&self, ingredient_name: &str) -> bool {
        let key = ingredient_name.to_lowercase();
        self.builtin_forbidden().contains(&key.as_str())
    }

    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaKind::Meat => "Meat",
            PizzaKind::Vegetarian => "Vegetarian",
            PizzaKind::Regional => "Regional",
        }
    }
}

impl std::fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pizza on sale.
///
/// Ingredients are stored as lowercased name references into the catalog's
/// ingredient registry, so repricing an ingredient immediately moves every
/// pizza's price floor. A zero `sale_price` means "unset": the effective
/// sale price then falls back to the minimal price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pizza {
    name: String,
    kind: PizzaKind,
    ingredients: Vec<String>,
    sale_price: Money,
    photo: Option<String>,
    evaluations: Vec<Evaluation>,
}

impl Pizza {
    pub(crate) fn new(name: impl Into<String>, kind: PizzaKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ingredients: Vec::new(),
            sale_price: Money::zero(),
            photo: None,
            evaluations: Vec::new(),
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pizza kind.
    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    /// Ingredient name references, in the order they were added.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Returns true if the ingredient (lowercased key) is on the pizza.
    pub fn has_ingredient(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.ingredients.iter().any(|i| *i == key)
    }

    /// Raw operator-set sale price; zero when unset. Use
    /// [`Catalog::sale_price`](crate::Catalog::sale_price) for the
    /// effective price.
    pub fn raw_sale_price(&self) -> Money {
        self.sale_price
    }

    /// Attached photo path, if any.
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// Evaluations left by clients, in creation order.
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Returns true if the given client already rated this pizza.
    pub fn rated_by(&self, client_email: &str) -> bool {
        self.evaluations
            .iter()
            .any(|e| e.client_email().eq_ignore_ascii_case(client_email))
    }

    pub(crate) fn add_ingredient(&mut self, key: String) -> bool {
        if self.ingredients.contains(&key) {
            return false;
        }
        self.ingredients.push(key);
        true
    }

    pub(crate) fn remove_ingredient(&mut self, key: &str) -> bool {
        match self.ingredients.iter().position(|i| i == key) {
            Some(pos) => {
                self.ingredients.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_sale_price(&mut self, price: Money) {
        self.sale_price = price;
    }

    pub(crate) fn set_photo(&mut self, path: String) {
        self.photo = Some(path);
    }

    pub(crate) fn push_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluations.push(evaluation);
    }
}
