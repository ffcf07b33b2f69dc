//! Catalog of ingredients and pizzas, restriction policy, pricing engine.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use thiserror::Error;

use crate::evaluation::Evaluation;
use crate::ingredient::Ingredient;
use crate::money::Money;
use crate::pizza::{Pizza, PizzaKind};

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required name was blank.
    #[error("Name must not be blank")]
    BlankName,

    /// A price was zero or negative.
    #[error("Invalid price: {price} (must be greater than 0)")]
    InvalidPrice { price: Money },

    /// An ingredient with that name already exists.
    #[error("Ingredient already exists: {name}")]
    DuplicateIngredient { name: String },

    /// No ingredient registered under that name.
    #[error("Unknown ingredient: {name}")]
    UnknownIngredient { name: String },

    /// A pizza with that name already exists.
    #[error("Pizza already exists: {name}")]
    DuplicatePizza { name: String },

    /// No pizza registered under that name.
    #[error("Unknown pizza: {name}")]
    UnknownPizza { name: String },

    /// The ingredient is forbidden for the pizza's kind.
    #[error("Ingredient {ingredient} is forbidden for {kind} pizzas")]
    ForbiddenIngredient {
        ingredient: String,
        kind: PizzaKind,
    },

    /// The ingredient is already on the pizza (no-op failure).
    #[error("Ingredient already on pizza: {ingredient}")]
    AlreadyOnPizza { ingredient: String },

    /// The ingredient is not on the pizza.
    #[error("Ingredient not on pizza: {ingredient}")]
    NotOnPizza { ingredient: String },

    /// The requested sale price is below the current minimal price.
    #[error("Sale price {price} is below the minimal price {minimal}")]
    BelowMinimalPrice { price: Money, minimal: Money },

    /// The photo path does not exist or has an unsupported extension.
    #[error("Photo rejected: {path}")]
    PhotoRejected { path: String },
}

/// The operator-owned catalog.
///
/// Owns the ingredient registry (keyed by lowercased name), the pizza set
/// (insertion order preserved; this order is the documented tie-break for
/// popularity rankings), and the operator-declared forbidden-ingredient
/// sets layered on top of each kind's built-in policy.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: HashMap<String, Ingredient>,
    forbidden: HashMap<PizzaKind, BTreeSet<String>>,
    pizzas: Vec<Pizza>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        let forbidden = PizzaKind::ALL
            .into_iter()
            .map(|kind| (kind, BTreeSet::new()))
            .collect();
        Self {
            ingredients: HashMap::new(),
            forbidden,
            pizzas: Vec::new(),
        }
    }

    /// Rebuilds a catalog from persisted parts. Used by the store layer.
    pub fn from_parts(
        ingredients: Vec<Ingredient>,
        restrictions: Vec<(PizzaKind, Vec<String>)>,
        pizzas: Vec<Pizza>,
    ) -> Self {
        let mut catalog = Self::new();
        for ingredient in ingredients {
            catalog.ingredients.insert(ingredient.key(), ingredient);
        }
        for (kind, names) in restrictions {
            let set = catalog.forbidden.entry(kind).or_default();
            set.extend(names.into_iter().map(|n| n.to_lowercase()));
        }
        catalog.pizzas = pizzas;
        catalog
    }

    // ------------------------------------------------------------------
    // Ingredients
    // ------------------------------------------------------------------

    /// Registers a new ingredient.
    pub fn create_ingredient(
        &mut self,
        name: &str,
        price: Money,
    ) -> Result<(), CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        if !price.is_positive() {
            return Err(CatalogError::InvalidPrice { price });
        }
        let key = name.to_lowercase();
        if self.ingredients.contains_key(&key) {
            return Err(CatalogError::DuplicateIngredient {
                name: name.to_string(),
            });
        }
        // Blank name and price were checked above.
        if let Some(ingredient) = Ingredient::new(name, price) {
            self.ingredients.insert(key, ingredient);
        }
        Ok(())
    }

    /// Changes the price of an existing ingredient. The new price becomes
    /// part of every owning pizza's price floor immediately.
    pub fn set_ingredient_price(
        &mut self,
        name: &str,
        price: Money,
    ) -> Result<(), CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        if !price.is_positive() {
            return Err(CatalogError::InvalidPrice { price });
        }
        let ingredient = self
            .ingredients
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| CatalogError::UnknownIngredient {
                name: name.to_string(),
            })?;
        ingredient.set_price(price);
        Ok(())
    }

    /// Corrects an ingredient's name, re-keying the registry and every
    /// pizza that references it.
    pub fn rename_ingredient(&mut self, name: &str, new_name: &str) -> Result<(), CatalogError> {
        if new_name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        let old_key = name.to_lowercase();
        let new_key = new_name.to_lowercase();
        if !self.ingredients.contains_key(&old_key) {
            return Err(CatalogError::UnknownIngredient {
                name: name.to_string(),
            });
        }
        if new_key != old_key && self.ingredients.contains_key(&new_key) {
            return Err(CatalogError::DuplicateIngredient {
                name: new_name.to_string(),
            });
        }
        if let Some(mut ingredient) = self.ingredients.remove(&old_key) {
            ingredient.set_name(new_name);
            self.ingredients.insert(new_key.clone(), ingredient);
        }
        if new_key != old_key {
            for pizza in &mut self.pizzas {
                if pizza.remove_ingredient(&old_key) {
                    pizza.add_ingredient(new_key.clone());
                }
            }
            for set in self.forbidden.values_mut() {
                if set.remove(&old_key) {
                    set.insert(new_key.clone());
                }
            }
        }
        Ok(())
    }

    /// Looks up an ingredient by name (case-insensitive).
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(&name.to_lowercase())
    }

    /// Iterates over all registered ingredients.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// Display names of all registered ingredients, sorted.
    pub fn ingredient_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .ingredients
            .values()
            .map(|i| i.name().to_string())
            .collect();
        names.sort();
        names
    }

    // ------------------------------------------------------------------
    // Restriction policy
    // ------------------------------------------------------------------

    /// Adds an operator restriction forbidding an ingredient for a kind.
    /// Returns whether the restriction was newly added.
    pub fn forbid_ingredient(
        &mut self,
        name: &str,
        kind: PizzaKind,
    ) -> Result<bool, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        let key = name.to_lowercase();
        if !self.ingredients.contains_key(&key) {
            return Err(CatalogError::UnknownIngredient {
                name: name.to_string(),
            });
        }
        Ok(self.forbidden.entry(kind).or_default().insert(key))
    }

    /// Returns true if the ingredient name is forbidden for the kind,
    /// either by the built-in policy or by an operator restriction.
    pub fn is_forbidden(&self, kind: PizzaKind, ingredient_name: &str) -> bool {
        let key = ingredient_name.to_lowercase();
        kind.forbids(&key)
            || self
                .forbidden
                .get(&kind)
                .is_some_and(|set| set.contains(&key))
    }

    /// Operator-declared restrictions for a kind (lowercase names,
    /// excluding the built-in set).
    pub fn operator_forbidden(&self, kind: PizzaKind) -> impl Iterator<Item = &str> {
        self.forbidden
            .get(&kind)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    // ------------------------------------------------------------------
    // Pizzas
    // ------------------------------------------------------------------

    /// Creates a pizza with no ingredients and an unset sale price.
    pub fn create_pizza(&mut self, name: &str, kind: PizzaKind) -> Result<(), CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        if self.pizza(name).is_some() {
            return Err(CatalogError::DuplicatePizza {
                name: name.to_string(),
            });
        }
        self.pizzas.push(Pizza::new(name, kind));
        Ok(())
    }

    /// Looks up a pizza by name (case-insensitive).
    pub fn pizza(&self, name: &str) -> Option<&Pizza> {
        self.pizzas
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// All pizzas, in insertion order.
    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    fn pizza_index(&self, name: &str) -> Result<usize, CatalogError> {
        self.pizzas
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::UnknownPizza {
                name: name.to_string(),
            })
    }

    /// Appends a registered ingredient to a pizza, subject to the
    /// restriction policy. Adding an ingredient twice is a distinct,
    /// state-preserving failure.
    pub fn add_ingredient_to_pizza(
        &mut self,
        pizza_name: &str,
        ingredient_name: &str,
    ) -> Result<(), CatalogError> {
        let idx = self.pizza_index(pizza_name)?;
        let key = ingredient_name.to_lowercase();
        if ingredient_name.trim().is_empty() || !self.ingredients.contains_key(&key) {
            return Err(CatalogError::UnknownIngredient {
                name: ingredient_name.to_string(),
            });
        }
        let kind = self.pizzas[idx].kind();
        if self.is_forbidden(kind, &key) {
            return Err(CatalogError::ForbiddenIngredient {
                ingredient: ingredient_name.to_string(),
                kind,
            });
        }
        if !self.pizzas[idx].add_ingredient(key) {
            return Err(CatalogError::AlreadyOnPizza {
                ingredient: ingredient_name.to_string(),
            });
        }
        Ok(())
    }

    /// Removes an ingredient from a pizza.
    pub fn remove_ingredient_from_pizza(
        &mut self,
        pizza_name: &str,
        ingredient_name: &str,
    ) -> Result<(), CatalogError> {
        let idx = self.pizza_index(pizza_name)?;
        let key = ingredient_name.to_lowercase();
        if ingredient_name.trim().is_empty() || !self.ingredients.contains_key(&key) {
            return Err(CatalogError::UnknownIngredient {
                name: ingredient_name.to_string(),
            });
        }
        if !self.pizzas[idx].remove_ingredient(&key) {
            return Err(CatalogError::NotOnPizza {
                ingredient: ingredient_name.to_string(),
            });
        }
        Ok(())
    }

    /// Ingredients currently on the pizza whose names are forbidden for
    /// its kind. Restrictions can be declared after ingredients were
    /// placed, so this audits after the fact.
    pub fn forbidden_ingredients_present(
        &self,
        pizza_name: &str,
    ) -> Result<Vec<String>, CatalogError> {
        let idx = self.pizza_index(pizza_name)?;
        let pizza = &self.pizzas[idx];
        Ok(pizza
            .ingredients()
            .iter()
            .filter(|key| self.is_forbidden(pizza.kind(), key))
            .cloned()
            .collect())
    }

    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------

    /// The price floor for a pizza: ingredient cost plus a 40% markup,
    /// rounded up to the next tenth of a unit. Always recomputed from the
    /// current ingredient prices, never cached.
    pub fn minimal_price(&self, pizza: &Pizza) -> Money {
        let sum: i64 = pizza
            .ingredients()
            .iter()
            .filter_map(|key| self.ingredients.get(key))
            .map(|i| i.price().cents())
            .sum();
        // ceil(sum * 1.4) to one decimal, in integer cents.
        Money::from_cents((sum * 14 + 99) / 100 * 10)
    }

    /// The effective sale price: the operator-set price, or the minimal
    /// price while no sale price has been set.
    pub fn sale_price(&self, pizza: &Pizza) -> Money {
        if pizza.raw_sale_price().is_zero() {
            self.minimal_price(pizza)
        } else {
            pizza.raw_sale_price()
        }
    }

    /// Per-unit profit for a pizza: sale price minus minimal price.
    pub fn unit_profit(&self, pizza: &Pizza) -> Money {
        self.sale_price(pizza) - self.minimal_price(pizza)
    }

    /// Sets the operator sale price, bounded below by the current minimal
    /// price.
    pub fn set_sale_price(&mut self, pizza_name: &str, price: Money) -> Result<(), CatalogError> {
        let idx = self.pizza_index(pizza_name)?;
        if !price.is_positive() {
            return Err(CatalogError::InvalidPrice { price });
        }
        let minimal = self.minimal_price(&self.pizzas[idx]);
        if price < minimal {
            return Err(CatalogError::BelowMinimalPrice { price, minimal });
        }
        self.pizzas[idx].set_sale_price(price);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Photos & evaluations
    // ------------------------------------------------------------------

    /// Attaches a photo by path. The file must exist on disk and end in
    /// `.png`, `.jpg`, or `.jpeg`; the path is stored as-is.
    pub fn attach_photo(&mut self, pizza_name: &str, path: &str) -> Result<(), CatalogError> {
        let idx = self.pizza_index(pizza_name)?;
        let supported = path.ends_with(".png") || path.ends_with(".jpg") || path.ends_with(".jpeg");
        if !supported || !Path::new(path).exists() {
            return Err(CatalogError::PhotoRejected {
                path: path.to_string(),
            });
        }
        self.pizzas[idx].set_photo(path.to_string());
        Ok(())
    }

    /// Attaches an evaluation to a pizza. Gating (purchase history, one
    /// evaluation per client) is enforced by the caller.
    pub fn record_evaluation(
        &mut self,
        pizza_name: &str,
        evaluation: Evaluation,
    ) -> Result<(), CatalogError> {
        let idx = self.pizza_index(pizza_name)?;
        self.pizzas[idx].push_evaluation(evaluation);
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
