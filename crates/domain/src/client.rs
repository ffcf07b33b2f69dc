//! Registered clients and their personal information.

use common::OrderId;
use serde::{Deserialize, Serialize};

/// Personal information attached to a client account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub last_name: String,
    pub first_name: String,
    pub address: String,
    pub age: u32,
}

impl PersonalInfo {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        address: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            address: address.into(),
            age,
        }
    }

    /// Returns true if every field is filled in and the age is positive.
    pub fn is_complete(&self) -> bool {
        !self.last_name.trim().is_empty()
            && !self.first_name.trim().is_empty()
            && !self.address.trim().is_empty()
            && self.age > 0
    }
}

impl std::fmt::Display for PersonalInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A registered client.
///
/// The email is the unique, case-insensitive identity. Passwords are
/// compared in plain form; hardening is out of scope. The client tracks
/// the ids of the orders it owns, in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    email: String,
    password: String,
    info: PersonalInfo,
    orders: Vec<OrderId>,
}

impl Client {
    pub(crate) fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        info: PersonalInfo,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            info,
            orders: Vec::new(),
        }
    }

    /// The client's email, as entered at registration.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The client's personal information.
    pub fn info(&self) -> &PersonalInfo {
        &self.info
    }

    /// Checks the password in plain form.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Ids of the orders this client owns.
    pub fn orders(&self) -> &[OrderId] {
        &self.orders
    }

    /// Returns true if the client owns the given order.
    pub fn owns_order(&self, id: OrderId) -> bool {
        self.orders.contains(&id)
    }

    pub(crate) fn attach_order(&mut self, id: OrderId) {
        self.orders.push(id);
    }

    pub(crate) fn detach_order(&mut self, id: OrderId) {
        self.orders.retain(|o| *o != id);
    }
}
