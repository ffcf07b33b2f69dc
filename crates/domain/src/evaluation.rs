//! Client evaluations of pizzas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest rating a client can give.
pub const MAX_RATING: u8 = 5;

/// A client's rating of a pizza, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    client_email: String,
    rating: u8,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl Evaluation {
    /// Creates an evaluation. Returns `None` if the rating is above
    /// [`MAX_RATING`].
    pub fn new(
        client_email: impl Into<String>,
        rating: u8,
        comment: Option<String>,
    ) -> Option<Self> {
        if rating > MAX_RATING {
            return None;
        }
        Some(Self {
            client_email: client_email.into(),
            rating,
            comment,
            created_at: Utc::now(),
        })
    }

    /// Email of the client who rated.
    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// The rating, in `0..=5`.
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Optional free-text comment.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// When the evaluation was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
