//! Rental domain entity
//!
//! Created only after the full eligibility rule set passes; transitions
//! open -> closed via `finish_rental` and nothing else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::movie::MovieId;
use super::user::UserId;

/// Unique identifier for a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentalId(pub i32);

impl From<i32> for RentalId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RentalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rental of one or more movies by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rental {
    pub id: RentalId,
    pub date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub user_id: UserId,
    pub movies_id: Vec<MovieId>,
    pub closed: bool,
}

impl Rental {
    /// An open rental blocks the user from starting another one.
    pub fn is_open(&self) -> bool {
        !self.closed
    }
}

/// Data needed to create a new rental
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalInput {
    pub user_id: UserId,
    pub movies_id: Vec<MovieId>,
}
