//! Movie domain entity

use serde::{Deserialize, Serialize};

use super::rental::RentalId;

/// Unique identifier for a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(pub i32);

impl From<i32> for MovieId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie in the store catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    /// Restricted to users of adult age
    pub adults_only: bool,
    /// Set while the movie belongs to an active rental
    pub rental_id: Option<RentalId>,
}

impl Movie {
    /// A rented movie cannot enter a new rental.
    pub fn is_rented(&self) -> bool {
        self.rental_id.is_some()
    }
}
