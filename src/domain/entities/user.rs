//! User domain entity
//!
//! A registered customer of the store. Read-only to the rental core.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i32);

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer who can rent movies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
}

impl User {
    /// Age in whole calendar years: current year minus birth year.
    /// Deliberately ignores whether the birthday has passed this year.
    pub fn age(&self) -> i32 {
        Utc::now().year() - self.birth_date.year()
    }
}
