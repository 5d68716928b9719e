//! Rental limitations
//!
//! The store's static rule table. Built once at process start and handed to
//! the service; never mutated afterwards.

/// Limits applied to rentals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalLimitations {
    /// Minimum number of movies per rental
    pub min_movies: u32,
    /// Maximum number of movies per rental
    pub max_movies: u32,
    /// Minimum age required to rent an adults-only movie
    pub adults_required_age: i32,
    /// Rental duration in days, used by the store when computing `end_date`
    pub rental_days_limit: i64,
}

impl Default for RentalLimitations {
    fn default() -> Self {
        Self {
            min_movies: 1,
            max_movies: 4,
            adults_required_age: 18,
            rental_days_limit: 3,
        }
    }
}
