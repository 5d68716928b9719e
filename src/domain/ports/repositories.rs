//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by the surrounding application; the crate
//! ships in-memory versions for tests only.

use async_trait::async_trait;

use crate::domain::entities::{Movie, MovieId, Rental, RentalId, RentalInput, User, UserId};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
}

/// Repository for Movie entities
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find a movie by ID
    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, DomainError>;
}

/// Repository for Rental entities
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// List all rentals
    async fn get_rentals(&self) -> Result<Vec<Rental>, DomainError>;

    /// Find a rental by ID
    async fn get_rental_by_id(&self, id: RentalId) -> Result<Option<Rental>, DomainError>;

    /// Find a user's rentals, filtered by the `closed` flag
    async fn get_rentals_by_user_id(
        &self,
        user_id: UserId,
        closed: bool,
    ) -> Result<Vec<Rental>, DomainError>;

    /// Persist a new rental for the given user and movies
    async fn create_rental(&self, input: &RentalInput) -> Result<Rental, DomainError>;

    /// Mark a rental as closed
    async fn finish_rental(&self, id: RentalId) -> Result<(), DomainError>;
}
