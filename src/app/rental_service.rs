//! Rental service
//!
//! The rental-eligibility rule set: sequential checks executed before a
//! rental record is created. The first violation encountered wins, and no
//! write happens until every check has passed.

use std::sync::Arc;

use crate::config::RentalLimitations;
use crate::domain::entities::{MovieId, Rental, RentalId, RentalInput, User, UserId};
use crate::domain::ports::{MovieRepository, RentalRepository, UserRepository};
use crate::error::DomainError;

/// Service for validating and orchestrating rentals
pub struct RentalService<UR, MR, RR>
where
    UR: UserRepository,
    MR: MovieRepository,
    RR: RentalRepository,
{
    users: Arc<UR>,
    movies: Arc<MR>,
    rentals: Arc<RR>,
    limitations: RentalLimitations,
}

impl<UR, MR, RR> RentalService<UR, MR, RR>
where
    UR: UserRepository,
    MR: MovieRepository,
    RR: RentalRepository,
{
    pub fn new(
        users: Arc<UR>,
        movies: Arc<MR>,
        rentals: Arc<RR>,
        limitations: RentalLimitations,
    ) -> Self {
        Self {
            users,
            movies,
            rentals,
            limitations,
        }
    }

    /// List all rentals. No validation; straight delegation.
    pub async fn get_rentals(&self) -> Result<Vec<Rental>, DomainError> {
        self.rentals.get_rentals().await
    }

    /// Fetch a single rental by ID
    pub async fn get_rental_by_id(&self, rental_id: RentalId) -> Result<Rental, DomainError> {
        self.rentals
            .get_rental_by_id(rental_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Rental not found.".to_string()))
    }

    /// Create a rental after the full eligibility rule set passes
    ///
    /// Checks run in order: the user exists, the user holds no open rental,
    /// and every requested movie exists, is available, and respects the age
    /// restriction. Only then is the rental persisted.
    pub async fn create_rental(&self, input: &RentalInput) -> Result<Rental, DomainError> {
        let user = self.get_user_for_rental(input.user_id).await?;
        self.check_user_able_to_rental(input.user_id).await?;
        self.check_movies_valid_for_rental(&input.movies_id, &user)
            .await?;

        tracing::debug!("Creating rental for user {}", input.user_id);
        self.rentals.create_rental(input).await
    }

    /// Close an open rental
    pub async fn finish_rental(&self, rental_id: RentalId) -> Result<(), DomainError> {
        self.rentals
            .get_rental_by_id(rental_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Rental not found.".to_string()))?;

        tracing::debug!("Finishing rental {}", rental_id);
        self.rentals.finish_rental(rental_id).await
    }

    /// Resolve the renting user, failing when the ID is unknown
    pub async fn get_user_for_rental(&self, user_id: UserId) -> Result<User, DomainError> {
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found.".to_string()))
    }

    /// A user may hold at most one open rental at a time
    pub async fn check_user_able_to_rental(&self, user_id: UserId) -> Result<(), DomainError> {
        let open_rentals = self.rentals.get_rentals_by_user_id(user_id, false).await?;

        if !open_rentals.is_empty() {
            return Err(DomainError::PendentRental(
                "The user already have a rental!".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate every requested movie, in input order, stopping at the
    /// first violation
    pub async fn check_movies_valid_for_rental(
        &self,
        movies_id: &[MovieId],
        user: &User,
    ) -> Result<(), DomainError> {
        for &movie_id in movies_id {
            let movie = self
                .movies
                .get_by_id(movie_id)
                .await?
                .ok_or_else(|| DomainError::NotFound("Movie not found.".to_string()))?;

            if movie.is_rented() {
                return Err(DomainError::MovieInRental(
                    "Movie already in a rental.".to_string(),
                ));
            }

            if movie.adults_only && self.user_is_under_age(user) {
                return Err(DomainError::InsufficientAge(
                    "Cannot see that movie.".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn user_is_under_age(&self, user: &User) -> bool {
        user.age() < self.limitations.adults_required_age
    }
}
