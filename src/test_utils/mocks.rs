//! In-memory repository implementations
//!
//! Configurable in-memory ports for unit testing. The movie and rental
//! repositories also count calls so tests can assert delegation and
//! short-circuiting.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::entities::{Movie, MovieId, Rental, RentalId, RentalInput, User, UserId};
use crate::domain::ports::{MovieRepository, RentalRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.get(&id).cloned())
    }
}

// ============================================================================
// In-Memory Movie Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: Arc<RwLock<HashMap<MovieId, Movie>>>,
    fetch_count: AtomicUsize,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a movie for testing
    pub fn with_movie(self, movie: Movie) -> Self {
        self.movies.write().unwrap().insert(movie.id, movie);
        self
    }

    /// Number of `get_by_id` calls served so far
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>, DomainError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let movies = self.movies.read().unwrap();
        Ok(movies.get(&id).cloned())
    }
}

// ============================================================================
// In-Memory Rental Repository
// ============================================================================

pub struct InMemoryRentalRepository {
    rentals: Arc<RwLock<HashMap<RentalId, Rental>>>,
    next_id: AtomicI32,
    finish_calls: AtomicUsize,
}

impl Default for InMemoryRentalRepository {
    fn default() -> Self {
        Self {
            rentals: Arc::default(),
            next_id: AtomicI32::new(1),
            finish_calls: AtomicUsize::new(0),
        }
    }
}

impl InMemoryRentalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a rental for testing
    pub fn with_rental(self, rental: Rental) -> Self {
        self.next_id.fetch_max(rental.id.0 + 1, Ordering::SeqCst);
        self.rentals.write().unwrap().insert(rental.id, rental);
        self
    }

    /// Number of `finish_rental` calls served so far
    pub fn finish_calls(&self) -> usize {
        self.finish_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RentalRepository for InMemoryRentalRepository {
    async fn get_rentals(&self) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals.values().cloned().collect())
    }

    async fn get_rental_by_id(&self, id: RentalId) -> Result<Option<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals.get(&id).cloned())
    }

    async fn get_rentals_by_user_id(
        &self,
        user_id: UserId,
        closed: bool,
    ) -> Result<Vec<Rental>, DomainError> {
        let rentals = self.rentals.read().unwrap();
        Ok(rentals
            .values()
            .filter(|r| r.user_id == user_id && r.closed == closed)
            .cloned()
            .collect())
    }

    async fn create_rental(&self, input: &RentalInput) -> Result<Rental, DomainError> {
        let id = RentalId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let now = Utc::now();

        let rental = Rental {
            id,
            date: now,
            end_date: now + Duration::days(3),
            user_id: input.user_id,
            movies_id: input.movies_id.clone(),
            closed: false,
        };

        self.rentals.write().unwrap().insert(id, rental.clone());
        Ok(rental)
    }

    async fn finish_rental(&self, id: RentalId) -> Result<(), DomainError> {
        self.finish_calls.fetch_add(1, Ordering::SeqCst);

        let mut rentals = self.rentals.write().unwrap();
        match rentals.get_mut(&id) {
            Some(rental) => {
                rental.closed = true;
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Rental {} not found", id))),
        }
    }
}
