//! Movie rental validation core
//!
//! Business rules for renting movies: age restriction, single-pending-rental
//! limit, and movie availability. Uses hexagonal (ports & adapters)
//! architecture: the service orchestrates repository ports, and the
//! surrounding application supplies the adapters and HTTP layer.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::RentalService;
pub use config::RentalLimitations;
pub use domain::entities::{Movie, MovieId, Rental, RentalId, RentalInput, User, UserId};
pub use domain::ports::{MovieRepository, RentalRepository, UserRepository};
pub use error::{DomainError, ErrorResponse};
