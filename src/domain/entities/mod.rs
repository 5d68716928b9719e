//! Domain entities
//!
//! Pure domain models. Persistence mapping belongs to the adapters that
//! implement the repository ports.

pub mod movie;
pub mod rental;
pub mod user;

pub use movie::{Movie, MovieId};
pub use rental::{Rental, RentalId, RentalInput};
pub use user::{User, UserId};
