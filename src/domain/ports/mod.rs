//! Domain ports (traits)
//!
//! Port traits define what the rental core requires from the data store.
//! Adapters provide concrete implementations.

pub mod repositories;

pub use repositories::{MovieRepository, RentalRepository, UserRepository};
