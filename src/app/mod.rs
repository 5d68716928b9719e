//! Application layer
//!
//! Use-case orchestration: the rental service coordinates entities and
//! repository ports.

pub mod rental_service;

pub use rental_service::RentalService;
