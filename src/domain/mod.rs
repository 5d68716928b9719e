//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for the rental store
//! - `ports`: Trait definitions for the data store

pub mod entities;
pub mod ports;
