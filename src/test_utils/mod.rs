//! Test utilities
//!
//! Manual in-memory implementations of the repository ports plus fixture
//! factories. Manual doubles keep tests explicit about what the data store
//! returns, without macro magic.

pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
