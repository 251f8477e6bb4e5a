//! Core domain models for the Fake Data API
//!
//! This crate contains the entities served by the API (users, albums and
//! photos), the authentication result returned by `login`, and the small
//! helpers shared by the store and the GraphQL layer.

pub mod limit;
pub mod model;
pub mod types;

// Re-exports for convenience
pub use limit::take_limit;
pub use model::{Album, Authentication, Photo, User};
pub use types::EntityId;
