//! Data layer for the Fake Data API
//!
//! This crate provides the read-only data layer behind the GraphQL API:
//! - A deterministic generator for the user → album → photo graph
//! - Argon2 password hashing for generated credentials
//! - The `DataSource` trait consumed by the API layer
//! - An in-memory, ID-ordered implementation of that trait
//!
//! # Example
//!
//! ```rust
//! use fakedata_store::{DataSource, GeneratorConfig, InMemoryStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::generate(&GeneratorConfig::new(2, 2, 2))?;
//!
//! let albums = store.get_albums_by_user_id(1);
//! assert_eq!(albums.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 3]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// Re-export core domain types for convenience
pub use fakedata_core;

// Public modules
pub mod credentials;
pub mod error;
pub mod generator;
pub mod memory;
pub mod repository;

// Re-exports for convenience
pub use credentials::{hash_password, verify_password, HashingConfig};
pub use error::{StoreError, StoreResult};
pub use generator::{generate, user_email, user_password, Dataset, GeneratorConfig};
pub use memory::InMemoryStore;
pub use repository::{DataSource, StoreCounts};
