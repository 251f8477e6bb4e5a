//! Core type definitions

/// Identifier shared by every entity type.
///
/// GraphQL `Int` is a signed 32-bit integer, so identifiers use the same
/// width to round-trip through the API without conversion.
pub type EntityId = i32;
