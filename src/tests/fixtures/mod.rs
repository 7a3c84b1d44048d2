//! Library fixtures

/// GraphQL schema from Star Wars, with every definition declared out of
/// order.
pub mod starwars;
