//! Domain logic for the film catalog.
//!
//! This crate holds everything that does not touch the database: entity
//! invariants and field validation, search-criteria parsing, version-token
//! handling for optimistic concurrency, and the domain error taxonomy.
//! Callers pass in plain data; the storage layer lives in `kino-db`.

pub mod error;
pub mod film;
pub mod suchkriterien;
pub mod types;
pub mod version;
