//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching the database rows
//! - `Deserialize` create DTOs for inserts
//! - A `Deserialize` update DTO for the scalar-only patch path

pub mod film;
