//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the write operations that exist on that entity

pub mod assignment;
pub mod cohort;
pub mod instructor;
pub mod slot;
pub mod subject;
pub mod user;
pub mod week;
