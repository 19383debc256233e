//! Domain logic for the timetable scheduling and approval service.
//!
//! This crate has zero internal dependencies so the same rules can be used
//! by the API/repository layer and any future CLI tooling. Everything here
//! is pure: the database-facing side lives in `quadro-db`, the HTTP surface
//! in `quadro-api`.

pub mod approval;
pub mod error;
pub mod grid;
pub mod quota;
pub mod roles;
pub mod slots;
pub mod types;
