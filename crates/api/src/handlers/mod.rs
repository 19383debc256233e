//! HTTP handlers, grouped by resource.

pub mod approval;
pub mod auth;
pub mod quota;
pub mod registry;
pub mod timetable;
