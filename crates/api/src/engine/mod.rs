//! Slot Assignment Engine.
//!
//! Validates and persists create-or-update requests for timetable slots.
//! All validation happens before any write; the write itself runs inside a
//! single transaction so a rejected request never leaves partial state.

pub mod assignment;
