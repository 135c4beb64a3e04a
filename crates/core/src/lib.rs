//! Pantry domain layer.
//!
//! Entities, command objects and the conversions between them, the
//! difficulty lookup, the store traits with an in-memory implementation, and
//! the services that orchestrate find/convert/save over a store. No crate in
//! here knows about HTTP or SQL.

pub mod commands;
pub mod converters;
pub mod difficulty;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;
pub mod types;
