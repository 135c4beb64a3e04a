//! Database row structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row, plus the conversion into the corresponding domain entity.

pub mod category;
pub mod ingredient;
pub mod note;
pub mod recipe;
pub mod unit_of_measure;
