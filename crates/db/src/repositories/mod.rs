//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Reads accept `&PgPool`; writes that belong to an aggregate save accept an
//! open transaction so the whole aggregate commits atomically.

pub mod category_repo;
pub mod ingredient_repo;
pub mod note_repo;
pub mod recipe_repo;
pub mod unit_of_measure_repo;

pub use category_repo::CategoryRepo;
pub use ingredient_repo::IngredientRepo;
pub use note_repo::NoteRepo;
pub use recipe_repo::RecipeRepo;
pub use unit_of_measure_repo::UnitOfMeasureRepo;

/// Transaction handle shared by the aggregate write helpers.
pub type PgTransaction<'c> = sqlx::Transaction<'c, sqlx::Postgres>;
