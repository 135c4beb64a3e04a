pub mod images;
pub mod ingredients;
pub mod lookups;
pub mod recipes;

use pantry_core::types::DbId;

/// `Location` target for a saved recipe.
pub(crate) fn recipe_location(recipe_id: DbId) -> String {
    format!("/api/v1/recipes/{recipe_id}")
}

/// `Location` target for a saved ingredient.
pub(crate) fn ingredient_location(recipe_id: DbId, ingredient_id: DbId) -> String {
    format!("/api/v1/recipes/{recipe_id}/ingredients/{ingredient_id}")
}
