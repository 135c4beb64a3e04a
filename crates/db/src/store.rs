//! PostgreSQL implementation of the core store traits.

use async_trait::async_trait;
use pantry_core::domain::{Category, Recipe, UnitOfMeasure};
use pantry_core::store::{CategoryStore, RecipeStore, StoreResult, UnitOfMeasureStore};
use pantry_core::types::DbId;

use crate::models::recipe::RecipeRow;
use crate::repositories::{CategoryRepo, IngredientRepo, NoteRepo, RecipeRepo, UnitOfMeasureRepo};
use crate::DbPool;

/// Store backed by a PostgreSQL pool.
///
/// A recipe save writes the root row and all of its children in a single
/// transaction, then reloads the aggregate so generated ids are returned.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Load the children of a recipe row and assemble the aggregate.
    async fn assemble(&self, row: RecipeRow) -> StoreResult<Recipe> {
        let ingredients = IngredientRepo::list_for_recipe(&self.pool, row.id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        let categories = CategoryRepo::list_for_recipe(&self.pool, row.id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        let note = NoteRepo::find_for_recipe(&self.pool, row.id)
            .await?
            .map(Into::into);
        Ok(row.into_recipe(ingredients, categories, note)?)
    }
}

#[async_trait]
impl RecipeStore for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<Recipe>> {
        let rows = RecipeRepo::list(&self.pool).await?;
        let mut recipes = Vec::with_capacity(rows.len());
        for row in rows {
            recipes.push(self.assemble(row).await?);
        }
        Ok(recipes)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Recipe>> {
        match RecipeRepo::find_by_id(&self.pool, id).await? {
            Some(row) => Ok(Some(self.assemble(row).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, recipe: Recipe) -> StoreResult<Recipe> {
        let mut tx = self.pool.begin().await?;

        let recipe_id = match recipe.id {
            Some(id) => {
                if !RecipeRepo::update(&mut tx, id, &recipe).await? {
                    return Err(sqlx::Error::RowNotFound.into());
                }
                id
            }
            None => RecipeRepo::insert(&mut tx, &recipe).await?,
        };

        NoteRepo::replace_for_recipe(&mut tx, recipe_id, recipe.note.as_ref()).await?;

        let category_ids: Vec<DbId> = recipe.categories.iter().map(|c| c.id).collect();
        CategoryRepo::set_for_recipe(&mut tx, recipe_id, &category_ids).await?;

        IngredientRepo::sync_for_recipe(&mut tx, recipe_id, &recipe.ingredients).await?;

        tx.commit().await?;
        tracing::debug!(recipe_id, "Saved recipe aggregate");

        let row = RecipeRepo::find_by_id(&self.pool, recipe_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        self.assemble(row).await
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(RecipeRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[async_trait]
impl UnitOfMeasureStore for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<UnitOfMeasure>> {
        let rows = UnitOfMeasureRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<UnitOfMeasure>> {
        let row = UnitOfMeasureRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl CategoryStore for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<Category>> {
        let rows = CategoryRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Category>> {
        let row = CategoryRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(Into::into))
    }
}
