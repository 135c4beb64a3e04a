use std::sync::Arc;

use tracing::Span;

use crate::commands::CategoryCommand;
use crate::error::CoreError;
use crate::store::CategoryStore;

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryStore>,
    span: Span,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryStore>, span: Span) -> Self {
        Self { categories, span }
    }

    pub async fn list_all(&self) -> Result<Vec<CategoryCommand>, CoreError> {
        let categories = self.categories.find_all().await.map_err(CoreError::store)?;
        tracing::trace!(parent: &self.span, count = categories.len(), "Loaded categories");
        Ok(categories.iter().map(CategoryCommand::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, DEFAULT_CATEGORIES};

    #[tokio::test]
    async fn lists_seeded_categories() {
        let service = CategoryService::new(Arc::new(MemoryStore::seeded()), Span::none());

        let categories = service.list_all().await.unwrap();

        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        assert_eq!(categories[0].description, "American");
    }
}
