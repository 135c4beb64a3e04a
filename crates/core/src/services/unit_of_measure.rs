use std::sync::Arc;

use tracing::Span;

use crate::commands::UnitOfMeasureCommand;
use crate::error::CoreError;
use crate::store::UnitOfMeasureStore;

#[derive(Clone)]
pub struct UnitOfMeasureService {
    units: Arc<dyn UnitOfMeasureStore>,
    span: Span,
}

impl UnitOfMeasureService {
    pub fn new(units: Arc<dyn UnitOfMeasureStore>, span: Span) -> Self {
        Self { units, span }
    }

    /// Every unit of measure, for selection lists.
    pub async fn list_all(&self) -> Result<Vec<UnitOfMeasureCommand>, CoreError> {
        let units = self.units.find_all().await.map_err(CoreError::store)?;
        tracing::trace!(parent: &self.span, count = units.len(), "Loaded units of measure");
        Ok(units.iter().map(UnitOfMeasureCommand::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn lists_units_in_id_order() {
        let service = UnitOfMeasureService::new(
            Arc::new(MemoryStore::with_reference_data(&["Cup", "Pinch"], &[])),
            Span::none(),
        );

        let units = service.list_all().await.unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].id, Some(1));
        assert_eq!(units[1].measurement.as_deref(), Some("Pinch"));
    }
}
