use crate::types::DbId;

/// Opaque failure raised by a store backend.
///
/// Backends box their native error (e.g. `sqlx::Error`) so callers that know
/// the backend can downcast it for classification.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid {kind} code: '{code}'")]
    InvalidCode { kind: &'static str, code: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Store error: {0}")]
    Store(#[source] StoreError),
}

impl CoreError {
    /// Wrap a backend error raised by a store call.
    pub fn store(err: StoreError) -> Self {
        CoreError::Store(err)
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
