#![forbid(unsafe_code)]

use fc_core::model::Entity;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("schema: {0}")]
    Schema(&'static str),
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: i64 },
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl StoreError {
    pub fn not_found(entity: Entity, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn validation(field: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::Validation {
            field,
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
