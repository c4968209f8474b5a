//! Repository errors - Esiti attesi delle operazioni sul repository

use crate::entities::ValidationError;

/// Every failure of a repository operation falls in exactly one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a woodpellet with id {0} already exists")]
    DuplicateId(i32),

    #[error("woodpellet with id {0} not found")]
    NotFound(i32),
}
