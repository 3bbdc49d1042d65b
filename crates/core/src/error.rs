use crate::types::{DbId, Entity, Parent};
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: Entity, id: DbId },

    /// The row is still referenced by enrollments and cannot be removed.
    #[error("{entity} with id {id} is still referenced")]
    Referenced { entity: Parent, id: DbId },

    /// An enrollment pointed at a student or course that does not exist.
    #[error("Invalid student or course reference")]
    InvalidReference,
}
