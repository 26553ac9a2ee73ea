//! Application services: role checks, form validation, and the translation
//! from filter state to repository queries. Routes stay thin; everything
//! testable lives here, generic over the repository traits.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod candidates;
pub mod companies;
pub mod filters;
pub mod jobs;
pub mod taxonomy;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    /// User-correctable problem; the message is shown as a notification.
    #[error("{0}")]
    Form(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

/// Wraps one fetched page in the template pagination model.
pub(crate) fn paginate<T>(items: Vec<T>, total: usize, current_page: usize) -> Paginated<T> {
    Paginated::new(
        items,
        current_page,
        total,
        total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
    )
}
