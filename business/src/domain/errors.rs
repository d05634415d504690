use crate::domain::identity::errors::IdentityError;

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.conflict")]
    Conflict,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Failure raised by a collaborator the cart depends on.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
