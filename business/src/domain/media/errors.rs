use crate::domain::identity::errors::IdentityError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Network failure, throttling or a server-side error; worth retrying.
    #[error("storage.transient")]
    Transient,
    #[error("storage.rejected")]
    Rejected,
}

impl StorageError {
    pub fn is_transient(&self) -> bool {
        matches!(self, StorageError::Transient)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("media.unauthenticated")]
    Unauthenticated,
    #[error("media.unsupported_type")]
    UnsupportedType,
    #[error("media.too_large")]
    TooLarge,
    #[error("media.empty_file")]
    EmptyFile,
    #[error("media.invalid_url")]
    InvalidUrl,
    #[error("media.forbidden")]
    Forbidden,
    #[error("media.upload_failed")]
    Upstream(#[from] StorageError),
    #[error("media.upload_failed")]
    Identity(#[from] IdentityError),
}
