use async_trait::async_trait;

use crate::domain::shared::value_objects::{Credential, UserId};

use super::errors::IdentityError;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the user behind `credential`.
    ///
    /// `Ok(None)` means the credential does not identify anyone (expired,
    /// forged, malformed). `Err` means the provider itself could not be used.
    async fn resolve(&self, credential: &Credential) -> Result<Option<UserId>, IdentityError>;
}
