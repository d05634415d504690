use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::shared::value_objects::{Credential, UserId};

/// Resolves the caller. A missing credential is treated like an unknown one.
pub(crate) async fn resolve_caller(
    provider: &dyn IdentityProvider,
    credential: Option<&Credential>,
) -> Result<Option<UserId>, IdentityError> {
    match credential {
        Some(credential) => provider.resolve(credential).await,
        None => Ok(None),
    }
}
