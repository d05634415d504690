#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity.unavailable")]
    Unavailable,
}
