use serde::{Deserialize, Serialize};

/// Represents a user identifier (Firebase UID).
/// Used as the owning key for cart lines and checkout sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Bearer credential issued by the identity provider.
///
/// The raw token never shows up in `Debug` output so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("firebase-uid-123");
        assert_eq!(format!("{}", user_id), "firebase-uid-123");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("same-user"), UserId::from("same-user"));
        assert_ne!(UserId::new("same-user"), UserId::new("different-user"));
    }

    #[test]
    fn should_redact_token_in_debug_output() {
        let credential = Credential::new("secret-token");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
    }
}
