use serde::{Deserialize, Serialize};

/// Stored credential for a chat user, unique by login.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Chat login.
    pub login: String,
    /// GitLab API private token.
    pub key: String,
}
