use crate::UserProfile;

use serde::{Deserialize, Serialize};

/// Payload returned by `POST /auth/login` and `POST /auth/register`:
/// the resolved profile plus an opaque bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: UserProfile,
    pub token: String,
}
