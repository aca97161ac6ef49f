use fl_core::UserProfile;

/// Persisted credential pair: the opaque session token and the last-known
/// profile behind it.
///
/// On disk this is two entries, not one document: `token` (raw string) and
/// `user.json` (serialized profile). The pairing only exists in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub token: String,
    pub user: UserProfile,
}
