use std::sync::{Arc, RwLock};

/// Shared slot holding the current bearer token.
///
/// Cloning shares the underlying slot. The session layer is the only
/// writer; the request client reads the slot on every outbound call and
/// attaches the token when present.
#[derive(Debug, Clone, Default)]
pub struct BearerToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl BearerToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if any.
    pub fn get(&self) -> Option<String> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_present(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Replace the token. Called by the session layer on login and
    /// successful bootstrap.
    pub fn set<S: Into<String>>(&self, token: S) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    /// Drop the token. Called by the session layer on logout and failed
    /// revalidation.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
