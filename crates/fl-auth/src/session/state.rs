use fl_core::UserProfile;

/// Two-phase session state machine.
///
/// `Unknown -> Optimistic -> {Authenticated | Unauthenticated}` during
/// bootstrap; `login`/`logout` move directly between `Authenticated` and
/// `Unauthenticated` afterwards. `Unknown` is the only phase in which the
/// session is undefined - consumers must not act on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Bootstrap has not resolved the stored credentials yet
    Unknown,
    /// Stored credentials loaded; server revalidation still in flight.
    /// Renders as a normal session so a round-trip does not flash an
    /// unauthenticated UI.
    Optimistic { user: UserProfile, token: String },
    /// Server confirmed the session
    Authenticated { user: UserProfile, token: String },
    /// No session
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Optimistic { user, .. } | Self::Authenticated { user, .. } => Some(user),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Optimistic { token, .. } | Self::Authenticated { token, .. } => Some(token),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }
}

/// Read-only view of the session handed to consumers.
///
/// Invariant: once `loading` is false, `user` and `token` are either both
/// present or both absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(state: &SessionState) -> Self {
        Self {
            user: state.user().cloned(),
            token: state.token().map(String::from),
            loading: state.is_loading(),
        }
    }
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
