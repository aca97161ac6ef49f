//! Session context and the one-shot bootstrap.

pub mod error;
pub mod state;

use crate::session::error::Result as SessionResult;
use crate::session::state::{SessionSnapshot, SessionState};
use crate::store::record::CredentialRecord;
use crate::store::{CredentialStore, error::Result as StoreResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use fl_api::{ApiClient, BearerToken};
use fl_core::{AuthSession, Credentials, Registration, UserProfile};
use log::{debug, warn};
use tokio::sync::RwLock;

/// Owns the in-memory session and mirrors it into the credential store.
///
/// `bootstrap`, `login`, and `logout` are the only mutators; everything
/// else gets read-only snapshots. Constructed once at process start and
/// passed down - there is no ambient singleton.
pub struct SessionManager {
    state: Arc<RwLock<SessionState>>,
    store: CredentialStore,
    api: ApiClient,
    token: BearerToken,
    bootstrapped: AtomicBool,
}

impl SessionManager {
    /// Create a manager in the `Unknown` phase.
    ///
    /// The manager takes over the client's bearer token slot: session
    /// transitions are the only writers to it from here on.
    pub fn new(store: CredentialStore, api: ApiClient) -> Self {
        let token = api.bearer_token();
        Self {
            state: Arc::new(RwLock::new(SessionState::Unknown)),
            store,
            api,
            token,
            bootstrapped: AtomicBool::new(false),
        }
    }

    /// The wrapped API client, for callers that need non-auth endpoints.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Reconcile stored credentials with the server. Runs once per process
    /// lifetime; later calls are logged no-ops.
    ///
    /// 1. Read the store. Absent record: straight to `Unauthenticated`,
    ///    no network call.
    /// 2. Present record: `Optimistic` with the stored pair, then
    ///    revalidate via `GET /auth/me`.
    /// 3. Success: `Authenticated` with the fresh profile, store
    ///    re-persisted. Any failure: both layers cleared, `Unauthenticated`.
    ///
    /// Never surfaces an error - a failed revalidation is just "not
    /// logged in."
    pub async fn bootstrap(&self) {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            warn!("Session bootstrap requested more than once; ignoring");
            return;
        }

        let record = match self.store.read() {
            Ok(record) => record,
            Err(e) => {
                warn!("Credential store unreadable, starting unauthenticated: {e}");
                None
            }
        };

        let Some(record) = record else {
            *self.state.write().await = SessionState::Unauthenticated;
            return;
        };

        // Optimistic phase: the stored pair becomes visible in the same
        // write that ends the loading phase, so readers never observe a
        // half-set session.
        {
            let mut state = self.state.write().await;
            self.token.set(record.token.clone());
            *state = SessionState::Optimistic {
                user: record.user.clone(),
                token: record.token.clone(),
            };
        }

        match self.api.me().await {
            Ok(user) => {
                let mut state = self.state.write().await;
                let merged = CredentialRecord {
                    token: record.token.clone(),
                    user: user.clone(),
                };
                if let Err(e) = self.store.write(&merged) {
                    warn!("Failed to re-persist revalidated credentials: {e}");
                }
                *state = SessionState::Authenticated {
                    user,
                    token: record.token,
                };
                debug!("Session revalidated");
            }
            Err(e) => {
                debug!("Revalidation failed, clearing session: {e}");
                let mut state = self.state.write().await;
                self.token.clear();
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear credential store: {e}");
                }
                *state = SessionState::Unauthenticated;
            }
        }
    }

    /// Commit a session payload: persist the record and publish the
    /// in-memory state in one transition.
    ///
    /// The store write happens under the state write lock, so readers
    /// never observe a session that is not yet durable. If the write
    /// fails the in-memory session is left unchanged.
    pub async fn login(&self, session: AuthSession) -> StoreResult<()> {
        let mut state = self.state.write().await;

        let record = CredentialRecord {
            token: session.token.clone(),
            user: session.user.clone(),
        };
        self.store.write(&record)?;

        self.token.set(session.token.clone());
        *state = SessionState::Authenticated {
            user: session.user,
            token: session.token,
        };
        Ok(())
    }

    /// Clear both the in-memory session and the store. Idempotent.
    ///
    /// The in-memory session is cleared even when removing the store
    /// entries fails - logout must never leave the process authenticated.
    pub async fn logout(&self) -> StoreResult<()> {
        let mut state = self.state.write().await;
        self.token.clear();
        *state = SessionState::Unauthenticated;
        self.store.clear()
    }

    /// Run the login operation and commit the resulting session.
    pub async fn sign_in(&self, credentials: &Credentials) -> SessionResult<UserProfile> {
        let session = self.api.login(credentials).await?;
        let user = session.user.clone();
        self.login(session).await?;
        Ok(user)
    }

    /// Run the registration operation and commit the resulting session.
    pub async fn sign_up(&self, registration: &Registration) -> SessionResult<UserProfile> {
        let session = self.api.register(registration).await?;
        let user = session.user.clone();
        self.login(session).await?;
        Ok(user)
    }

    // =========================================================================
    // Read-only accessors
    // =========================================================================

    pub async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(&*self.state.read().await)
    }

    pub async fn current_user(&self) -> Option<UserProfile> {
        self.state.read().await.user().cloned()
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token().map(String::from)
    }

    /// True until bootstrap has resolved the stored credentials.
    /// Consumers must treat a loading session as undefined.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }
}
