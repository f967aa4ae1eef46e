use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the opaque session token
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Storage key holding the serialized user record
pub const SESSION_USER_KEY: &str = "session_user";

/// Identity cached alongside the session token.
///
/// `display_name` only exists for accounts created through registration;
/// it is skipped during serialization when unset so a plain sign-in
/// persists nothing but the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: None,
        }
    }
}

/// Session presence. `Loading` holds only until the initial restore
/// settles and is never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    SignedIn,
    SignedOut,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionStatus::Loading => "loading",
            SessionStatus::SignedIn => "signed-in",
            SessionStatus::SignedOut => "signed-out",
        };
        f.write_str(name)
    }
}

/// Snapshot of the session.
///
/// The fields are private and only the constructors below produce values,
/// so a token or user without `SignedIn` status (or the reverse) cannot
/// be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    status: SessionStatus,
    user: Option<UserRecord>,
    token: Option<String>,
}

impl SessionState {
    pub(crate) fn loading() -> Self {
        Self {
            status: SessionStatus::Loading,
            user: None,
            token: None,
        }
    }

    pub(crate) fn signed_out() -> Self {
        Self {
            status: SessionStatus::SignedOut,
            user: None,
            token: None,
        }
    }

    pub(crate) fn signed_in(token: String, user: UserRecord) -> Self {
        Self {
            status: SessionStatus::SignedIn,
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.status == SessionStatus::SignedIn
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("A session requires a non-empty token")]
    EmptyToken,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to encode user record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Session watcher - a receiver that yields a new snapshot on every
/// transition. Dropping it is unsubscription.
pub type SessionWatcher = watch::Receiver<SessionState>;

/// Holds the session and persists it through a [`KeyValueStore`].
///
/// One instance is constructed at startup and handed to whoever needs it;
/// observers call [`SessionManager::subscribe`] and read snapshots from
/// the returned watcher.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    state: watch::Sender<SessionState>,
}

impl SessionManager {
    /// Create a container in the `Loading` state over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let (state, _) = watch::channel(SessionState::loading());
        Self { store, state }
    }

    /// Settle the initial `Loading` state from storage.
    ///
    /// Anything short of a token plus a readable user record means signed
    /// out: read failures are logged and swallowed, and a token without a
    /// user record is ignored. Read paths never delete keys. Once the
    /// session has settled, calling this again is a no-op.
    pub async fn restore(&self) -> SessionStatus {
        let current = self.status();
        if current != SessionStatus::Loading {
            return current;
        }

        let next = match self.load_persisted().await {
            Ok(Some((token, user))) => {
                debug!(email = %user.email, "Restored session from storage");
                SessionState::signed_in(token, user)
            }
            Ok(None) => SessionState::signed_out(),
            Err(e) => {
                warn!(error = %e, "Failed to restore session, treating as signed out");
                SessionState::signed_out()
            }
        };

        let status = next.status();
        self.state.send_replace(next);
        status
    }

    async fn load_persisted(&self) -> Result<Option<(String, UserRecord)>, SessionError> {
        let token = match self.store.get(SESSION_TOKEN_KEY).await? {
            Some(token) if !token.is_empty() => token,
            _ => return Ok(None),
        };

        let raw_user = match self.store.get(SESSION_USER_KEY).await? {
            Some(raw) => raw,
            None => {
                warn!("Found a session token but no user record, treating as signed out");
                return Ok(None);
            }
        };

        let user: UserRecord = serde_json::from_str(&raw_user)?;
        Ok(Some((token, user)))
    }

    /// Establish a session from an existing account sign-in.
    pub async fn sign_in(&self, token: &str, user: UserRecord) -> Result<(), SessionError> {
        self.establish(token, user).await
    }

    /// Establish a session for a freshly registered account.
    ///
    /// Today this is the same operation as [`SessionManager::sign_in`]; it
    /// stays a separate entry point so registration can diverge (welcome
    /// flows, provisional accounts) without touching sign-in callers.
    pub async fn sign_up(&self, token: &str, user: UserRecord) -> Result<(), SessionError> {
        self.establish(token, user).await
    }

    /// Persist and publish a signed-in session.
    ///
    /// On any failure the error propagates and the in-memory state is left
    /// as it was.
    async fn establish(&self, token: &str, user: UserRecord) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        let encoded = serde_json::to_string(&user)?;

        // The token key is written last: restore only treats a session as
        // present once the token has landed, so a failure in between
        // leaves nothing that restores as signed in.
        self.store.set(SESSION_USER_KEY, &encoded).await?;
        if let Err(e) = self.store.set(SESSION_TOKEN_KEY, token).await {
            // Roll the user record back so the two keys stay paired.
            if let Err(cleanup) = self.store.remove(SESSION_USER_KEY).await {
                warn!(error = %cleanup, "Failed to roll back user record after token write failure");
            }
            return Err(e.into());
        }

        info!(email = %user.email, "Session established");
        self.state
            .send_replace(SessionState::signed_in(token.to_string(), user));
        Ok(())
    }

    /// Remove the persisted session and publish `SignedOut`.
    ///
    /// Removing absent keys succeeds, so signing out twice is harmless. A
    /// removal failure propagates with the in-memory state unchanged.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.store.remove(SESSION_TOKEN_KEY).await?;
        self.store.remove(SESSION_USER_KEY).await?;

        self.state.send_replace(SessionState::signed_out());
        info!("Signed out");
        Ok(())
    }

    /// Watch the session; the receiver yields on every transition.
    pub fn subscribe(&self) -> SessionWatcher {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.borrow().status()
    }

    pub fn user(&self) -> Option<UserRecord> {
        self.state.borrow().user().cloned()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().is_signed_in()
    }
}

// ============================================================================
// Tests
// ============================================================================
