//! Core library for trailhead - session state, storage backends, and
//! navigation.
//!
//! The pieces fit together like this: screens call [`SessionManager`]
//! operations, the manager persists through a [`KeyValueStore`] and
//! publishes every transition to its watchers, and the
//! [`NavigationGuard`] observes those transitions to keep a [`Router`]
//! inside the screens the session status allows.
//!
//! Authentication is a seam: [`MockAuthenticator`] issues a fixed
//! development token after an artificial delay, and a real backend plugs
//! in by implementing [`Authenticator`].

pub mod auth;
pub mod nav;
pub mod storage;

pub use auth::{
    AuthError, AuthSession, Authenticator, MockAuthenticator, Registration, SessionError,
    SessionManager, SessionState, SessionStatus, SessionWatcher, UserRecord,
};
pub use nav::{redirect_for, NavigationGuard, Route, RouteGroup, Router};
pub use storage::{FileStore, KeyValueStore, KeyringStore, MemoryStore, StorageError};
