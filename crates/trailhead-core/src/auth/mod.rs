//! Authentication module for session state and the backend seam.
//!
//! This module provides:
//! - `SessionManager`: storage-backed session presence with watch-based
//!   observation
//! - `Authenticator`: the backend seam, shipped with a mock that issues a
//!   development token after an artificial delay
//!
//! Sessions persist an opaque token and a user record across restarts.

pub mod authenticator;
pub mod session;

pub use authenticator::{AuthError, AuthSession, Authenticator, MockAuthenticator, Registration};
pub use session::{
    SessionError, SessionManager, SessionState, SessionStatus, SessionWatcher, UserRecord,
};
