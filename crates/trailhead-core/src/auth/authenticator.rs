use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::session::UserRecord;

/// Token the mock backend issues for every session
pub const MOCK_TOKEN: &str = "dummy-token";

/// Artificial delay simulating a network round trip
const MOCK_DELAY_MS: u64 = 800;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Registration rejected: {0}")]
    RegistrationRejected(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Sign-up form data. The display name is optional and only exists at
/// registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub display_name: Option<String>,
}

/// A freshly issued token plus the identity it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: UserRecord,
}

/// Backend seam for exchanging credentials for a session.
///
/// The starter ships only [`MockAuthenticator`]; a real identity provider
/// plugs in by implementing this trait and swapping the instance handed to
/// the frontend.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a session.
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Create an account and sign it in.
    async fn register(
        &self,
        registration: &Registration,
        password: &str,
    ) -> Result<AuthSession, AuthError>;
}

/// Development backend: any credentials succeed after a fixed delay.
///
/// No credential check happens anywhere in the starter, so this never
/// returns an error; [`AuthError`] exists for real implementations.
pub struct MockAuthenticator {
    delay: Duration,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(MOCK_DELAY_MS),
        }
    }

    /// Override the artificial delay (tests use zero).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<AuthSession, AuthError> {
        tokio::time::sleep(self.delay).await;
        debug!(%email, "Mock authentication complete");
        Ok(AuthSession {
            token: MOCK_TOKEN.to_string(),
            user: UserRecord::new(email),
        })
    }

    async fn register(
        &self,
        registration: &Registration,
        _password: &str,
    ) -> Result<AuthSession, AuthError> {
        tokio::time::sleep(self.delay).await;
        debug!(email = %registration.email, "Mock registration complete");
        Ok(AuthSession {
            token: MOCK_TOKEN.to_string(),
            user: UserRecord {
                email: registration.email.clone(),
                display_name: registration.display_name.clone(),
            },
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_authenticate_accepts_any_credentials() {
        let auth = MockAuthenticator::with_delay(Duration::ZERO);

        let session = auth
            .authenticate("hiker@example.com", "anything at all")
            .await
            .unwrap();
        assert_eq!(session.token, MOCK_TOKEN);
        assert_eq!(session.user.email, "hiker@example.com");
        assert_eq!(session.user.display_name, None);
    }

    #[tokio::test]
    async fn test_register_carries_the_display_name() {
        let auth = MockAuthenticator::with_delay(Duration::ZERO);
        let registration = Registration {
            email: "new@example.com".to_string(),
            display_name: Some("Newcomer".to_string()),
        };

        let session = auth.register(&registration, "hunter2").await.unwrap();
        assert_eq!(session.token, MOCK_TOKEN);
        assert_eq!(session.user.email, "new@example.com");
        assert_eq!(session.user.display_name, Some("Newcomer".to_string()));
    }
}
