//! Seam to the authentication provider collaborator.
//!
//! Token acquisition and refresh live outside this crate; the stores only
//! need a bearer credential at request time.

use secrecy::Secret;

/// Supplies the current bearer credential, if any. Requests go out
/// unauthenticated when no token is available.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<Secret<String>>;
}

/// Fixed-token provider for tests and simple embeddings.
pub struct StaticTokenProvider {
    token: Option<Secret<String>>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(Secret::new(token.into())),
        }
    }

    /// Provider that never attaches a credential.
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Option<Secret<String>> {
        self.token.clone()
    }
}
