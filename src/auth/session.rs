//! Session capture and storage

use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Cookie attribute that carries the session
pub const SESSION_COOKIE_PREFIX: &str = "session=";

/// Find the `session=...` attribute among `Set-Cookie` header values.
///
/// Each value is split on `;` and the first trimmed attribute starting with
/// `session=` is returned whole, ready to be sent back as a `Cookie` header.
pub fn extract_session<I, S>(set_cookies: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    set_cookies.into_iter().find_map(|header| {
        header
            .as_ref()
            .split(';')
            .map(str::trim)
            .find(|attr| attr.starts_with(SESSION_COOKIE_PREFIX))
            .map(str::to_string)
    })
}

/// Shared holder of the active session
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    session: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session; `None` logs out
    pub async fn set(&self, session: Option<String>) {
        debug!(logged_in = session.is_some(), "Session updated");
        *self.session.write().await = session;
    }

    pub async fn clear(&self) {
        self.set(None).await;
    }

    pub async fn get(&self) -> Option<String> {
        self.session.read().await.clone()
    }

    /// The session, or `AuthenticationRequired` when logged out
    pub async fn require(&self) -> Result<String> {
        self.get().await.ok_or(Error::AuthenticationRequired)
    }

    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }
}
