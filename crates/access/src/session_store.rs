//! Persistence of the session and its UI preferences.

use crate::storage::KeyValueStore;
use shared_types::{AppError, Session, User};

/// `"true"` while a session is persisted; absent otherwise.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
/// JSON-encoded [`User`].
pub const USER_KEY: &str = "user";
/// Sidebar collapse preference, scoped to the session.
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Every key owned by a session. All are removed on logout.
pub const SESSION_KEYS: &[&str] = &[AUTH_FLAG_KEY, USER_KEY, SIDEBAR_COLLAPSED_KEY];

/// Reads and writes the session through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Rehydrate the persisted session.
    ///
    /// Anything short of the flag being `"true"` plus a parseable user record
    /// yields the anonymous session.
    pub fn load(&self) -> Session {
        if self.backend.get(AUTH_FLAG_KEY).as_deref() != Some("true") {
            return Session::anonymous();
        }
        let Some(raw) = self.backend.get(USER_KEY) else {
            tracing::debug!("auth flag set without a user record; starting anonymous");
            return Session::anonymous();
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::debug!(email = %user.email, role = user.role.as_str(), "session rehydrated");
                Session::authenticated(user)
            }
            Err(e) => {
                tracing::debug!(error = %e, "discarding unreadable user record");
                Session::anonymous()
            }
        }
    }

    /// Persist `session`. An anonymous session clears the stored keys.
    ///
    /// The flag is dropped before the user record is rewritten, so a failed
    /// write leaves nothing that [`load`](Self::load) would accept. A
    /// previously saved user can never outlive a newer login.
    pub fn save(&mut self, session: &Session) -> Result<(), AppError> {
        let Some(user) = session.user() else {
            self.clear();
            return Ok(());
        };
        self.backend.remove(AUTH_FLAG_KEY);
        let json = serde_json::to_string(user)?;
        if let Err(e) = self.backend.set(USER_KEY, &json) {
            self.backend.remove(USER_KEY);
            return Err(e);
        }
        self.backend.set(AUTH_FLAG_KEY, "true")
    }

    pub fn clear(&mut self) {
        for key in SESSION_KEYS {
            self.backend.remove(key);
        }
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.backend.get(SIDEBAR_COLLAPSED_KEY).as_deref() == Some("true")
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> Result<(), AppError> {
        let value = if collapsed { "true" } else { "false" };
        self.backend.set(SIDEBAR_COLLAPSED_KEY, value)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
