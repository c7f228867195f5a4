//! Login/logout over the persisted session.
//!
//! There is no credential check: any non-empty email and password sign in,
//! and the role comes from the email domain. The gate owns the only handle
//! to the storage backend, so every session mutation goes through here.

use crate::session_store::SessionStore;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use shared_types::{AppError, Session, User};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct AuthGate<S> {
    store: SessionStore<S>,
    session: Session,
}

impl<S: KeyValueStore> AuthGate<S> {
    /// Wrap `backend` and rehydrate any persisted session.
    pub fn restore(backend: S) -> Self {
        let store = SessionStore::new(backend);
        let session = store.load();
        Self { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AppError> {
        self.login_at(email, password, Utc::now())
    }

    /// [`login`](Self::login) with an explicit login time.
    ///
    /// Fails only when a field is empty, in which case the session is left
    /// untouched. A storage failure after a valid login is logged and the
    /// session stays authenticated in memory.
    pub fn login_at(
        &mut self,
        email: &str,
        password: &str,
        at: DateTime<Utc>,
    ) -> Result<&User, AppError> {
        validate_credentials(email, password)?;

        let user = User::from_login(email, at);
        tracing::info!(email = %user.email, role = user.role.as_str(), "signed in");
        self.session = Session::authenticated(user);

        if let Err(e) = self.store.save(&self.session) {
            tracing::warn!(error = %e, "session not persisted; it will not survive a reload");
        }

        self.session
            .user()
            .ok_or_else(|| AppError::internal("session lost its user right after login"))
    }

    /// Drop the session and every persisted key. Safe to call repeatedly.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            tracing::info!(email = %user.email, "signed out");
        }
        self.session = Session::anonymous();
        self.store.clear();
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.store.sidebar_collapsed()
    }

    /// Flip the persisted sidebar preference and return the new value.
    pub fn toggle_sidebar(&mut self) -> bool {
        let collapsed = !self.store.sidebar_collapsed();
        if let Err(e) = self.store.set_sidebar_collapsed(collapsed) {
            tracing::warn!(error = %e, "sidebar preference not persisted");
        }
        collapsed
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    let mut fields = HashMap::new();
    if email.is_empty() {
        fields.insert("email".to_string(), "Email is required".to_string());
    }
    if password.is_empty() {
        fields.insert("password".to_string(), "Password is required".to_string());
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(
            "Please enter both email and password",
            fields,
        ))
    }
}
