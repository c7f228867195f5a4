use access::{AuthGate, PlatformStore};
use dioxus::prelude::*;
use shared_types::{AppError, Role, Session, User};

/// Global authentication state.
///
/// Wraps the single [`AuthGate`] in a signal so every component that reads
/// the session re-renders when it changes.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    gate: Signal<AuthGate<PlatformStore>>,
    /// True while a login is in flight.
    pub loading: Signal<bool>,
}

impl AuthState {
    /// Rehydrate from device storage.
    pub fn new() -> Self {
        Self {
            gate: Signal::new(AuthGate::restore(PlatformStore::default())),
            loading: Signal::new(false),
        }
    }

    pub fn session(&self) -> Session {
        self.gate.read().session().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.gate.read().session().user().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.gate.read().session().role()
    }

    pub async fn login(&mut self, email: String, password: String) -> Result<User, AppError> {
        self.loading.set(true);
        // One round trip to the renderer so the in-flight state is painted.
        if let Err(e) = document::eval("return true;").join::<bool>().await {
            tracing::debug!(error = ?e, "render yield before login failed");
        }
        let result = self
            .gate
            .write()
            .login(&email, &password)
            .cloned();
        self.loading.set(false);
        result
    }

    pub fn logout(&mut self) {
        self.gate.write().logout();
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.gate.read().sidebar_collapsed()
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.gate.write().toggle_sidebar()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook for the signed-in user. Only meaningful below the auth guard.
pub fn use_current_user() -> Option<User> {
    use_auth().current_user()
}
