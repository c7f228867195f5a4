use access::storage::KeyValueStore;
use access::{AuthGate, MemoryStore};
use chrono::{DateTime, TimeZone, Utc};
use shared_types::{AppError, Session, User};
use std::cell::Cell;
use std::rc::Rc;

/// Fixed login time so persisted records compare exactly.
pub fn login_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 0).unwrap()
}

/// Gate over an empty in-memory store.
pub fn fresh_gate() -> AuthGate<MemoryStore> {
    AuthGate::restore(MemoryStore::new())
}

/// Gate signed in as `email` at [`login_time`].
pub fn signed_in(email: &str) -> AuthGate<MemoryStore> {
    let mut gate = fresh_gate();
    gate.login_at(email, "secret", login_time())
        .expect("non-empty credentials always sign in");
    gate
}

/// Authenticated session for `email` without touching any store.
pub fn session_for(email: &str) -> Session {
    Session::authenticated(User::from_login(email, login_time()))
}

/// Reopen the gate on a copy of `gate`'s storage, as a page reload would.
pub fn reload(gate: &AuthGate<MemoryStore>) -> AuthGate<MemoryStore> {
    AuthGate::restore(gate.store().backend().clone())
}

/// Store whose writes always fail. Reads see nothing.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::storage(format!("quota exceeded writing `{key}`")))
    }

    fn remove(&mut self, _key: &str) {}
}

/// In-memory store that starts refusing writes once its switch is flipped.
/// Clones share the switch, so a test can keep one while the gate owns another.
#[derive(Debug, Clone, Default)]
pub struct SwitchableStore {
    pub inner: MemoryStore,
    refuse_writes: Rc<Cell<bool>>,
}

impl SwitchableStore {
    pub fn switch(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.refuse_writes)
    }
}

impl KeyValueStore for SwitchableStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.refuse_writes.get() {
            return Err(AppError::storage(format!("storage full writing `{key}`")));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) {
        self.inner.remove(key);
    }
}
