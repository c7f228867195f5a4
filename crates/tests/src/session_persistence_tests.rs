use access::session_store::{AUTH_FLAG_KEY, SIDEBAR_COLLAPSED_KEY, USER_KEY};
use access::{AuthGate, KeyValueStore, MemoryStore, SidebarView};
use pretty_assertions::assert_eq;
use shared_types::{Role, User};

use crate::common::{login_time, reload, signed_in, FailingStore, SwitchableStore};

#[test]
fn login_persists_flag_and_user_record() {
    let gate = signed_in("kate@team.com");
    let backend = gate.store().backend();

    assert_eq!(backend.get(AUTH_FLAG_KEY).as_deref(), Some("true"));
    let raw = backend.get(USER_KEY).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["email"], "kate@team.com");
    assert_eq!(stored["name"], "kate");
    assert_eq!(stored["role"], "TEAM_MANAGER");
    assert!(stored["loginTime"].is_string());
}

#[test]
fn reload_restores_the_same_user() {
    let gate = signed_in("liam@admin.com");
    let restored = reload(&gate);
    assert_eq!(restored.session(), gate.session());
}

#[test]
fn reload_after_logout_is_anonymous() {
    let mut gate = signed_in("mia@hr.com");
    gate.logout();
    assert!(!reload(&gate).is_authenticated());
}

#[test]
fn legacy_team_manager_spelling_rehydrates() {
    let user = User::from_login("noah@team.com", login_time());
    let mut json: serde_json::Value = serde_json::to_value(&user).unwrap();
    json["role"] = "TEAM MANAGER".into();

    let store = MemoryStore::with_entries([
        (AUTH_FLAG_KEY, "true".to_string()),
        (USER_KEY, json.to_string()),
    ]);
    let gate = AuthGate::restore(store);
    assert_eq!(gate.session().role(), Some(Role::TeamManager));
}

#[test]
fn flag_without_user_is_anonymous() {
    let gate = AuthGate::restore(MemoryStore::with_entries([(AUTH_FLAG_KEY, "true")]));
    assert!(!gate.is_authenticated());
}

#[test]
fn user_without_flag_is_anonymous() {
    let user = User::from_login("olive@hr.com", login_time());
    let json = serde_json::to_string(&user).unwrap();
    let gate = AuthGate::restore(MemoryStore::with_entries([(USER_KEY, json)]));
    assert!(!gate.is_authenticated());
}

#[test]
fn flag_other_than_true_is_anonymous() {
    let user = User::from_login("pat@hr.com", login_time());
    let json = serde_json::to_string(&user).unwrap();
    let gate = AuthGate::restore(MemoryStore::with_entries([
        (AUTH_FLAG_KEY, "1".to_string()),
        (USER_KEY, json),
    ]));
    assert!(!gate.is_authenticated());
}

#[test]
fn malformed_user_record_is_anonymous() {
    let gate = AuthGate::restore(MemoryStore::with_entries([
        (AUTH_FLAG_KEY, "true"),
        (USER_KEY, "{not json"),
    ]));
    assert!(!gate.is_authenticated());
}

#[test]
fn storage_failure_still_signs_in() {
    let mut gate = AuthGate::restore(FailingStore);
    let user = gate.login_at("quinn@admin.com", "pw", login_time()).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(gate.is_authenticated());
}

#[test]
fn failed_relogin_does_not_restore_the_previous_user() {
    let store = SwitchableStore::default();
    let refuse_writes = store.switch();
    let mut gate = AuthGate::restore(store);
    gate.login_at("alice@admin.com", "pw", login_time()).unwrap();

    refuse_writes.set(true);
    gate.login_at("bob@example.com", "pw", login_time()).unwrap();
    assert_eq!(gate.session().role(), Some(Role::Employee));

    let restored = AuthGate::restore(gate.store().backend().clone());
    assert!(!restored.is_authenticated());
    assert!(!restored.store().backend().inner.contains_key(USER_KEY));
}

#[test]
fn sidebar_preference_survives_reload_and_clears_on_logout() {
    let mut gate = signed_in("rose@team.com");
    assert!(gate.toggle_sidebar());

    let mut restored = reload(&gate);
    assert!(restored.sidebar_collapsed());

    restored.logout();
    assert!(!restored.store().backend().contains_key(SIDEBAR_COLLAPSED_KEY));
    assert!(!restored.sidebar_collapsed());
}

#[test]
fn sidebar_toggle_on_failing_store_does_not_panic() {
    let mut gate = AuthGate::restore(FailingStore);
    gate.toggle_sidebar();
    assert!(!gate.sidebar_collapsed());
}

#[test]
fn narrow_viewport_collapse_leaves_stored_preference_alone() {
    let gate = signed_in("sara@team.com");
    let mut view = SidebarView::default();

    view.set_narrow(true);
    view.toggle_narrow();
    view.dismiss();
    assert!(view.collapsed(gate.sidebar_collapsed()));

    assert!(!gate.store().backend().contains_key(SIDEBAR_COLLAPSED_KEY));
    let restored = reload(&gate);
    view.set_narrow(false);
    assert!(!view.collapsed(restored.sidebar_collapsed()));
}
