use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role};

use crate::common::{fresh_gate, login_time, signed_in};

// ─── Login ──────────────────────────────────────────────────────────────────

#[test]
fn login_derives_name_and_role_from_email() {
    let mut gate = fresh_gate();
    let user = gate
        .login_at("alice@hr.com", "pw", login_time())
        .unwrap()
        .clone();

    assert_eq!(user.name, "alice");
    assert_eq!(user.email, "alice@hr.com");
    assert_eq!(user.role, Role::Hr);
    assert_eq!(user.login_time, login_time());
    assert!(gate.is_authenticated());
}

#[test]
fn each_managed_domain_maps_to_its_role() {
    let cases = [
        ("bob@team.com", Role::TeamManager),
        ("carol@hr.com", Role::Hr),
        ("dave@admin.com", Role::Admin),
        ("erin@example.org", Role::Employee),
    ];
    for (email, expected) in cases {
        let gate = signed_in(email);
        assert_eq!(gate.session().role(), Some(expected), "role for {email}");
    }
}

#[test]
fn domain_match_is_case_sensitive() {
    let gate = signed_in("frank@ADMIN.com");
    assert_eq!(gate.session().role(), Some(Role::Employee));
}

#[test]
fn email_without_at_sign_uses_whole_address_as_name() {
    let gate = signed_in("localonly");
    let user = gate.session().user().unwrap();
    assert_eq!(user.name, "localonly");
    assert_eq!(user.role, Role::Employee);
}

#[test]
fn empty_fields_are_rejected_with_field_errors() {
    let mut gate = fresh_gate();
    let err = gate.login_at("", "", login_time()).unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field("email").is_some());
    assert!(err.field("password").is_some());
    assert!(!gate.is_authenticated());
    assert!(gate.store().backend().is_empty());
}

#[test]
fn empty_password_only_flags_password() {
    let mut gate = fresh_gate();
    let err = gate.login_at("gina@team.com", "", login_time()).unwrap_err();

    assert_eq!(err.field("email"), None);
    assert!(err.field("password").is_some());
}

#[test]
fn whitespace_credentials_are_accepted() {
    let mut gate = fresh_gate();
    assert!(gate.login_at(" ", " ", login_time()).is_ok());
    assert!(gate.is_authenticated());
}

#[test]
fn failed_login_keeps_existing_session() {
    let mut gate = signed_in("henry@admin.com");
    assert!(gate.login_at("", "pw", login_time()).is_err());
    assert_eq!(gate.session().role(), Some(Role::Admin));
}

#[test]
fn second_login_replaces_first_user() {
    let mut gate = signed_in("ivy@team.com");
    gate.login_at("ivy@hr.com", "pw", login_time()).unwrap();
    assert_eq!(gate.session().user().unwrap().email, "ivy@hr.com");
    assert_eq!(gate.session().role(), Some(Role::Hr));
}

// ─── Logout ─────────────────────────────────────────────────────────────────

#[test]
fn logout_clears_session_and_storage() {
    let mut gate = signed_in("jack@team.com");
    gate.toggle_sidebar();
    gate.logout();

    assert!(!gate.is_authenticated());
    assert!(gate.store().backend().is_empty());
}

#[test]
fn logout_when_anonymous_is_harmless() {
    let mut gate = fresh_gate();
    gate.logout();
    gate.logout();
    assert!(!gate.is_authenticated());
}
