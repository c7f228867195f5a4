use access::nav::is_active;
use access::routes::{descriptor, DASHBOARD_PATH, HOME_PATH};
use access::{decide_for, visible_entries, NavEntry, NavIcon, MENU};
use pretty_assertions::assert_eq;
use shared_types::{Role, Session};

use crate::common::{session_for, signed_in};

fn labels(session: &Session, entries: &[NavEntry]) -> Vec<&'static str> {
    visible_entries(session, entries)
        .into_iter()
        .map(|e| e.label)
        .collect()
}

#[test]
fn employee_menu_hides_dashboard() {
    assert_eq!(labels(&session_for("yara@example.com"), MENU), vec!["Home", "About"]);
}

#[test]
fn elevated_roles_see_full_menu_in_order() {
    for email in ["zed@team.com", "amy@hr.com", "ben@admin.com"] {
        assert_eq!(
            labels(&session_for(email), MENU),
            vec!["Home", "About", "Dashboard"],
            "{email}"
        );
    }
}

#[test]
fn anonymous_menu_is_empty() {
    assert!(visible_entries(&Session::anonymous(), MENU).is_empty());
}

#[test]
fn every_visible_entry_passes_the_route_guard() {
    for email in ["cal@example.com", "dee@team.com", "eve@hr.com", "fay@admin.com"] {
        let session = session_for(email);
        for entry in visible_entries(&session, MENU) {
            let route = descriptor(entry.path).unwrap();
            assert!(decide_for(&session, route).allows_render(), "{email} {}", entry.path);
        }
    }
}

#[test]
fn menu_follows_role_changes_across_logins() {
    let mut gate = signed_in("gus@example.com");
    assert_eq!(visible_entries(gate.session(), MENU).len(), 2);

    gate.login_at("gus@admin.com", "pw", crate::common::login_time())
        .unwrap();
    assert_eq!(visible_entries(gate.session(), MENU).len(), 3);

    gate.logout();
    assert!(visible_entries(gate.session(), MENU).is_empty());
}

#[test]
fn custom_entries_filter_by_their_own_roles() {
    const ENTRIES: &[NavEntry] = &[
        NavEntry {
            key: "open",
            path: HOME_PATH,
            label: "Open",
            icon: NavIcon::Home,
            required_roles: &[],
        },
        NavEntry {
            key: "hr-only",
            path: DASHBOARD_PATH,
            label: "HR only",
            icon: NavIcon::Dashboard,
            required_roles: &[Role::Hr],
        },
    ];
    assert_eq!(labels(&session_for("hal@admin.com"), ENTRIES), vec!["Open"]);
    assert_eq!(labels(&session_for("ida@hr.com"), ENTRIES), vec!["Open", "HR only"]);
}

#[test]
fn only_the_current_path_is_active() {
    let active: Vec<_> = MENU
        .iter()
        .filter(|e| is_active(e, DASHBOARD_PATH))
        .map(|e| e.key)
        .collect();
    assert_eq!(active, vec!["dashboard"]);
}
