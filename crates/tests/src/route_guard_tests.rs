use access::routes::{
    descriptor, landing_path, reachable_paths, ABOUT_PATH, DASHBOARD_PATH, HOME_PATH, LOGIN_PATH,
};
use access::{decide_for, GuardDecision, ROUTES};
use pretty_assertions::assert_eq;
use shared_types::{Role, Session, ALL_ROLES};

use crate::common::{session_for, signed_in};

fn decision(session: &Session, path: &str) -> GuardDecision {
    let route = descriptor(path).unwrap_or_else(|| panic!("no route for {path}"));
    decide_for(session, route)
}

#[test]
fn anonymous_visitor_only_reaches_login() {
    let anon = Session::anonymous();
    assert_eq!(decision(&anon, LOGIN_PATH), GuardDecision::Render);
    for path in [HOME_PATH, ABOUT_PATH, DASHBOARD_PATH] {
        assert_eq!(decision(&anon, path), GuardDecision::RedirectToLogin, "{path}");
    }
}

#[test]
fn employee_is_bounced_from_dashboard_to_home() {
    let session = session_for("sam@example.com");
    assert_eq!(
        decision(&session, DASHBOARD_PATH),
        GuardDecision::Forbidden {
            redirect_to: HOME_PATH
        }
    );
    assert!(decision(&session, HOME_PATH).allows_render());
    assert!(decision(&session, ABOUT_PATH).allows_render());
}

#[test]
fn managers_hr_and_admins_open_dashboard() {
    for email in ["tia@team.com", "uma@hr.com", "vic@admin.com"] {
        assert!(
            decision(&session_for(email), DASHBOARD_PATH).allows_render(),
            "{email}"
        );
    }
}

#[test]
fn login_page_renders_for_signed_in_users() {
    assert!(decision(&session_for("will@hr.com"), LOGIN_PATH).allows_render());
}

#[test]
fn forbidden_redirect_target_is_open_to_every_role() {
    for role in ALL_ROLES {
        assert!(reachable_paths(*role).contains(&HOME_PATH), "{role}");
    }
}

#[test]
fn query_string_and_trailing_slash_resolve_to_the_same_route() {
    assert_eq!(descriptor("/dashboard/").map(|r| r.path), Some(DASHBOARD_PATH));
    assert_eq!(descriptor("/dashboard?period=month").map(|r| r.path), Some(DASHBOARD_PATH));
    assert_eq!(descriptor("/"), None);
    assert_eq!(descriptor("/settings"), None);
}

#[test]
fn landing_follows_the_gate_through_login_and_logout() {
    let mut gate = signed_in("xena@team.com");
    assert_eq!(landing_path(gate.session()), HOME_PATH);

    gate.logout();
    assert_eq!(landing_path(gate.session()), LOGIN_PATH);
}

#[test]
fn reachable_paths_by_role() {
    assert_eq!(reachable_paths(Role::Employee), vec![HOME_PATH, ABOUT_PATH]);
    assert_eq!(
        reachable_paths(Role::Admin),
        vec![HOME_PATH, ABOUT_PATH, DASHBOARD_PATH]
    );
}

#[test]
fn every_protected_route_redirects_anonymous() {
    let anon = Session::anonymous();
    for route in ROUTES.iter().filter(|r| !r.public) {
        assert_eq!(decide_for(&anon, route), GuardDecision::RedirectToLogin, "{}", route.path);
    }
}
