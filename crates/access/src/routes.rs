//! Static route table: which paths exist and who may see them.

use shared_types::{Role, Session};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";
pub const ABOUT_PATH: &str = "/about";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Roles allowed onto the analytics dashboard.
pub const DASHBOARD_ROLES: &[Role] = &[Role::TeamManager, Role::Hr, Role::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    /// Empty means any authenticated user.
    pub required_roles: &'static [Role],
    /// Reachable without a session.
    pub public: bool,
}

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: LOGIN_PATH,
        required_roles: &[],
        public: true,
    },
    RouteDescriptor {
        path: HOME_PATH,
        required_roles: &[],
        public: false,
    },
    RouteDescriptor {
        path: ABOUT_PATH,
        required_roles: &[],
        public: false,
    },
    RouteDescriptor {
        path: DASHBOARD_PATH,
        required_roles: DASHBOARD_ROLES,
        public: false,
    },
];

/// Descriptor for an exact path, ignoring any query string or trailing slash.
pub fn descriptor(path: &str) -> Option<&'static RouteDescriptor> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    ROUTES.iter().find(|r| r.path == path)
}

/// Where `/` and unknown paths send the user.
pub fn landing_path(session: &Session) -> &'static str {
    if session.is_authenticated() {
        HOME_PATH
    } else {
        LOGIN_PATH
    }
}

/// Protected paths a role may open, in table order.
pub fn reachable_paths(role: Role) -> Vec<&'static str> {
    ROUTES
        .iter()
        .filter(|r| !r.public && role.is_permitted(r.required_roles))
        .map(|r| r.path)
        .collect()
}
