//! Side navigation menu and its role filtering.

use crate::routes::{ABOUT_PATH, DASHBOARD_PATH, DASHBOARD_ROLES, HOME_PATH};
use shared_types::{Role, Session, ALL_ROLES};

/// Icon slot for a menu entry; the UI picks the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    About,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub key: &'static str,
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    pub required_roles: &'static [Role],
}

pub const MENU: &[NavEntry] = &[
    NavEntry {
        key: "home",
        path: HOME_PATH,
        label: "Home",
        icon: NavIcon::Home,
        required_roles: ALL_ROLES,
    },
    NavEntry {
        key: "about",
        path: ABOUT_PATH,
        label: "About",
        icon: NavIcon::About,
        required_roles: ALL_ROLES,
    },
    NavEntry {
        key: "dashboard",
        path: DASHBOARD_PATH,
        label: "Dashboard",
        icon: NavIcon::Dashboard,
        required_roles: DASHBOARD_ROLES,
    },
];

/// Entries the session's role may see, in their original order.
/// An anonymous session sees nothing.
pub fn visible_entries<'a>(session: &Session, entries: &'a [NavEntry]) -> Vec<&'a NavEntry> {
    let Some(role) = session.role() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|e| role.is_permitted(e.required_roles))
        .collect()
}

pub fn is_active(entry: &NavEntry, current_path: &str) -> bool {
    entry.path == current_path
}
