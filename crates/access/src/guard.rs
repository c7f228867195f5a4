//! Render-or-redirect decision for protected routes.

use crate::routes::{RouteDescriptor, HOME_PATH};
use shared_types::{Role, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// No session; send the visitor to the login page.
    RedirectToLogin,
    /// Signed in, but the role is not in the route's requirement.
    Forbidden { redirect_to: &'static str },
}

impl GuardDecision {
    pub fn allows_render(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }
}

/// Decide access to content guarded by `required_roles`.
///
/// An empty requirement admits any authenticated user. A signed-in user
/// without the required role is sent to the home page, which every role
/// can open.
pub fn decide(session: &Session, required_roles: &[Role]) -> GuardDecision {
    match session.role() {
        None => GuardDecision::RedirectToLogin,
        Some(role) if role.is_permitted(required_roles) => GuardDecision::Render,
        Some(_) => GuardDecision::Forbidden {
            redirect_to: HOME_PATH,
        },
    }
}

/// [`decide`] for a route table entry. Public routes always render.
pub fn decide_for(session: &Session, route: &RouteDescriptor) -> GuardDecision {
    if route.public {
        return GuardDecision::Render;
    }
    decide(session, route.required_roles)
}
