use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee role controlling which pages and menu entries are reachable.
///
/// - `Employee` — default for any address outside the managed domains.
/// - `TeamManager` — `@team.com` addresses.
/// - `Hr` — `@hr.com` addresses.
/// - `Admin` — `@admin.com` addresses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Employee,
    /// Older builds persisted this role as `"TEAM MANAGER"`.
    #[serde(alias = "TEAM MANAGER")]
    TeamManager,
    Hr,
    Admin,
}

/// Email domain suffixes that map to an elevated role, checked in order.
const DOMAIN_ROLES: &[(&str, Role)] = &[
    ("@admin.com", Role::Admin),
    ("@hr.com", Role::Hr),
    ("@team.com", Role::TeamManager),
];

/// Every role, lowest privilege first.
pub const ALL_ROLES: &[Role] = &[Role::Employee, Role::TeamManager, Role::Hr, Role::Admin];

impl Role {
    /// Infer the role from an email's domain suffix. Case-sensitive.
    pub fn from_email(email: &str) -> Self {
        DOMAIN_ROLES
            .iter()
            .find(|(suffix, _)| email.ends_with(suffix))
            .map(|(_, role)| *role)
            .unwrap_or_default()
    }

    /// Storage form, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::TeamManager => "TEAM_MANAGER",
            Role::Hr => "HR",
            Role::Admin => "ADMIN",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::TeamManager => "Team Manager",
            Role::Hr => "HR",
            Role::Admin => "Admin",
        }
    }

    /// Whether this role may access something guarded by `required`.
    /// An empty requirement admits every role.
    pub fn is_permitted(&self, required: &[Role]) -> bool {
        required.is_empty() || required.contains(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Profile of the signed-in employee, persisted as JSON under the `user` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    /// Local part of the email address.
    pub name: String,
    pub role: Role,
    pub login_time: DateTime<Utc>,
}

impl User {
    /// Build the profile for a fresh login.
    pub fn from_login(email: &str, login_time: DateTime<Utc>) -> Self {
        let name = email.split('@').next().unwrap_or_default().to_string();
        Self {
            email: email.to_string(),
            name,
            role: Role::from_email(email),
            login_time,
        }
    }

    /// Upper-cased first letter of the name for avatars, `U` when unnamed.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Authentication state of the running application.
///
/// A session is authenticated exactly when it holds a user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 9, 15, 0).unwrap()
    }

    #[test]
    fn role_from_email_maps_known_domains() {
        assert_eq!(Role::from_email("ana@admin.com"), Role::Admin);
        assert_eq!(Role::from_email("bo@hr.com"), Role::Hr);
        assert_eq!(Role::from_email("cy@team.com"), Role::TeamManager);
        assert_eq!(Role::from_email("di@example.com"), Role::Employee);
    }

    #[test]
    fn role_from_email_requires_exact_suffix() {
        assert_eq!(Role::from_email("x@subadmin.com"), Role::Employee);
        assert_eq!(Role::from_email("x@admin.com.au"), Role::Employee);
        assert_eq!(Role::from_email("x@ADMIN.COM"), Role::Employee);
        assert_eq!(Role::from_email("admin.com"), Role::Employee);
    }

    #[test]
    fn role_serializes_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Role::TeamManager).unwrap(), "\"TEAM_MANAGER\"");
        for role in ALL_ROLES {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn role_accepts_legacy_team_manager_spelling() {
        let role: Role = serde_json::from_str("\"TEAM MANAGER\"").unwrap();
        assert_eq!(role, Role::TeamManager);
    }

    #[test]
    fn empty_requirement_permits_every_role() {
        for role in ALL_ROLES {
            assert!(role.is_permitted(&[]));
        }
    }

    #[test]
    fn requirement_permits_only_members() {
        let required = [Role::TeamManager, Role::Hr, Role::Admin];
        assert!(!Role::Employee.is_permitted(&required));
        assert!(Role::Hr.is_permitted(&required));
        assert!(Role::Admin.is_permitted(&[Role::Admin]));
        assert!(!Role::Hr.is_permitted(&[Role::Admin]));
    }

    #[test]
    fn user_from_login_derives_name_and_role() {
        let user = User::from_login("jane.doe@hr.com", at());
        assert_eq!(user.name, "jane.doe");
        assert_eq!(user.role, Role::Hr);
        assert_eq!(user.email, "jane.doe@hr.com");
        assert_eq!(user.login_time, at());
    }

    #[test]
    fn user_from_login_without_at_sign_uses_whole_string() {
        let user = User::from_login("kiosk", at());
        assert_eq!(user.name, "kiosk");
        assert_eq!(user.role, Role::Employee);
    }

    #[test]
    fn user_json_uses_camel_case_keys() {
        let json = serde_json::to_value(User::from_login("sam@team.com", at())).unwrap();
        assert_eq!(json["loginTime"], "2025-04-01T09:15:00Z");
        assert_eq!(json["role"], "TEAM_MANAGER");
        assert_eq!(json["name"], "sam");
    }

    #[test]
    fn user_deserializes_legacy_record() {
        let json = r#"{"email":"lee@team.com","name":"lee","role":"TEAM MANAGER","loginTime":"2025-04-01T09:15:00.000Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::TeamManager);
        assert_eq!(user.login_time, at());
    }

    #[test]
    fn initial_falls_back_to_u() {
        let mut user = User::from_login("@example.com", at());
        assert_eq!(user.initial(), "U");
        user.name = "mo".into();
        assert_eq!(user.initial(), "M");
    }

    #[test]
    fn session_authenticated_iff_user_present() {
        let anon = Session::anonymous();
        assert!(!anon.is_authenticated());
        assert_eq!(anon.role(), None);
        assert_eq!(anon, Session::default());

        let session = Session::authenticated(User::from_login("a@admin.com", at()));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Admin));
    }
}
