//! Placeholder login.
//!
//! Nothing here is a security boundary: the password is never checked and
//! the role is guessed from the username.

use crate::role::Role;

/// What the login form submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Credentials as typed into the login form.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Guess a role from a username.
///
/// Case-insensitive: "teacher" anywhere wins, then "parent", otherwise
/// parent.
pub fn infer_role(username: &str) -> Role {
    let lower = username.to_lowercase();
    if lower.contains("teacher") {
        Role::Teacher
    } else if lower.contains("parent") {
        Role::Parent
    } else {
        Role::default()
    }
}

/// Login state of the landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Anonymous,
    LoggedIn(Role),
}

impl LoginState {
    /// State for arriving at the landing page, logged in when the
    /// navigation carried a role.
    pub fn from_arrival(role: Option<Role>) -> Self {
        role.map_or(LoginState::Anonymous, LoginState::LoggedIn)
    }

    /// Accept any credentials.
    pub fn login(credentials: &Credentials) -> Self {
        let role = infer_role(&credentials.username);
        tracing::info!(username = %credentials.username, role = role.as_str(), "login");
        LoginState::LoggedIn(role)
    }

    /// Back to the login form.
    pub fn logout(self) -> Self {
        if let LoginState::LoggedIn(role) = self {
            tracing::info!(role = role.as_str(), "logout");
        }
        LoginState::Anonymous
    }

    /// The logged-in role, if any.
    pub fn role(self) -> Option<Role> {
        match self {
            LoginState::Anonymous => None,
            LoginState::LoggedIn(role) => Some(role),
        }
    }

    /// Greeting shown above the login form or the module grid.
    pub fn welcome_title(self, school_name: &str) -> String {
        match self {
            LoginState::Anonymous => format!("Welcome to {school_name}! 🐑"),
            LoginState::LoggedIn(role) => {
                format!("Welcome to {school_name} {}! 🐑", role.header_suffix())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("teacher_jane", Role::Teacher)]
    #[case("parent_bob", Role::Parent)]
    #[case("xyz", Role::Parent)]
    #[case("HeadTEACHER", Role::Teacher)]
    #[case("Parent-Teacher liaison", Role::Teacher)]
    #[case("", Role::Parent)]
    fn test_infer_role(#[case] username: &str, #[case] expected: Role) {
        assert_eq!(infer_role(username), expected);
    }

    #[rstest]
    fn test_any_password_accepted(
        #[values("", "hunter2", "   ", "correct horse battery staple")] password: &str,
    ) {
        let state = LoginState::login(&Credentials::new("teacher_jane", password));
        assert_eq!(state, LoginState::LoggedIn(Role::Teacher));
    }

    #[test]
    fn test_logout_clears_role() {
        let state = LoginState::login(&Credentials::new("parent_bob", "pw"));
        assert_eq!(state.role(), Some(Role::Parent));
        assert_eq!(state.logout().role(), None);
        assert_eq!(LoginState::Anonymous.logout(), LoginState::Anonymous);
    }

    #[test]
    fn test_arrival_with_payload_counts_as_logged_in() {
        assert_eq!(
            LoginState::from_arrival(Some(Role::Teacher)),
            LoginState::LoggedIn(Role::Teacher)
        );
        assert_eq!(LoginState::from_arrival(None), LoginState::Anonymous);
    }

    #[test]
    fn test_welcome_titles() {
        assert_eq!(
            LoginState::Anonymous.welcome_title("WeeWoolies"),
            "Welcome to WeeWoolies! 🐑"
        );
        assert_eq!(
            LoginState::LoggedIn(Role::Teacher).welcome_title("WeeWoolies"),
            "Welcome to WeeWoolies - Teacher! 🐑"
        );
        assert_eq!(
            LoginState::LoggedIn(Role::Parent).welcome_title("WeeWoolies"),
            "Welcome to WeeWoolies - Parent! 🐑"
        );
    }
}
