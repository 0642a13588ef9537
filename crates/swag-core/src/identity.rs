//! The fixed catalog of test identities for the demo shop
//!
//! Six hand-enumerated accounts, each with a behavior class and an
//! expected login outcome. Nothing here is created or mutated at
//! runtime; the derived views are pure filters over the catalog.

use serde::{Deserialize, Serialize};

/// Shared password for every catalog identity
pub const PASSWORD: &str = "secret_sauce";

/// Behavior class of a demo-shop account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityCategory {
    Standard,
    LockedOut,
    Problem,
    PerformanceGlitch,
    Error,
    Visual,
}

impl std::fmt::Display for IdentityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::LockedOut => write!(f, "locked_out"),
            Self::Problem => write!(f, "problem"),
            Self::PerformanceGlitch => write!(f, "performance_glitch"),
            Self::Error => write!(f, "error"),
            Self::Visual => write!(f, "visual"),
        }
    }
}

/// One credential/behavior profile from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub username: &'static str,
    pub password: &'static str,
    pub category: IdentityCategory,
    pub description: &'static str,
    pub can_login: bool,
    pub expected_error: Option<&'static str>,
}

impl Identity {
    /// The standard user, able to log in with no known quirks
    pub const STANDARD: Identity = Identity {
        username: "standard_user",
        password: PASSWORD,
        category: IdentityCategory::Standard,
        description: "Standard user with normal login behavior",
        can_login: true,
        expected_error: None,
    };

    /// Locked-out account; login must be rejected
    pub const LOCKED_OUT: Identity = Identity {
        username: "locked_out_user",
        password: PASSWORD,
        category: IdentityCategory::LockedOut,
        description: "Locked account, login is refused",
        can_login: false,
        expected_error: Some("Epic sadface: Sorry, this user has been locked out."),
    };

    /// Account with known UI bugs (broken product images etc.)
    pub const PROBLEM: Identity = Identity {
        username: "problem_user",
        password: PASSWORD,
        category: IdentityCategory::Problem,
        description: "User that triggers UI bugs such as broken images",
        can_login: true,
        expected_error: None,
    };

    /// Account with artificially slow responses
    pub const PERFORMANCE_GLITCH: Identity = Identity {
        username: "performance_glitch_user",
        password: PASSWORD,
        category: IdentityCategory::PerformanceGlitch,
        description: "User with slow page responses",
        can_login: true,
        expected_error: None,
    };

    /// Account that errors on certain features
    pub const ERROR: Identity = Identity {
        username: "error_user",
        password: PASSWORD,
        category: IdentityCategory::Error,
        description: "User that hits errors on specific features",
        can_login: true,
        expected_error: None,
    };

    /// Account with visual glitches
    pub const VISUAL: Identity = Identity {
        username: "visual_user",
        password: PASSWORD,
        category: IdentityCategory::Visual,
        description: "User with visual layout bugs",
        can_login: true,
        expected_error: None,
    };

    /// The full catalog, in its fixed enumeration order
    pub fn all() -> &'static [Identity] {
        static CATALOG: [Identity; 6] = [
            Identity::STANDARD,
            Identity::LOCKED_OUT,
            Identity::PROBLEM,
            Identity::PERFORMANCE_GLITCH,
            Identity::ERROR,
            Identity::VISUAL,
        ];
        &CATALOG
    }

    /// Identities that are expected to log in successfully
    pub fn login_capable() -> Vec<Identity> {
        Self::all().iter().filter(|u| u.can_login).copied().collect()
    }

    /// Identities whose login is expected to be refused
    pub fn login_incapable() -> Vec<Identity> {
        Self::all().iter().filter(|u| !u.can_login).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_fixed() {
        assert_eq!(Identity::all().len(), 6);
        assert!(Identity::all().iter().all(|u| u.password == PASSWORD));
    }

    #[test]
    fn test_login_capable_view() {
        let capable = Identity::login_capable();
        assert_eq!(capable.len(), 5);
        assert!(capable.iter().all(|u| u.can_login));
        assert!(!capable.iter().any(|u| u.username == "locked_out_user"));
    }

    #[test]
    fn test_login_incapable_view() {
        let incapable = Identity::login_incapable();
        assert_eq!(incapable.len(), 1);
        assert_eq!(incapable[0].username, "locked_out_user");
        assert!(incapable[0]
            .expected_error
            .unwrap()
            .contains("locked out"));
    }

    #[test]
    fn test_views_partition_the_catalog() {
        let total = Identity::login_capable().len() + Identity::login_incapable().len();
        assert_eq!(total, Identity::all().len());
    }
}
