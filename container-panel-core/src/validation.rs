//! Signup form validation rules.
//!
//! Checks the `username`, `email` and `password` fields of a signup form
//! against format rules before the form may be submitted. Errors are
//! cumulative: every present field is checked even after an earlier
//! failure, in username → email → password order.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Minimum username length (Unicode scalar count).
pub const USERNAME_MIN: usize = 3;
/// Maximum username length (Unicode scalar count).
pub const USERNAME_MAX: usize = 50;
/// Minimum password length (Unicode scalar count).
pub const PASSWORD_MIN: usize = 6;

/// A named form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    /// Display label for the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Transient snapshot of the signup form's current values.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Structural email pattern: one or more non-space non-`@` characters,
/// `@`, same again, `.`, same again. Not RFC validation.
#[allow(clippy::expect_used)]
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Username length is within 3–50 characters.
pub fn username_length_ok(username: &str) -> bool {
    let len = username.chars().count();
    (USERNAME_MIN..=USERNAME_MAX).contains(&len)
}

/// Username uses only letters, digits, underscores or hyphens.
pub fn username_charset_ok(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Full username rule: length and character set.
pub fn username_ok(username: &str) -> bool {
    username_length_ok(username) && username_charset_ok(username)
}

/// Minimal structural email check.
pub fn email_ok(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Password is at least 6 characters.
pub fn password_ok(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN
}

/// Validates a signup form.
///
/// Returns every failed rule, in username → email → password order. An
/// empty result means submission may proceed.
pub fn validate_signup(form: &SignupForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !username_ok(&form.username) {
        errors.push(FieldError {
            field: Field::Username,
            message: "Username must be 3-50 characters, alphanumeric with underscores or hyphens only".to_string(),
        });
    }

    if !email_ok(&form.email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter a valid email address".to_string(),
        });
    }

    if !password_ok(&form.password) {
        errors.push(FieldError {
            field: Field::Password,
            message: "Password must be at least 6 characters".to_string(),
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_length_boundaries() {
        assert!(!username_length_ok("ab"));
        assert!(username_length_ok("abc"));
        assert!(username_length_ok(&"a".repeat(50)));
        assert!(!username_length_ok(&"a".repeat(51)));
    }

    #[test]
    fn username_length_counts_chars_not_bytes() {
        // Three CJK characters are nine bytes but three characters
        assert!(username_length_ok("你好吗"));
    }

    #[test]
    fn username_charset() {
        assert!(username_charset_ok("web-user_01"));
        assert!(!username_charset_ok("web user"));
        assert!(!username_charset_ok("user!"));
        assert!(!username_charset_ok(""));
    }

    #[test]
    fn email_structural_check() {
        assert!(email_ok("a@b.c"));
        assert!(email_ok("first.last@example.com"));
        assert!(!email_ok("no-at-sign.com"));
        assert!(!email_ok("missing@dot"));
        assert!(!email_ok("sp ace@example.com"));
        assert!(!email_ok("user@exa mple.com"));
        assert!(!email_ok(""));
    }

    #[test]
    fn email_requires_dot_after_at() {
        // A dot before the @ alone is not enough
        assert!(!email_ok("first.last@example"));
    }

    #[test]
    fn password_boundary() {
        assert!(!password_ok("12345"));
        assert!(password_ok("123456"));
    }

    #[test]
    fn signup_errors_are_cumulative_and_ordered() {
        let form = SignupForm {
            username: "ab".to_string(),
            email: "not-an-email".to_string(),
            password: "12345".to_string(),
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, Field::Username);
        assert_eq!(errors[1].field, Field::Email);
        assert_eq!(errors[2].field, Field::Password);
    }

    #[test]
    fn signup_valid_form_passes() {
        let form = SignupForm {
            username: "alice_01".to_string(),
            email: "alice@example.com".to_string(),
            password: "s3cret!".to_string(),
        };
        assert!(validate_signup(&form).is_empty());
    }

    #[test]
    fn signup_single_failure_reports_only_that_field() {
        let form = SignupForm {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Password);
    }
}
