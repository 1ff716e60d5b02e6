//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// Validation
// =============================================================================

/// Minimum age requirement for registration
pub const MIN_AGE: i32 = 18;

/// Email address pattern (name@domain.com with a 2+ letter TLD)
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Check if an email address is well-formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("user_name@ensias-um5.com"));
        assert!(is_valid_email("user_name-1@host.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("invalidemail"));
        assert!(!is_valid_email("invalid@"));
        assert!(!is_valid_email("invalid@domain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain.c"));
        assert!(!is_valid_email("spaces in@example.com"));
    }
}
