//! Submit-time validation rules

use super::field::FieldName;
use super::form_state::{FormErrors, FormValues};
use once_cell::sync::Lazy;
use regex::Regex;

pub const ENTER_FIRST_NAME: &str = "Enter first name";
pub const ENTER_LAST_NAME: &str = "Enter last name";
pub const ENTER_EMAIL: &str = "Enter email";
pub const INVALID_EMAIL: &str = "Invalid email";

/// Local part of dot-separated atoms, `@`, one or more labels, and a
/// top-level label of at least two letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'^&/+-]+(?:\.[A-Za-z0-9_'^&/+-]+)*@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Check whether a trimmed string looks like an email address
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// Validate every field independently and collect the failures
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();

    if values.first_name.trim().is_empty() {
        errors.insert(FieldName::FirstName, ENTER_FIRST_NAME);
    }
    if values.last_name.trim().is_empty() {
        errors.insert(FieldName::LastName, ENTER_LAST_NAME);
    }

    let email = values.email.trim();
    if email.is_empty() {
        errors.insert(FieldName::Email, ENTER_EMAIL);
    } else if !is_valid_email(email) {
        errors.insert(FieldName::Email, INVALID_EMAIL);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(first: &str, last: &str, email: &str) -> FormValues {
        FormValues {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        }
    }

    mod required_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_empty_reports_every_field() {
            let errors = validate(&FormValues::default());
            assert_eq!(errors.get(FieldName::FirstName), Some(ENTER_FIRST_NAME));
            assert_eq!(errors.get(FieldName::LastName), Some(ENTER_LAST_NAME));
            assert_eq!(errors.get(FieldName::Email), Some(ENTER_EMAIL));
            assert_eq!(errors.len(), 3);
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let errors = validate(&values("  ", "\t", " \n "));
            assert_eq!(errors.len(), 3);
            assert_eq!(errors.get(FieldName::Email), Some(ENTER_EMAIL));
        }

        #[test]
        fn test_only_failing_fields_are_reported() {
            let errors = validate(&values("Ivan", "", "ivan.petrov@example.com"));
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FieldName::LastName), Some(ENTER_LAST_NAME));
            assert!(errors.get(FieldName::FirstName).is_none());
            assert!(errors.get(FieldName::Email).is_none());
        }

        #[test]
        fn test_valid_form_has_no_errors() {
            let errors = validate(&values("Ivan", "Petrov", "ivan.petrov@example.com"));
            assert!(errors.is_empty());
        }

        #[test]
        fn test_validate_is_idempotent() {
            let form = values("", "Petrov", "a@b");
            assert_eq!(validate(&form), validate(&form));
        }
    }

    mod email_format {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejects_malformed_addresses() {
            for bad in [
                "not-an-email",
                "a@b",
                "a@b.c",
                "a..b@example.com",
                ".a@example.com",
                "a@-.",
                "a b@example.com",
                "a@example.c0m",
            ] {
                let errors = validate(&values("Ivan", "Petrov", bad));
                assert_eq!(errors.get(FieldName::Email), Some(INVALID_EMAIL), "{bad}");
                assert_eq!(errors.len(), 1);
            }
        }

        #[test]
        fn test_accepts_common_addresses() {
            for good in [
                "ivan.petrov@example.com",
                "o'neil@mail.example.org",
                "first+tag@sub-domain.example.io",
                "a/b^c&d@example.co",
            ] {
                assert!(is_valid_email(good), "{good}");
            }
        }

        #[test]
        fn test_email_is_trimmed_before_matching() {
            let errors = validate(&values("Ivan", "Petrov", "  ivan.petrov@example.com  "));
            assert!(errors.is_empty());
        }

        #[test]
        fn test_empty_and_invalid_are_exclusive() {
            let errors = validate(&values("Ivan", "Petrov", "   "));
            assert_eq!(errors.get(FieldName::Email), Some(ENTER_EMAIL));
        }
    }
}
