use crate::state::{ContactField, ContactFormState};
use regex::Regex;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^[0-9\s\-()+]{7,15}$";

// Compiled once on first use; `None` only if a pattern fails to compile
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(EMAIL_PATTERN));
static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(PHONE_PATTERN));

/// A contact form submission with every field trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Validate the contact form, collecting one message per failing field
pub fn validate_contact_form(
    form: &ContactFormState,
) -> Result<ContactSubmission, Vec<(ContactField, String)>> {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    let message = form.message.trim();

    let mut errors = Vec::new();

    if name.chars().count() < 3 {
        errors.push((
            ContactField::Name,
            "Name is required and must be at least 3 characters.".to_string(),
        ));
    }

    if !is_valid_email(email) {
        errors.push((
            ContactField::Email,
            "A valid email address is required.".to_string(),
        ));
    }

    if !is_valid_phone(phone) {
        errors.push((
            ContactField::Phone,
            "Phone number format is invalid.".to_string(),
        ));
    }

    if message.chars().count() < 10 {
        errors.push((
            ContactField::Message,
            "Message must be at least 10 characters long.".to_string(),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        message: message.to_string(),
    })
}

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|e| tracing::error!("Invalid validation pattern {}: {}", pattern, e))
        .ok()
}

fn matches(re: &Option<Regex>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn is_valid_email(email: &str) -> bool {
    matches(&EMAIL_RE, email)
}

/// An empty phone number is allowed
pub fn is_valid_phone(phone: &str) -> bool {
    phone.is_empty() || matches(&PHONE_RE, phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str, message: &str) -> ContactFormState {
        ContactFormState {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    fn failing_fields(form: &ContactFormState) -> Vec<ContactField> {
        validate_contact_form(form)
            .unwrap_err()
            .into_iter()
            .map(|(field, _)| field)
            .collect()
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let submission = validate_contact_form(&form(
            "  Fatu Sesay ",
            " fatu@example.sl ",
            "",
            "  Requesting match tickets.  ",
        ))
        .unwrap();

        assert_eq!(submission.name, "Fatu Sesay");
        assert_eq!(submission.email, "fatu@example.sl");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.message, "Requesting match tickets.");
    }

    #[test]
    fn test_all_fields_reported() {
        let fields = failing_fields(&form("  Al ", "not-an-email", "12", "too short"));
        assert_eq!(
            fields,
            [
                ContactField::Name,
                ContactField::Email,
                ContactField::Phone,
                ContactField::Message
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        let errors = validate_contact_form(&form("", "x@y.z", "", "A long enough message")).unwrap_err();
        assert_eq!(
            errors,
            [(
                ContactField::Name,
                "Name is required and must be at least 3 characters.".to_string()
            )]
        );
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("info@slfa.sl"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("info@slfa"));
        assert!(!is_valid_email("info @slfa.sl"));
        assert!(!is_valid_email("@slfa.sl"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone(""));
        assert!(is_valid_phone("+232 76 123 456"));
        assert!(is_valid_phone("(076) 123-456"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("+232 76 123 456 789"));
        assert!(!is_valid_phone("076-CALL-NOW"));
    }

    #[test]
    fn test_patterns_compile_once() {
        assert!(EMAIL_RE.is_some());
        assert!(PHONE_RE.is_some());

        let first = EMAIL_RE.as_ref().map(|re| re as *const Regex);
        assert!(is_valid_email("info@slfa.sl"));
        let second = EMAIL_RE.as_ref().map(|re| re as *const Regex);
        assert_eq!(first, second);
    }
}
