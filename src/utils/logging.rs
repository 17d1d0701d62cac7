/// Logging utilities for PII redaction
///
/// The relay logs delivery outcomes for diagnostics, but the caller's email
/// address is PII and must not land in logs verbatim.
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving the domain for debugging
///
/// # Examples
/// ```
/// use verimail::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("sent to test@acme.com"), "sent to ***@acme.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if let Some(at_pos) = email.find('@') {
                format!("***{}", &email[at_pos..])
            } else {
                "***@***".to_string()
            }
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_email() {
        assert_eq!(redact_email("user@example.com"), "***@example.com");
        assert_eq!(
            redact_email("Verification sent to alice@acme.com just now"),
            "Verification sent to ***@acme.com just now"
        );
    }

    #[test]
    fn test_redact_email_no_match() {
        assert_eq!(redact_email("no addresses here"), "no addresses here");
    }

    #[test]
    fn test_redact_multiple_emails() {
        let text = "a@x.com and b@y.org";
        assert_eq!(redact_email(text), "***@x.com and ***@y.org");
    }
}
