use regex::Regex;
use serde::Serialize;
use std::{sync::LazyLock, time::Duration};
use thiserror::Error;

/// Simulated network latency for a submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

// Minimal shape check, not RFC 5322.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validation failures. The display text is shown to the visitor as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
    #[error("A message is already being sent.")]
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Checks the fields in form order; the first failure is returned.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    pub fn confirmation(&self) -> String {
        format!(
            "Thank you for your message, {}! I will get back to you soon at {}.",
            self.name, self.email
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Invalid(ContactError),
    Submitting(ContactSubmission),
}

/// Contact form lifecycle: `Idle -> (Invalid | Submitting) -> Idle`.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    state: FormState,
}

impl ContactForm {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validates the raw field values and, on success, enters `Submitting`.
    ///
    /// The caller is expected to call [`ContactForm::complete`] after [`SUBMIT_DELAY`].
    pub fn submit(
        &mut self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactSubmission, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::InFlight);
        }
        let submission = ContactSubmission::new(name, email, message);
        match submission.validate() {
            Ok(()) => {
                self.state = FormState::Submitting(submission.clone());
                Ok(submission)
            }
            Err(e) => {
                self.state = FormState::Invalid(e.clone());
                Err(e)
            }
        }
    }

    /// Finishes an in-flight submission, returning the sent snapshot.
    pub fn complete(&mut self) -> Option<ContactSubmission> {
        match std::mem::take(&mut self.state) {
            FormState::Submitting(sent) => Some(sent),
            other => {
                self.state = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("pratik.shinde@mail.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn test_validation_order() {
        let cases = [
            (("", "", ""), ContactError::MissingName),
            (("   ", "a@b.co", "hi"), ContactError::MissingName),
            (("Ann", "", ""), ContactError::MissingEmail),
            (("Ann", "a@b", ""), ContactError::InvalidEmail),
            (("Ann", "a@b.co", "  \n"), ContactError::MissingMessage),
        ];
        for ((name, email, message), expected) in cases {
            let res = ContactSubmission::new(name, email, message).validate();
            assert_eq!(res, Err(expected));
        }
    }

    #[test]
    fn test_error_messages_name_the_field() {
        assert_eq!(ContactError::MissingName.to_string(), "Please enter your name.");
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_valid_submission_round_trip() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit_label(), SUBMIT_LABEL);

        let sent = form
            .submit("  Ann ", " ann@example.com", "Hello there")
            .expect("valid submission");
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), SENDING_LABEL);
        assert_eq!(sent.name, "Ann");

        let done = form.complete().expect("in-flight submission");
        assert_eq!(done, sent);
        assert_eq!(form.state(), &FormState::Idle);
        assert!(!form.is_submitting());
        assert_eq!(
            done.confirmation(),
            "Thank you for your message, Ann! I will get back to you soon at ann@example.com."
        );
    }

    #[test]
    fn test_empty_name_never_submits() {
        let mut form = ContactForm::default();
        let res = form.submit("", "ann@example.com", "Hello");
        assert_eq!(res, Err(ContactError::MissingName));
        assert!(!form.is_submitting());
        assert_eq!(form.state(), &FormState::Invalid(ContactError::MissingName));
        // nothing pending to complete
        assert_eq!(form.complete(), None);
        assert_eq!(form.state(), &FormState::Invalid(ContactError::MissingName));
    }

    #[test]
    fn test_resubmit_while_in_flight() {
        let mut form = ContactForm::default();
        form.submit("Ann", "ann@example.com", "Hello").unwrap();
        let res = form.submit("Bob", "bob@example.com", "Hi");
        assert_eq!(res, Err(ContactError::InFlight));
        assert_eq!(form.complete().map(|s| s.name), Some("Ann".to_string()));
    }

    #[test]
    fn test_invalid_then_valid() {
        let mut form = ContactForm::default();
        assert!(form.submit("Ann", "nope", "Hello").is_err());
        assert!(form.submit("Ann", "ann@example.com", "Hello").is_ok());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_submission_log_snapshot() {
        let sent = ContactSubmission::new(" Ann ", "ann@example.com", "Hello");
        let json = serde_json::to_value(&sent).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ann",
                "email": "ann@example.com",
                "message": "Hello",
            })
        );
    }
}
