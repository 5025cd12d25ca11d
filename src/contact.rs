//! Contact Form Model
//!
//! Draft fields, in-flight state and the outcome of a submission.
//! The network call itself lives in `relay`.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::toast::Toast;

/// application/x-www-form-urlencoded keeps these unescaped
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// One message, built at submit time and sent once
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ]
    }

    /// Encode as `name=..&email=..&message=..`
    pub fn to_form_body(&self) -> String {
        self.fields()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, FORM_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The request could not be built
    Request(String),
    /// fetch() rejected (offline, CORS, DNS...)
    Network(String),
    /// The relay answered with a non-2xx status
    Rejected(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Request(e) => write!(f, "failed to build request: {}", e),
            SubmitError::Network(e) => write!(f, "network error: {}", e),
            SubmitError::Rejected(status) => write!(f, "relay rejected submission with status {}", status),
        }
    }
}

/// Any 2xx is success
pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum SubmitState {
    #[default]
    Idle,
    Sending,
}

/// Controlled form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    state: SubmitState,
}

impl ContactForm {
    pub fn is_sending(&self) -> bool {
        self.state == SubmitState::Sending
    }

    /// Mirrors the inputs' `required` attributes
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Start a submission. Returns None while another one is in flight
    /// or when a required field is empty.
    pub fn begin(&mut self) -> Option<ContactSubmission> {
        if self.is_sending() || !self.is_complete() {
            return None;
        }
        self.state = SubmitState::Sending;
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// End the in-flight submission. Clears the fields only on success;
    /// the submit control is re-enabled either way.
    pub fn finish(&mut self, result: Result<(), SubmitError>) -> Toast {
        self.state = SubmitState::Idle;
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                Toast::sent()
            }
            Err(_) => Toast::send_failed(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_form_body_encoding() {
        let submission = ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada+news@example.com".to_string(),
            message: "Hi & bye = ok?\nThanks".to_string(),
        };
        assert_eq!(
            submission.to_form_body(),
            "name=Ada%20Lovelace&email=ada%2Bnews%40example.com&message=Hi%20%26%20bye%20%3D%20ok%3F%0AThanks"
        );
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), Ok(()));
        assert_eq!(classify_status(204), Ok(()));
        assert_eq!(classify_status(302), Err(SubmitError::Rejected(302)));
        assert_eq!(classify_status(422), Err(SubmitError::Rejected(422)));
        assert_eq!(classify_status(500), Err(SubmitError::Rejected(500)));
    }

    #[test]
    fn test_begin_requires_all_fields() {
        let mut form = filled();
        form.message.clear();
        assert!(form.begin().is_none());
        assert!(!form.is_sending());
    }

    #[test]
    fn test_begin_disables_until_finish() {
        let mut form = filled();
        let submission = form.begin().expect("complete form should submit");
        assert_eq!(submission.email, "ada@example.com");
        assert!(form.is_sending());
        assert_eq!(form.submit_label(), "Sending...");

        // Second click while in flight is ignored
        assert!(form.begin().is_none());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        form.begin();
        let toast = form.finish(classify_status(200));

        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Message sent successfully!");
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert!(!form.is_sending());
    }

    #[test]
    fn test_rejection_keeps_fields() {
        let mut form = filled();
        form.begin();
        let toast = form.finish(classify_status(500));

        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Error sending message");
        assert_eq!(form, filled());
        assert_eq!(form.submit_label(), "Send Message");
    }

    #[test]
    fn test_network_error_reenables() {
        let mut form = filled();
        form.begin();
        let toast = form.finish(Err(SubmitError::Network("offline".to_string())));

        assert_eq!(toast.kind, ToastKind::Error);
        assert!(!form.is_sending());
        // Retry is a fresh submission
        assert!(form.begin().is_some());
    }
}
