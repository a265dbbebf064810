use thiserror::Error;

use super::request::{ContactField, ContactForm};

/// Shown when the endpoint rejects a message without saying why
pub const GENERIC_FAILURE: &str = "Something went wrong.";
/// Shown when the request fails and the failure carries no description
pub const NETWORK_FAILURE: &str = "Network error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitErrorKind {
    /// The endpoint answered with a non-OK status
    Rejected,
    /// The request never completed
    Transport,
}

/// Why a submission ended in the error state.
///
/// Constructed only through `rejected`/`transport`, which substitute the
/// fallback text, so `message()` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmitError {
    kind: SubmitErrorKind,
    message: String,
}

impl SubmitError {
    pub fn rejected(message: Option<&str>) -> Self {
        Self::with_fallback(SubmitErrorKind::Rejected, message, GENERIC_FAILURE)
    }

    pub fn transport(description: Option<&str>) -> Self {
        Self::with_fallback(SubmitErrorKind::Transport, description, NETWORK_FAILURE)
    }

    fn with_fallback(kind: SubmitErrorKind, message: Option<&str>, fallback: &str) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string();
        Self { kind, message }
    }

    pub fn kind(&self) -> SubmitErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Lifecycle of one rendered contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(SubmitError),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Error(err) => Some(err.message()),
            _ => None,
        }
    }
}

/// Field values and submission state of one form instance.
///
/// ```text
/// idle ─┐
/// success ─┼─ begin() ─> loading ─ complete() ─> success | error
/// error ─┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    form: ContactForm,
    state: SubmissionState,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    /// The submit control is disabled exactly while a request is in flight
    pub fn submit_disabled(&self) -> bool {
        self.state.is_loading()
    }

    /// Enter `Loading` and hand out the values to send.
    ///
    /// Returns `None` if a request is already in flight; nothing is cancelled.
    pub fn begin(&mut self) -> Option<ContactForm> {
        if self.state.is_loading() {
            log::debug!("contact form: submit ignored, request already in flight");
            return None;
        }
        self.state = SubmissionState::Loading;
        Some(self.form.clone())
    }

    /// Apply the result of the request started by `begin`.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) {
        if !self.state.is_loading() {
            log::warn!("contact form: completion arrived without a pending request");
        }
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.state = SubmissionState::Success;
            }
            Err(err) => {
                self.state = SubmissionState::Error(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_values() -> ContactSession {
        let mut session = ContactSession::new();
        session.set_field(ContactField::FirstName, "Ada".into());
        session.set_field(ContactField::ReplyTo, "ada@example.com".into());
        session.set_field(ContactField::Message, "Hi there".into());
        session
    }

    #[test]
    fn test_new_session_is_idle_and_enabled() {
        let session = ContactSession::new();
        assert_eq!(session.state(), &SubmissionState::Idle);
        assert!(!session.submit_disabled());
        assert_eq!(session.state().error_message(), None);
    }

    #[test]
    fn test_begin_enters_loading_and_snapshots_fields() {
        let mut session = session_with_values();
        let snapshot = session.begin().unwrap();
        assert_eq!(session.state(), &SubmissionState::Loading);
        assert!(session.submit_disabled());
        assert_eq!(snapshot.first_name, "Ada");
        assert_eq!(&snapshot, session.form());
    }

    #[test]
    fn test_begin_while_loading_is_refused() {
        let mut session = session_with_values();
        assert!(session.begin().is_some());
        assert!(session.begin().is_none());
        assert!(session.state().is_loading());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut session = session_with_values();
        session.begin();
        session.complete(Ok(()));
        assert_eq!(session.state(), &SubmissionState::Success);
        assert!(session.form().is_empty());
        assert!(!session.submit_disabled());
    }

    #[test]
    fn test_error_preserves_fields() {
        let mut session = session_with_values();
        let before = session.form().clone();
        session.begin();
        session.complete(Err(SubmitError::rejected(Some("Invalid email"))));
        assert_eq!(session.form(), &before);
        assert_eq!(session.state().error_message(), Some("Invalid email"));
        assert!(!session.submit_disabled());
    }

    #[test]
    fn test_new_attempt_clears_previous_error() {
        let mut session = session_with_values();
        session.begin();
        session.complete(Err(SubmitError::transport(None)));
        assert!(session.state().error_message().is_some());

        session.begin();
        assert_eq!(session.state().error_message(), None);
        assert!(session.state().is_loading());
    }

    #[test]
    fn test_success_is_reenterable() {
        let mut session = session_with_values();
        session.begin();
        session.complete(Ok(()));
        session.set_field(ContactField::FirstName, "Grace".into());
        assert!(session.begin().is_some());
        assert!(session.state().is_loading());
    }

    #[test]
    fn test_error_message_never_empty() {
        assert_eq!(SubmitError::rejected(None).message(), GENERIC_FAILURE);
        assert_eq!(SubmitError::rejected(Some("")).message(), GENERIC_FAILURE);
        assert_eq!(SubmitError::transport(None).message(), NETWORK_FAILURE);
        assert_eq!(SubmitError::transport(Some("")).message(), NETWORK_FAILURE);
        // Only an empty description is absent; whitespace is shown as given
        assert_eq!(SubmitError::transport(Some("  ")).message(), "  ");
        assert_eq!(
            SubmitError::transport(Some("Failed to fetch")).to_string(),
            "Failed to fetch"
        );
    }

    #[test]
    fn test_submit_disabled_only_while_loading() {
        let states = [
            (SubmissionState::Idle, false),
            (SubmissionState::Loading, true),
            (SubmissionState::Success, false),
            (SubmissionState::Error(SubmitError::transport(None)), false),
        ];
        for (state, disabled) in states {
            let session = ContactSession {
                form: ContactForm::default(),
                state,
            };
            assert_eq!(session.submit_disabled(), disabled);
        }
    }
}
