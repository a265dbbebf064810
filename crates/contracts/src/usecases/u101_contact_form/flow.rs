use super::request::ContactForm;
use super::response::EndpointReply;
use super::state::SubmitError;

/// Transport to the form-processing endpoint.
///
/// One call to `post` is one outbound request: no retries, no deduplication.
/// A request that cannot complete is reported as `SubmitError::transport`.
#[allow(async_fn_in_trait)]
pub trait FormEndpoint {
    async fn post(&self, form: &ContactForm) -> Result<EndpointReply, SubmitError>;
}

/// Send one message and fold the reply into the form's outcome
pub async fn send<E: FormEndpoint>(endpoint: &E, form: &ContactForm) -> Result<(), SubmitError> {
    let reply = endpoint.post(form).await?;
    let outcome = reply.into_outcome();
    match &outcome {
        Ok(()) => log::debug!("contact form: message accepted"),
        Err(err) => log::warn!("contact form: {:?} failure: {}", err.kind(), err),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u101_contact_form::request::ContactField;
    use crate::usecases::u101_contact_form::state::{
        ContactSession, SubmissionState, SubmitErrorKind, GENERIC_FAILURE, NETWORK_FAILURE,
    };
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Replays a canned reply and records what was posted
    struct MockEndpoint {
        reply: Result<EndpointReply, SubmitError>,
        posted: RefCell<Vec<ContactForm>>,
    }

    impl MockEndpoint {
        fn new(reply: Result<EndpointReply, SubmitError>) -> Self {
            Self {
                reply,
                posted: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormEndpoint for MockEndpoint {
        async fn post(&self, form: &ContactForm) -> Result<EndpointReply, SubmitError> {
            self.posted.borrow_mut().push(form.clone());
            self.reply.clone()
        }
    }

    fn filled_session() -> ContactSession {
        let mut session = ContactSession::new();
        session.set_field(ContactField::FirstName, "Ada".into());
        session.set_field(ContactField::LastName, "Lovelace".into());
        session.set_field(ContactField::ReplyTo, "ada@example.com".into());
        session.set_field(ContactField::Message, "Let's talk".into());
        session
    }

    /// Drives one submission the way the contact view does.
    /// Returns every state observed along the way.
    fn run(endpoint: &MockEndpoint, session: &mut ContactSession) -> Vec<SubmissionState> {
        let mut seen = vec![session.state().clone()];
        let form = session.begin().expect("session was not loading");
        seen.push(session.state().clone());
        let outcome = block_on(send(endpoint, &form));
        session.complete(outcome);
        seen.push(session.state().clone());
        seen
    }

    #[test]
    fn test_success_goes_idle_loading_success_and_clears() {
        let endpoint = MockEndpoint::new(Ok(EndpointReply::Accepted));
        let mut session = filled_session();

        let seen = run(&endpoint, &mut session);

        assert_eq!(
            seen,
            vec![
                SubmissionState::Idle,
                SubmissionState::Loading,
                SubmissionState::Success
            ]
        );
        assert!(session.form().is_empty());
        let posted = endpoint.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].reply_to, "ada@example.com");
    }

    #[test]
    fn test_rejection_reports_first_error_message() {
        let endpoint = MockEndpoint::new(Ok(EndpointReply::rejected_with_text(
            r#"{"errors":[{"message":"Invalid email"}]}"#,
        )));
        let mut session = filled_session();
        let before = session.form().clone();

        run(&endpoint, &mut session);

        assert_eq!(session.state().error_message(), Some("Invalid email"));
        assert_eq!(session.form(), &before);
    }

    #[test]
    fn test_rejection_without_body_uses_generic_message() {
        let endpoint = MockEndpoint::new(Ok(EndpointReply::Rejected(None)));
        let mut session = filled_session();

        run(&endpoint, &mut session);

        assert_eq!(session.state().error_message(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn test_transport_failure_reports_description() {
        let endpoint = MockEndpoint::new(Err(SubmitError::transport(Some("Failed to fetch"))));
        let mut session = filled_session();

        run(&endpoint, &mut session);

        match session.state() {
            SubmissionState::Error(err) => {
                assert_eq!(err.kind(), SubmitErrorKind::Transport);
                assert_eq!(err.message(), "Failed to fetch");
            }
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[test]
    fn test_transport_failure_without_description_uses_network_message() {
        let endpoint = MockEndpoint::new(Err(SubmitError::transport(None)));
        let mut session = filled_session();
        let before = session.form().clone();

        run(&endpoint, &mut session);

        assert_eq!(session.state().error_message(), Some(NETWORK_FAILURE));
        assert_eq!(session.form(), &before);
    }

    #[test]
    fn test_retry_after_error_posts_again() {
        let failing = MockEndpoint::new(Err(SubmitError::transport(None)));
        let working = MockEndpoint::new(Ok(EndpointReply::Accepted));
        let mut session = filled_session();

        run(&failing, &mut session);
        let seen = run(&working, &mut session);

        assert!(matches!(seen[0], SubmissionState::Error(_)));
        assert_eq!(seen[2], SubmissionState::Success);
        assert_eq!(working.posted.borrow()[0].first_name, "Ada");
    }
}
