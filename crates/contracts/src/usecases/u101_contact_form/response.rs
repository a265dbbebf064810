use serde::Deserialize;
use serde_json::Value;

use super::state::SubmitError;

/// Error payload the form endpoint attaches to a non-OK reply:
/// `{ "errors": [ { "message": "..." }, ... ] }`
///
/// Entries stay untyped: only the first one's `message` is read, so extra
/// members or odd later entries must not spoil the decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    errors: Vec<Value>,
}

impl ErrorBody {
    pub fn from_json(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// Message of the first entry. Later entries are never consulted.
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .first()
            .and_then(|entry| entry.get("message"))
            .and_then(Value::as_str)
    }
}

/// What came back from one POST to the form endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointReply {
    /// OK-class status
    Accepted,
    /// Non-OK status; `None` when the body was missing or not the expected JSON
    Rejected(Option<ErrorBody>),
}

impl EndpointReply {
    pub fn rejected_with_text(body: &str) -> Self {
        EndpointReply::Rejected(ErrorBody::from_json(body))
    }

    pub fn into_outcome(self) -> Result<(), SubmitError> {
        match self {
            EndpointReply::Accepted => Ok(()),
            EndpointReply::Rejected(body) => Err(SubmitError::rejected(
                body.as_ref().and_then(ErrorBody::first_message),
            )),
        }
    }
}
