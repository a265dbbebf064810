pub mod flow;
pub mod request;
pub mod response;
pub mod state;

pub use flow::{send, FormEndpoint};
pub use request::{ContactField, ContactForm};
pub use response::{EndpointReply, ErrorBody};
pub use state::{ContactSession, SubmissionState, SubmitError, SubmitErrorKind};
