mod form;
mod message;
mod relay;

pub use form::{ContactForm, SubmitOutcome, SUCCESS_BANNER_DELAY};
pub use message::{ContactMessage, SubmissionState};
pub use relay::{RelayClient, RelayReceipt, RelayTransport, SubmissionError};

pub use reqwest::StatusCode;
