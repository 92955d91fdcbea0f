use serde::{Deserialize, Serialize};
use validator::Validate;

/// A message composed in the contact section of the site.
///
/// `name` and `message` must be non-empty; `subject` is optional free
/// text and may stay empty. The email check mirrors the browser's native
/// form validation so a request that slips past it is still rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub subject: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

impl ContactMessage {
    /// True when every field is empty, the state a form returns to after
    /// a successful submission.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

/// Lifecycle of a submit interaction. Owned exclusively by
/// [`ContactForm`](crate::ContactForm); there is no terminal error state,
/// a failed attempt returns the form to `Idle` for a retry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}
