use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use portfolio_contact::{ContactMessage, SubmitOutcome};
use serde::Deserialize;
use validator::Validate;

use crate::routes::index::{self, ContactSection};
use crate::routes::{AppState, theme};
use crate::template;

pub const INVALID_INPUT_MESSAGE: &str =
    "Please provide your name, a valid email address and a message.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Something went wrong sending your message, please try again.";

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

pub async fn action(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ActionInput>,
) -> Response {
    let message = ContactMessage {
        name: input.name,
        email: input.email,
        subject: input.subject,
        message: input.message,
    };

    if message.validate().is_err() {
        let contact = ContactSection::rejected(message, INVALID_INPUT_MESSAGE.to_string());

        return template::render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            index::page_template(&state, theme::from_jar(&jar), contact),
        );
    }

    match state.contact_form.submit(message).await {
        SubmitOutcome::Sent(receipt) => {
            tracing::info!(relay_message = %receipt.message, "contact form submitted");

            Redirect::to("/#contact").into_response()
        }
        // Duplicate activation while a submission is in flight: nothing
        // was sent, the page re-renders in its current state.
        SubmitOutcome::InFlight => Redirect::to("/#contact").into_response(),
        SubmitOutcome::Failed(_) => {
            let contact =
                ContactSection::current(&state.contact_form, Some(SUBMIT_FAILED_MESSAGE.to_string()));

            template::render(index::page_template(&state, theme::from_jar(&jar), contact))
        }
    }
}
