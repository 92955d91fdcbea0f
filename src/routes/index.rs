use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use portfolio_contact::{ContactForm, ContactMessage, SubmissionState};

use crate::config::SiteConfig;
use crate::content::{self, Project, SkillGroup, SocialLink};
use crate::routes::{AppState, theme};
use crate::template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: SiteConfig,
    pub theme: &'static str,
    pub projects: &'static [Project],
    pub skills: &'static [SkillGroup],
    pub socials: &'static [SocialLink],
    pub contact: ContactSection,
}

/// View state of the contact section, derived from the form controller:
/// a transient success banner, a disabled submit control while a
/// submission is in flight, or the editable form with any retained
/// fields.
pub struct ContactSection {
    pub submitted: bool,
    pub submitting: bool,
    pub fields: ContactMessage,
    pub error: Option<String>,
}

impl ContactSection {
    pub fn current(form: &ContactForm, error: Option<String>) -> Self {
        let state = form.state();
        Self {
            submitted: state == SubmissionState::Submitted,
            submitting: state == SubmissionState::Submitting,
            fields: form.fields(),
            error,
        }
    }

    /// Rejected input echoed back without touching the controller.
    pub fn rejected(fields: ContactMessage, error: String) -> Self {
        Self {
            submitted: false,
            submitting: false,
            fields,
            error: Some(error),
        }
    }
}

pub fn page_template(state: &AppState, theme: &'static str, contact: ContactSection) -> IndexTemplate {
    IndexTemplate {
        site: state.config.site.clone(),
        theme,
        projects: content::projects(),
        skills: content::skill_groups(),
        socials: content::social_links(),
        contact,
    }
}

pub async fn page(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let contact = ContactSection::current(&state.contact_form, None);

    template::render(page_template(&state, theme::from_jar(&jar), contact))
}
