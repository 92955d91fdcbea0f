use std::sync::Arc;

use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use portfolio_contact::ContactForm;

use crate::template::{self, NotFoundTemplate};

mod contact;
mod health;
mod index;
mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_form: Arc<ContactForm>,
}

pub async fn fallback() -> impl IntoResponse {
    template::render_with_status(axum::http::StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/theme", post(theme::toggle))
        .route("/health", get(health::health))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(state)
}
