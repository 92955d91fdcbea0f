#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use portfolio::config::{Config, ObservabilityConfig, RelayConfig, ServerConfig, SiteConfig};
use portfolio::routes::{self, AppState};
use portfolio_contact::{ContactForm, RelayClient};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Stand-in for the third-party form relay: records every payload and
/// can be flipped into a failing mode.
#[derive(Clone, Default)]
pub struct RelayStub {
    requests: Arc<Mutex<Vec<Value>>>,
    fail: Arc<AtomicBool>,
}

impl RelayStub {
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn submit(State(stub): State<RelayStub>, Json(body): Json<Value>) -> impl IntoResponse {
    stub.requests.lock().unwrap().push(body);

    if stub.fail.load(Ordering::SeqCst) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "message": "relay unavailable"})),
        )
    } else {
        (
            StatusCode::OK,
            Json(json!({"success": true, "message": "Email sent"})),
        )
    }
}

/// Bind the relay stub on an ephemeral port and return its base URL.
pub async fn spawn_relay_stub() -> (String, RelayStub) {
    let stub = RelayStub::default();
    let app = Router::new()
        .route("/submit", post(submit))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

pub fn test_config(relay_base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        relay: RelayConfig {
            base_url: relay_base_url.to_string(),
            access_key: "test-access-key".to_string(),
        },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub relay: RelayStub,
}

pub async fn create_test_app() -> TestApp {
    let (base_url, relay) = spawn_relay_stub().await;
    let config = test_config(&base_url);

    let client = RelayClient::new(&config.relay.base_url, config.relay.access_key.clone()).unwrap();
    let state = AppState {
        config,
        contact_form: ContactForm::new(Arc::new(client)),
    };

    TestApp {
        router: routes::router(state),
        relay,
    }
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}
