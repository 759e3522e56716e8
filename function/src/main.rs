//! LED Action Lambda - Fulfills the `ledControl` Dialogflow action.
//!
//! Receives the Dialogflow webhook envelope over HTTP, validates the
//! requested LED state, forwards it to the Particle cloud, and replies with
//! the text the assistant should speak.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response};
use shared::{handle_webhook, Config, Error as WebhookError, ParticleClient, WebhookRequest};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    particle: ParticleClient,
}

impl AppState {
    fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;
        Ok(Self {
            particle: ParticleClient::new(&config),
        })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let request: WebhookRequest = match serde_json::from_slice(event.body().as_ref()) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Failed to parse webhook envelope: {}", e);
            let err = WebhookError::from(e);
            return error_response(err.status_code(), err.to_string());
        }
    };

    info!(
        action = request.result.action.as_deref().unwrap_or(""),
        query = request.result.resolved_query.as_deref().unwrap_or(""),
        "Webhook request"
    );

    let response = handle_webhook(&state.particle, &request).await;
    json_response(200, &response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new()?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
