//! Hosted variant of the LED webhook.
//!
//! Serves the same Dialogflow fulfillment as the Lambda variant from a
//! long-running HTTP server: `GET /` answers a liveness probe and `POST /`
//! handles the webhook envelope.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use shared::{handle_webhook, ParticleClient, WebhookRequest, WebhookResponse};

/// Application state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub particle: Arc<ParticleClient>,
}

impl AppState {
    pub fn new(particle: ParticleClient) -> Self {
        Self {
            particle: Arc::new(particle),
        }
    }
}

/// Build the webhook router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness).post(webhook))
        .with_state(state)
}

async fn liveness() -> &'static str {
    "It works!"
}

async fn webhook(
    State(state): State<AppState>,
    Json(request): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
    info!(
        action = request.result.action.as_deref().unwrap_or(""),
        query = request.result.resolved_query.as_deref().unwrap_or(""),
        "Webhook request"
    );
    Json(handle_webhook(&state.particle, &request).await)
}
