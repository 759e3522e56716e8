//! Webhook orchestration: validate the intent argument, forward the
//! command to the device, and phrase the reply.

use tracing::{error, info, warn};

use crate::command::{CommandOutcome, LedState};
use crate::dialogflow::{WebhookRequest, WebhookResponse, LED_CONTROL_ACTION, LED_STATE_ARGUMENT};
use crate::particle::ParticleClient;

/// Reply when no usable argument was supplied, or the action is unknown.
pub const REPLY_MISSING: &str = "I don't understand";

/// Reply when the device could not be reached.
///
/// The upstream sample logged downstream failures and never answered the
/// user; here the failure is spoken back instead.
pub const REPLY_DEVICE_UNREACHABLE: &str = "Sorry, I couldn't reach the light. Please try again.";

/// Handle a parsed Dialogflow request end to end.
pub async fn handle_webhook(
    particle: &ParticleClient,
    request: &WebhookRequest,
) -> WebhookResponse {
    match request.result.action.as_deref() {
        Some(LED_CONTROL_ACTION) => {
            let argument = request.argument(LED_STATE_ARGUMENT);
            WebhookResponse::tell(handle_led_control(particle, argument).await)
        }
        other => {
            warn!("Unhandled action: {:?}", other);
            WebhookResponse::tell(REPLY_MISSING)
        }
    }
}

/// Validate the requested state and, if valid, forward it to the device.
///
/// Returns the natural-language reply for the assistant to speak.
pub async fn handle_led_control(particle: &ParticleClient, argument: Option<&str>) -> String {
    match CommandOutcome::from_argument(argument) {
        CommandOutcome::Missing => REPLY_MISSING.to_string(),
        CommandOutcome::Unrecognized(value) => {
            info!("Rejected unrecognized state '{}'", value);
            format!("I don't know how to turn the light {}", value)
        }
        CommandOutcome::Command(state) => set_led(particle, state).await,
    }
}

async fn set_led(particle: &ParticleClient, state: LedState) -> String {
    match particle.set_led(state).await {
        Ok(result) => {
            info!(
                device_id = %result.id,
                return_value = result.return_value,
                "Light set to {}",
                state
            );
            format!("Light set to {}", state)
        }
        Err(e) => {
            error!("Failed to set light {}: {}", state, e);
            REPLY_DEVICE_UNREACHABLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Validation failures short-circuit before any network call, so a
    // client pointed at an unroutable address is safe here.
    fn offline_client() -> ParticleClient {
        ParticleClient::from_parts("http://127.0.0.1:9", "photon-1", "token")
    }

    fn request(body: serde_json::Value) -> WebhookRequest {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_missing_argument_reply() {
        let reply = handle_led_control(&offline_client(), None).await;
        assert_eq!(reply, "I don't understand");
    }

    #[tokio::test]
    async fn test_unrecognized_argument_reply() {
        let reply = handle_led_control(&offline_client(), Some("sideways")).await;
        assert_eq!(reply, "I don't know how to turn the light sideways");
    }

    #[tokio::test]
    async fn test_unknown_action_reply() {
        let request = request(serde_json::json!({
            "result": {"action": "weatherReport", "parameters": {}}
        }));
        let response = handle_webhook(&offline_client(), &request).await;
        assert_eq!(response.speech, "I don't understand");
    }

    #[tokio::test]
    async fn test_empty_parameter_treated_as_missing() {
        let request = request(serde_json::json!({
            "result": {"action": "ledControl", "parameters": {"ledState": ""}}
        }));
        let response = handle_webhook(&offline_client(), &request).await;
        assert_eq!(response.speech, "I don't understand");
    }
}
