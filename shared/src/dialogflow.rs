//! Dialogflow v1 webhook envelope types.
//!
//! Only the fields the handler actually reads are modeled; the rest of the
//! envelope passes through untouched. The response shape mirrors what the
//! assistant SDK's `tell()` emits: a spoken string plus display text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The Dialogflow action this webhook fulfills.
pub const LED_CONTROL_ACTION: &str = "ledControl";

/// Name of the intent argument carrying the requested state.
pub const LED_STATE_ARGUMENT: &str = "ledState";

/// Inbound webhook request from Dialogflow.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    /// Request id, if Dialogflow supplied one
    pub id: Option<String>,
    /// Parsed intent result
    pub result: IntentResult,
}

/// The parsed-intent portion of the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResult {
    /// Action name configured on the intent
    pub action: Option<String>,
    /// Extracted intent parameters
    #[serde(default)]
    pub parameters: HashMap<String, Value>,
    /// The user's raw utterance
    pub resolved_query: Option<String>,
}

impl WebhookRequest {
    /// Look up a string argument by name.
    ///
    /// Dialogflow fills unset parameters with an empty string, which counts
    /// as absent here.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.result
            .parameters
            .get(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Outbound webhook response sent back to Dialogflow.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Text the assistant speaks
    pub speech: String,
    /// Text shown on devices with a display
    pub display_text: String,
    /// Identifies this fulfillment backend
    pub source: String,
}

impl WebhookResponse {
    /// Build a response that speaks and displays the same text.
    pub fn tell(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            speech: text.clone(),
            display_text: text,
            source: "led-webhook".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(parameters: Value) -> WebhookRequest {
        serde_json::from_value(serde_json::json!({
            "id": "8b0891c1-5b0c-4d3d-9a5e-0a1b2c3d4e5f",
            "result": {
                "action": "ledControl",
                "resolvedQuery": "turn the light on",
                "parameters": parameters,
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_argument_extraction() {
        let request = sample_request(serde_json::json!({"ledState": "on"}));
        assert_eq!(request.argument(LED_STATE_ARGUMENT), Some("on"));
        assert_eq!(request.result.action.as_deref(), Some(LED_CONTROL_ACTION));
    }

    #[test]
    fn test_empty_argument_is_absent() {
        let request = sample_request(serde_json::json!({"ledState": ""}));
        assert_eq!(request.argument(LED_STATE_ARGUMENT), None);
    }

    #[test]
    fn test_missing_parameters_block() {
        let request: WebhookRequest = serde_json::from_value(serde_json::json!({
            "result": {"action": "ledControl"}
        }))
        .unwrap();
        assert_eq!(request.argument(LED_STATE_ARGUMENT), None);
        assert!(request.id.is_none());
    }

    #[test]
    fn test_non_string_argument_is_absent() {
        let request = sample_request(serde_json::json!({"ledState": 1}));
        assert_eq!(request.argument(LED_STATE_ARGUMENT), None);
    }

    #[test]
    fn test_response_wire_format() {
        let response = WebhookResponse::tell("Light set to on");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["speech"], "Light set to on");
        assert_eq!(json["displayText"], "Light set to on");
        assert_eq!(json["source"], "led-webhook");
    }
}
