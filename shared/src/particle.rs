//! Particle cloud client for invoking remote device functions.

use serde::Deserialize;
use tracing::{debug, error};

use crate::command::LedState;
use crate::config::Config;
use crate::{Error, Result};

/// Name of the remote function registered on the device.
const LED_FUNCTION: &str = "led";

/// Result of a Particle function call.
#[derive(Debug, Deserialize)]
pub struct FunctionResponse {
    /// Device id the function ran on
    pub id: String,
    /// Function name, echoed back by some firmware versions
    #[serde(default)]
    pub name: Option<String>,
    /// Integer returned by the device function
    pub return_value: i64,
    /// Whether the device was connected to the cloud
    pub connected: bool,
}

/// Client for calling functions on a single registered device.
pub struct ParticleClient {
    http: reqwest::Client,
    base_url: String,
    device_id: String,
    access_token: String,
}

impl ParticleClient {
    /// Create a client from loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self::from_parts(&config.api_url, &config.device_id, &config.access_token)
    }

    /// Create a client from explicit parts.
    pub fn from_parts(base_url: &str, device_id: &str, access_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            device_id: device_id.to_string(),
            access_token: access_token.to_string(),
        }
    }

    fn function_url(&self, name: &str) -> String {
        format!("{}/v1/devices/{}/{}", self.base_url, self.device_id, name)
    }

    /// Call a named remote function on the device.
    ///
    /// One authenticated POST, awaited to completion; no retry and no
    /// timeout beyond the client defaults.
    pub async fn call_function(&self, name: &str, argument: &str) -> Result<FunctionResponse> {
        let url = self.function_url(name);
        debug!("Calling Particle function {} with arg '{}'", name, argument);

        let response = self
            .http
            .post(&url)
            .form(&[("arg", argument), ("access_token", &self.access_token)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Particle function call failed: {} - {}", status, body);
            return Err(Error::Particle(format!("{}: {}", status, body)));
        }

        let result: FunctionResponse = response.json().await?;
        debug!(
            "Particle function {} returned {} (connected: {})",
            name, result.return_value, result.connected
        );
        Ok(result)
    }

    /// Set the LED to the requested state.
    pub async fn set_led(&self, state: LedState) -> Result<FunctionResponse> {
        self.call_function(LED_FUNCTION, state.as_str()).await
    }
}
