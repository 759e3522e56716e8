//! Configuration management for the webhook deployments.

use std::env;

use crate::{Error, Result};

/// Default Particle cloud endpoint.
pub const DEFAULT_PARTICLE_API_URL: &str = "https://api.particle.io";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Particle device to control
    pub device_id: String,
    /// Particle access token used to authenticate function calls
    pub access_token: String,
    /// Particle cloud base URL (overridable for local testing)
    pub api_url: String,
    /// Listen port (server variant only)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `PARTICLE_DEVICE_ID` and `PARTICLE_ACCESS_TOKEN` are required so a
    /// misconfigured deployment fails at startup rather than on the first
    /// voice request.
    pub fn from_env() -> Result<Self> {
        let device_id = env::var("PARTICLE_DEVICE_ID")
            .map_err(|_| Error::Config("PARTICLE_DEVICE_ID not set".to_string()))?;
        let access_token = env::var("PARTICLE_ACCESS_TOKEN")
            .map_err(|_| Error::Config("PARTICLE_ACCESS_TOKEN not set".to_string()))?;
        let api_url =
            env::var("PARTICLE_API_URL").unwrap_or_else(|_| DEFAULT_PARTICLE_API_URL.to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT value: {}", value)))?,
            Err(_) => 3000,
        };

        Ok(Self {
            device_id,
            access_token,
            api_url,
            port,
        })
    }
}
