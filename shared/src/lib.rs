//! Shared library for the LED webhook deployments.
//!
//! Both the Lambda and server variants use the same pipeline: parse the
//! Dialogflow envelope, validate the requested LED state, forward it to the
//! Particle cloud, and phrase the reply.

pub mod command;
pub mod config;
pub mod dialogflow;
pub mod error;
pub mod http;
pub mod particle;
pub mod webhook;

pub use command::{CommandOutcome, LedState};
pub use config::Config;
pub use dialogflow::{WebhookRequest, WebhookResponse, LED_CONTROL_ACTION, LED_STATE_ARGUMENT};
pub use error::{Error, Result};
pub use particle::{FunctionResponse, ParticleClient};
pub use webhook::{handle_webhook, REPLY_DEVICE_UNREACHABLE, REPLY_MISSING};
