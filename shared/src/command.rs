//! Validation of the requested LED state.

use std::fmt;

/// The two states the LED's remote function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
}

impl LedState {
    /// The wire form of the state, as passed to the device function.
    pub fn as_str(&self) -> &'static str {
        match self {
            LedState::On => "on",
            LedState::Off => "off",
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating the `ledState` argument from the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A recognized command, ready to forward to the device
    Command(LedState),
    /// No argument was supplied
    Missing,
    /// An argument was supplied but is not a known state
    Unrecognized(String),
}

impl CommandOutcome {
    /// Validate the raw argument extracted from the webhook request.
    ///
    /// Dialogflow sends an empty string for parameters the user never
    /// filled, so empty counts as missing.
    pub fn from_argument(argument: Option<&str>) -> Self {
        match argument {
            None => CommandOutcome::Missing,
            Some("") => CommandOutcome::Missing,
            Some("on") => CommandOutcome::Command(LedState::On),
            Some("off") => CommandOutcome::Command(LedState::Off),
            Some(other) => CommandOutcome::Unrecognized(other.to_string()),
        }
    }
}
