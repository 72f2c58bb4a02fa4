//! Fetch state machine
//!
//! One value per hook instance. `Idle -> Loading -> Success | Failed`; once
//! settled the state is terminal for that mount.

use serde_json::Value;

use crate::error::{FetchError, Result};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Value),
    Failed(FetchError),
}

impl FetchState {
    /// Idle -> Loading. Returns whether the transition happened.
    pub fn begin(&mut self) -> bool {
        match self {
            FetchState::Idle => {
                *self = FetchState::Loading;
                true
            }
            _ => false,
        }
    }

    /// Loading -> Success | Failed. Returns whether the transition happened.
    pub fn settle(&mut self, result: Result<Value>) -> bool {
        match self {
            FetchState::Loading => {
                *self = match result {
                    Ok(payload) => FetchState::Success(payload),
                    Err(err) => FetchState::Failed(err),
                };
                true
            }
            _ => false,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Failed(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            FetchState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Empty when there is no error.
    pub fn error_message(&self) -> String {
        self.error().map(ToString::to_string).unwrap_or_default()
    }

    pub fn body(&self) -> BodyContent {
        match self {
            FetchState::Idle | FetchState::Loading => BodyContent::Loading,
            FetchState::Success(payload) => BodyContent::Payload(payload.to_string()),
            FetchState::Failed(err) => BodyContent::Error(err.to_string()),
        }
    }
}

/// What a page body region shows for a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyContent {
    Loading,
    /// Compact JSON text of the payload
    Payload(String),
    Error(String),
}
