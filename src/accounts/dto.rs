use serde::{Deserialize, Serialize};

/// Request body for sign-up. Missing fields deserialize as empty so the
/// handler's presence check owns the rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Non-secret subset of a user echoed back on success.
#[derive(Debug, Serialize)]
pub struct Identity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
}

/// JSON wrapper returned by the sign-up and login endpoints. Failure
/// envelopes carry no `data` key at all.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Identity>,
}

impl Envelope {
    pub fn ok(message: impl Into<String>, data: Identity) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Body returned by the administrative listing on failure.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}
