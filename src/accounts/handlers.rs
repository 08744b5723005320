use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    accounts::{
        dto::{Envelope, ErrorMessage, LoginRequest, SignupRequest},
        error::AccountError,
        store::User,
    },
    state::AppState,
};

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users))
}

// The handlers are the sole translation from flow outcomes to wire status
// codes: user-correctable failures map to 400 with the flow's message
// verbatim, infrastructure failures to 500 with a generic message.

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> (StatusCode, Json<Envelope>) {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("signup rejected: missing email or password");
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::fail("Email and password are required.")),
        );
    }

    match state
        .accounts
        .register(payload.username, &payload.email, &payload.password)
        .await
    {
        Ok(identity) => {
            info!(email = %identity.email, "user registered");
            let message = format!("User with the {} registered successfully!", identity.email);
            (StatusCode::CREATED, Json(Envelope::ok(message, identity)))
        }
        Err(AccountError::StorageUnavailable(detail)) => {
            error!(error = %detail, "signup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::fail(
                    "Something went wrong during registration, please try again later!",
                )),
            )
        }
        Err(err) => {
            warn!(email = %payload.email, error = %err, "signup rejected");
            (StatusCode::BAD_REQUEST, Json(Envelope::fail(err.to_string())))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> (StatusCode, Json<Envelope>) {
    match state
        .accounts
        .authenticate(&payload.email, &payload.password)
        .await
    {
        Ok(identity) => {
            info!(email = %identity.email, "user logged in");
            let message = format!("User with the {} logged in successfully!", identity.email);
            (StatusCode::CREATED, Json(Envelope::ok(message, identity)))
        }
        Err(AccountError::StorageUnavailable(detail)) => {
            error!(error = %detail, "login failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::fail(
                    "Something went wrong during login, please try again later!",
                )),
            )
        }
        Err(err) => {
            warn!(email = %payload.email, error = %err, "login rejected");
            (StatusCode::BAD_REQUEST, Json(Envelope::fail(err.to_string())))
        }
    }
}

/// Administrative listing of every user record. No filtering, pagination, or
/// access control; password hashes are stripped by serialization.
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, Json<ErrorMessage>)> {
    match state.accounts.list_accounts().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => {
            error!(error = %e, "list users failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorMessage {
                    message: "Server error".to_string(),
                }),
            ))
        }
    }
}
