use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handlers;
mod password;
pub mod services;
pub mod store;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::account_routes())
        .merge(handlers::admin_routes())
}
