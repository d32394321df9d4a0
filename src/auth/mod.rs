use axum::Router;

use crate::state::AppState;

mod claims;
mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod services;

pub use extractors::{CurrentUser, Identity};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
