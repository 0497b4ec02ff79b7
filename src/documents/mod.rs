use crate::{config::AppConfig, state::AppState};
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod registry;
pub mod upload;

pub fn router(config: &AppConfig) -> Router<AppState> {
    handlers::document_routes(config)
}
