use axum::{middleware, routing::get, Router};

use super::chat_handlers::{chat_page, ticket_chat_history, ticket_chat_page};
use crate::{
    middleware::{auth_middleware, page_auth_middleware},
    state::AppState,
};

pub fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/chat", get(chat_page))
        .route("/chat/ticket/:ticket_id", get(ticket_chat_page))
        .route_layer(middleware::from_fn_with_state(state, page_auth_middleware))
}

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/chat/ticket/:ticket_id/mensajes", get(ticket_chat_history))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
