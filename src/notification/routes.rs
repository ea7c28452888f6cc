use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::notification_handlers::{
    mark_notification_read, notifications_page, unread_notifications,
};
use crate::{
    admin::require_admin,
    middleware::{auth_middleware, page_auth_middleware},
    state::AppState,
};

pub fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/notificaciones", get(notifications_page))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state, page_auth_middleware))
}

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/notificaciones/no-leidas", get(unread_notifications))
        .route("/notificaciones/:id/marcar-leida", post(mark_notification_read))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
