use crate::{
    chat::{self, chat_handlers, ChatMessage},
    notification::{
        self, notification_handlers, MarkReadResponse, NotificationDto,
        UnreadNotificationsResponse,
    },
    state::AppState,
    ticket::Ticket,
};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        chat_handlers::chat_page,
        chat_handlers::ticket_chat_page,
        chat_handlers::ticket_chat_history,
        notification_handlers::notifications_page,
        notification_handlers::unread_notifications,
        notification_handlers::mark_notification_read,
    ),
    components(
        schemas(
            ChatMessage,
            Ticket,
            NotificationDto,
            UnreadNotificationsResponse,
            MarkReadResponse,
        )
    ),
    tags(
        (name = "chat", description = "Chat pages and history"),
        (name = "notifications", description = "Notification endpoints")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            )
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // JSON endpoints (401 when not logged in)
    let api_routes = Router::new()
        .merge(notification::routes::api_routes(state.clone()))
        .merge(chat::routes::api_routes(state.clone()));

    // HTML pages (redirect to login when not logged in)
    let comunicacion_routes = Router::new()
        .merge(chat::routes::page_routes(state.clone()))
        .merge(notification::routes::page_routes(state.clone()))
        .nest("/api", api_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest("/comunicacion", comunicacion_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
