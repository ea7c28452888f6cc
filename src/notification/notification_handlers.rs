use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

use super::notification_dto::{MarkReadResponse, NotificationDto, UnreadNotificationsResponse};
use crate::{error::Result, middleware::Caller, state::AppState, views::View};

/// Page listing every notification (admin only)
#[utoipa::path(
    get,
    path = "/comunicacion/notificaciones",
    responses(
        (status = 200, description = "Notification list page"),
        (status = 303, description = "Not logged in, redirected to login"),
        (status = 403, description = "Caller is not an administrator")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn notifications_page(State(state): State<AppState>) -> Result<Html<String>> {
    let notificaciones: Vec<NotificationDto> = state
        .notification_service
        .list_all()
        .await?
        .into_iter()
        .map(NotificationDto::from)
        .collect();

    let view = View::new("notificaciones.html", "Notificaciones")
        .with("notificaciones", notificaciones)?;

    state.renderer.render(&view)
}

/// Unread notifications. Non-admin callers always get an empty list.
#[utoipa::path(
    get,
    path = "/comunicacion/api/notificaciones/no-leidas",
    responses(
        (status = 200, description = "Unread notifications", body = UnreadNotificationsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn unread_notifications(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Result<Json<UnreadNotificationsResponse>> {
    let unread = state.notification_service.list_unread(&caller).await?;

    Ok(Json(unread))
}

/// Mark a notification as read (admin only)
#[utoipa::path(
    post,
    path = "/comunicacion/api/notificaciones/{id}/marcar-leida",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = MarkReadResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Permiso denegado"),
        (status = 404, description = "Notificación no encontrada")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(notification_id): Path<i64>,
) -> Result<Json<MarkReadResponse>> {
    if let Err(e) = state
        .notification_service
        .mark_read(&caller, notification_id)
        .await
    {
        tracing::warn!(
            user_id = %caller.user_id,
            notification_id,
            "Mark read rejected: {}",
            e
        );
        return Err(e);
    }

    tracing::info!(user_id = %caller.user_id, notification_id, "Notification marked as read");

    Ok(Json(MarkReadResponse { success: true }))
}
