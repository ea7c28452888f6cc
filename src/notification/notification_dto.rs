use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::notification_models::Notification;

/// Wire shape of a notification for the browser client.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NotificationDto {
    pub id: i64,
    pub ticket_id: Option<i64>,
    pub mensaje: String,
    pub leida: bool,
    pub fecha_creacion: DateTime<Utc>,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            ticket_id: notification.ticket_id,
            mensaje: notification.message,
            leida: notification.read,
            fecha_creacion: notification.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UnreadNotificationsResponse {
    pub count: usize,
    pub notificaciones: Vec<NotificationDto>,
}

impl UnreadNotificationsResponse {
    pub fn empty() -> Self {
        Self {
            count: 0,
            notificaciones: Vec::new(),
        }
    }
}

impl From<Vec<Notification>> for UnreadNotificationsResponse {
    fn from(notifications: Vec<Notification>) -> Self {
        let notificaciones: Vec<NotificationDto> =
            notifications.into_iter().map(NotificationDto::from).collect();

        Self {
            count: notificaciones.len(),
            notificaciones,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkReadResponse {
    pub success: bool,
}
