use async_trait::async_trait;
use sqlx::PgPool;

use super::notification_models::Notification;
use crate::error::Result;

/// Backing store for notifications. Rows are created by other parts of the
/// maintenance system; this service only reads them and flips `read`.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Every notification, in insertion order.
    async fn get_all(&self) -> Result<Vec<Notification>>;

    async fn get_unread(&self) -> Result<Vec<Notification>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Notification>>;

    /// Sets `read = true`. Returns whether `id` existed; an already read
    /// notification still counts as success.
    async fn mark_read(&self, id: i64) -> Result<bool>;
}

#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn get_all(&self) -> Result<Vec<Notification>> {
        let notifications =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(notifications)
    }

    async fn get_unread(&self) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE read = false ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Notification>> {
        let notification =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(notification)
    }

    async fn mark_read(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE notifications SET read = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
