use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{notification_models::Notification, notification_repository::NotificationRepository};
use crate::error::Result;

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct InMemoryNotificationRepository {
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: RwLock::new(notifications),
        }
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn get_all(&self) -> Result<Vec<Notification>> {
        Ok(self.notifications.read().await.clone())
    }

    async fn get_unread(&self) -> Result<Vec<Notification>> {
        let notifications = self.notifications.read().await;
        Ok(notifications.iter().filter(|n| !n.read).cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Notification>> {
        let notifications = self.notifications.read().await;
        Ok(notifications.iter().find(|n| n.id == id).cloned())
    }

    async fn mark_read(&self, id: i64) -> Result<bool> {
        let mut notifications = self.notifications.write().await;
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.mark_read();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn notification(id: i64, ticket_id: Option<i64>, message: &str) -> Notification {
        Notification {
            id,
            ticket_id,
            message: message.to_string(),
            read: false,
            created_at: Utc::now(),
        }
    }

    async fn seeded() -> InMemoryNotificationRepository {
        InMemoryNotificationRepository::with_notifications(vec![
            notification(1, Some(7), "Ticket #7 abierto"),
            notification(2, None, "Mantenimiento programado"),
            notification(3, Some(9), "Ticket #9 cerrado"),
        ])
    }

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order() {
        let repo = seeded().await;
        let ids: Vec<i64> = repo.get_all().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_unread_is_filtered_subset_of_all() {
        let repo = seeded().await;
        repo.mark_read(2).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let unread = repo.get_unread().await.unwrap();

        assert_eq!(unread.len(), 2);
        assert!(unread.iter().all(|n| !n.read));
        let expected: Vec<_> = all.into_iter().filter(|n| !n.read).collect();
        assert_eq!(unread, expected);
    }

    #[tokio::test]
    async fn test_mark_read_is_idempotent() {
        let repo = seeded().await;

        assert!(repo.mark_read(1).await.unwrap());
        let once = repo.get_all().await.unwrap();
        assert!(repo.mark_read(1).await.unwrap());
        let twice = repo.get_all().await.unwrap();

        assert_eq!(once, twice);
        assert!(repo.get_by_id(1).await.unwrap().unwrap().read);
    }

    #[tokio::test]
    async fn test_mark_read_missing_id_changes_nothing() {
        let repo = seeded().await;
        let before = repo.get_all().await.unwrap();

        assert!(!repo.mark_read(99).await.unwrap());
        assert_eq!(repo.get_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let repo = seeded().await;
        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }
}
