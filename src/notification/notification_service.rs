use std::sync::Arc;

use super::{
    notification_dto::UnreadNotificationsResponse, notification_models::Notification,
    notification_repository::NotificationRepository,
};
use crate::{
    auth::HasRole,
    error::{AppError, Result},
};

/// Role-gated access to the notification store.
///
/// The two read paths deny differently on purpose: `list_unread` answers an
/// unprivileged caller with an empty result, while `list_all` is only mounted
/// behind the admin gate and never sees one.
#[derive(Clone)]
pub struct NotificationService {
    repo: Arc<dyn NotificationRepository>,
    admin_role: Arc<str>,
}

impl NotificationService {
    pub fn new(repo: Arc<dyn NotificationRepository>, admin_role: &str) -> Self {
        Self {
            repo,
            admin_role: Arc::from(admin_role),
        }
    }

    pub fn is_privileged<C: HasRole + ?Sized>(&self, caller: &C) -> bool {
        caller.has_role(&self.admin_role)
    }

    /// Unread notifications for privileged callers, an empty result for
    /// everyone else.
    pub async fn list_unread<C: HasRole + ?Sized>(
        &self,
        caller: &C,
    ) -> Result<UnreadNotificationsResponse> {
        if !self.is_privileged(caller) {
            return Ok(UnreadNotificationsResponse::empty());
        }

        let unread = self.repo.get_unread().await?;
        Ok(UnreadNotificationsResponse::from(unread))
    }

    /// Callers are checked by `require_admin` before reaching this.
    pub async fn list_all(&self) -> Result<Vec<Notification>> {
        self.repo.get_all().await
    }

    pub async fn mark_read<C: HasRole + ?Sized>(&self, caller: &C, id: i64) -> Result<()> {
        if !self.is_privileged(caller) {
            return Err(AppError::permission_denied());
        }

        let notification = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(AppError::notification_not_found)?;

        if notification.read {
            return Ok(());
        }

        // The row can disappear between the lookup and the update.
        if !self.repo.mark_read(id).await? {
            return Err(AppError::notification_not_found());
        }

        Ok(())
    }
}
