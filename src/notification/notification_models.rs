use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: i64,
    pub ticket_id: Option<i64>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// `read` only ever goes from false to true.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_read_is_monotonic() {
        let mut notification = Notification {
            id: 1,
            ticket_id: None,
            message: "Nuevo ticket".to_string(),
            read: false,
            created_at: Utc::now(),
        };

        notification.mark_read();
        let once = notification.clone();
        notification.mark_read();

        assert!(notification.read);
        assert_eq!(notification, once);
    }
}
