use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A chat line. `ticket_id` is `None` for the general room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChatMessage {
    pub id: i64,
    pub ticket_id: Option<i64>,
    pub sender_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
