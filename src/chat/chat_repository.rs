use async_trait::async_trait;
use sqlx::PgPool;

use super::chat_models::ChatMessage;
use crate::error::Result;

/// Chat persistence. Messages are written by the real-time channel; the HTTP
/// layer only reads history.
#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    /// The latest `limit` messages of a ticket, oldest first.
    async fn find_by_ticket(&self, ticket_id: i64, limit: i64) -> Result<Vec<ChatMessage>>;
}

#[derive(Clone)]
pub struct PgChatMessageRepository {
    pool: PgPool,
}

impl PgChatMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatMessageRepository for PgChatMessageRepository {
    async fn find_by_ticket(&self, ticket_id: i64, limit: i64) -> Result<Vec<ChatMessage>> {
        let mut messages = sqlx::query_as::<_, ChatMessage>(
            "SELECT * FROM chat_messages
             WHERE ticket_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2",
        )
        .bind(ticket_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        messages.reverse();
        Ok(messages)
    }
}
