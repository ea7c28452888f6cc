use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{chat_models::ChatMessage, chat_repository::ChatMessageRepository};
use crate::error::Result;

#[derive(Default)]
pub struct InMemoryChatMessageRepository {
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryChatMessageRepository {
    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages: RwLock::new(messages),
        }
    }
}

#[async_trait]
impl ChatMessageRepository for InMemoryChatMessageRepository {
    async fn find_by_ticket(&self, ticket_id: i64, limit: i64) -> Result<Vec<ChatMessage>> {
        let messages = self.messages.read().await;
        let for_ticket: Vec<ChatMessage> = messages
            .iter()
            .filter(|m| m.ticket_id == Some(ticket_id))
            .cloned()
            .collect();

        let skip = for_ticket.len().saturating_sub(limit.max(0) as usize);
        Ok(for_ticket.into_iter().skip(skip).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message(id: i64, ticket_id: Option<i64>, content: &str) -> ChatMessage {
        ChatMessage {
            id,
            ticket_id,
            sender_name: "Ana".to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_by_ticket_keeps_latest_oldest_first() {
        let mut messages: Vec<ChatMessage> = (1..=5)
            .map(|i| message(i, Some(3), &format!("mensaje {}", i)))
            .collect();
        messages.push(message(6, Some(4), "otro ticket"));
        messages.push(message(7, None, "general"));
        let repo = InMemoryChatMessageRepository::with_messages(messages);

        let history = repo.find_by_ticket(3, 2).await.unwrap();
        let contents: Vec<&str> = history.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["mensaje 4", "mensaje 5"]);

        assert_eq!(repo.find_by_ticket(3, 100).await.unwrap().len(), 5);
        assert!(repo.find_by_ticket(99, 10).await.unwrap().is_empty());
    }
}
