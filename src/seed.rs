use anyhow::Context;
use serde::Deserialize;

use crate::{chat::ChatMessage, notification::Notification, ticket::Ticket};

/// Fixtures for the in-memory stores, read from the JSON file named by
/// `SEED_FILE`. Missing sections are empty.
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub chat_messages: Vec<ChatMessage>,
}

impl SeedData {
    pub async fn load(path: &str) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read seed file {}", path))?;

        serde_json::from_str(&raw).with_context(|| format!("invalid seed file {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "maintenance-comms-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_load_full_fixture() {
        let path = write_fixture(
            "full",
            r#"{
                "tickets": [
                    {"id": 5, "title": "Ascensor", "description": null,
                     "status": "abierto", "created_at": "2025-01-10T08:00:00Z"}
                ],
                "notifications": [
                    {"id": 1, "ticket_id": 5, "message": "Ticket #5 abierto",
                     "read": false, "created_at": "2025-01-10T08:00:01Z"}
                ],
                "chat_messages": [
                    {"id": 1, "ticket_id": 5, "sender_name": "Ana",
                     "content": "Revisando", "created_at": "2025-01-10T08:05:00Z"}
                ]
            }"#,
        );

        let seed = SeedData::load(&path).await.unwrap();
        assert_eq!(seed.tickets[0].id, 5);
        assert!(!seed.notifications[0].read);
        assert_eq!(seed.chat_messages[0].sender_name, "Ana");
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_sections_are_empty() {
        let path = write_fixture("partial", r#"{"tickets": []}"#);

        let seed = SeedData::load(&path).await.unwrap();
        assert!(seed.notifications.is_empty());
        assert!(seed.chat_messages.is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_bad_fixture_is_an_error() {
        let path = write_fixture("broken", "{not json");
        let err = SeedData::load(&path).await.unwrap_err();
        assert!(err.to_string().contains("invalid seed file"));
        std::fs::remove_file(path).unwrap();

        assert!(SeedData::load("/nonexistent/seed.json").await.is_err());
    }
}
