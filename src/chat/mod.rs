pub mod chat_handlers;
pub mod chat_models;
pub mod chat_repository;
pub mod memory_repository;
pub mod routes;

pub use chat_models::ChatMessage;
pub use chat_repository::{ChatMessageRepository, PgChatMessageRepository};
pub use memory_repository::InMemoryChatMessageRepository;
