pub mod memory_repository;
pub mod notification_dto;
pub mod notification_handlers;
pub mod notification_models;
pub mod notification_repository;
pub mod notification_service;
pub mod routes;

pub use memory_repository::InMemoryNotificationRepository;
pub use notification_dto::{MarkReadResponse, NotificationDto, UnreadNotificationsResponse};
pub use notification_models::Notification;
pub use notification_repository::{NotificationRepository, PgNotificationRepository};
pub use notification_service::NotificationService;
