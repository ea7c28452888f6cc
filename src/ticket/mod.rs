pub mod memory_repository;
pub mod ticket_models;
pub mod ticket_repository;

pub use memory_repository::InMemoryTicketRepository;
pub use ticket_models::Ticket;
pub use ticket_repository::{PgTicketRepository, TicketRepository};
