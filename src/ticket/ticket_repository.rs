use async_trait::async_trait;
use sqlx::PgPool;

use super::ticket_models::Ticket;
use crate::error::Result;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Ticket>>;
}

#[derive(Clone)]
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Ticket>> {
        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM mantenimientos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ticket)
    }
}
