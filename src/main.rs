mod admin;
mod auth;
mod chat;
mod db;
mod error;
mod middleware;
mod notification;
mod routes;
mod seed;
mod state;
mod ticket;
mod views;

use chat::{InMemoryChatMessageRepository, PgChatMessageRepository};
use db::{create_pool, run_migrations};
use notification::{InMemoryNotificationRepository, PgNotificationRepository};
use routes::create_router;
use seed::SeedData;
use state::{AppState, Config};
use std::sync::Arc;
use ticket::{InMemoryTicketRepository, PgTicketRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,maintenance_comms=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let addr = config.bind_addr();

    let state = match config.database_url.clone() {
        Some(database_url) => {
            if config.seed_file.is_some() {
                tracing::warn!("SEED_FILE is ignored when DATABASE_URL is set");
            }

            tracing::info!("Connecting to database...");
            let db = create_pool(&database_url).await?;

            tracing::info!("Running migrations...");
            run_migrations(&db).await?;

            AppState::new(
                config,
                Arc::new(PgNotificationRepository::new(db.clone())),
                Arc::new(PgTicketRepository::new(db.clone())),
                Arc::new(PgChatMessageRepository::new(db)),
            )
        }
        None => {
            let seed = match config.seed_file.as_deref() {
                Some(path) => SeedData::load(path).await?,
                None => SeedData::default(),
            };
            tracing::warn!(
                tickets = seed.tickets.len(),
                notifications = seed.notifications.len(),
                chat_messages = seed.chat_messages.len(),
                "DATABASE_URL not set, using in-memory stores; they hold only what SEED_FILE provides and are lost on restart"
            );

            AppState::new(
                config,
                Arc::new(InMemoryNotificationRepository::with_notifications(seed.notifications)),
                Arc::new(InMemoryTicketRepository::with_tickets(seed.tickets)),
                Arc::new(InMemoryChatMessageRepository::with_messages(seed.chat_messages)),
            )
        }
    };

    // Create router
    let app = create_router(state);

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
