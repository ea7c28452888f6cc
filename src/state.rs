use std::sync::Arc;

use thiserror::Error;

use crate::{
    chat::ChatMessageRepository,
    notification::{NotificationRepository, NotificationService},
    ticket::TicketRepository,
    views::{ShellRenderer, TemplateRenderer},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notification_service: NotificationService,
    pub ticket_repository: Arc<dyn TicketRepository>,
    pub chat_repository: Arc<dyn ChatMessageRepository>,
    pub renderer: Arc<dyn TemplateRenderer>,
}

impl AppState {
    pub fn new(
        config: Config,
        notification_repository: Arc<dyn NotificationRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        chat_repository: Arc<dyn ChatMessageRepository>,
    ) -> Self {
        let notification_service =
            NotificationService::new(notification_repository, &config.admin_role);

        Self {
            config: Arc::new(config),
            notification_service,
            ticket_repository,
            chat_repository,
            renderer: Arc::new(ShellRenderer),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("{name} must be at least 1, got {value}")]
    OutOfRange { name: &'static str, value: i64 },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub login_url: String,
    pub admin_role: String,
    pub chat_history_limit: i64,
    /// JSON fixtures loaded into the in-memory stores.
    pub seed_file: Option<String>,
}

impl Config {
    /// Defaults for everything except the signing secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            database_url: None,
            host: "127.0.0.1".to_string(),
            port: 3000,
            login_url: "/auth/login".to_string(),
            admin_role: "admin".to_string(),
            chat_history_limit: 100,
            seed_file: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        let mut config = Self::new(jwt_secret);

        config.database_url = std::env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Some(port) = parse_var("PORT")? {
            config.port = port;
        }
        if let Ok(login_url) = std::env::var("LOGIN_URL") {
            config.login_url = login_url;
        }
        if let Ok(admin_role) = std::env::var("ADMIN_ROLE") {
            config.admin_role = admin_role;
        }
        if let Some(limit) = parse_positive_var("CHAT_HISTORY_LIMIT")? {
            config.chat_history_limit = limit;
        }
        config.seed_file = std::env::var("SEED_FILE").ok().filter(|path| !path.is_empty());

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::NotANumber { name, value }),
        Err(_) => Ok(None),
    }
}

/// Used for SQL `LIMIT` values, which Postgres rejects when negative.
fn parse_positive_var(name: &'static str) -> Result<Option<i64>, ConfigError> {
    match parse_var::<i64>(name)? {
        Some(value) if value < 1 => Err(ConfigError::OutOfRange { name, value }),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("secret");
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.admin_role, "admin");
        assert_eq!(config.login_url, "/auth/login");
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        std::env::set_var("MAINTENANCE_COMMS_TEST_PORT", "not-a-port");
        let err = parse_var::<u16>("MAINTENANCE_COMMS_TEST_PORT").unwrap_err();
        assert!(matches!(err, ConfigError::NotANumber { .. }));
        std::env::remove_var("MAINTENANCE_COMMS_TEST_PORT");
    }

    #[test]
    fn test_history_limit_below_one_is_rejected() {
        for bad in ["-5", "0"] {
            std::env::set_var("MAINTENANCE_COMMS_TEST_LIMIT", bad);
            let err = parse_positive_var("MAINTENANCE_COMMS_TEST_LIMIT").unwrap_err();
            assert!(matches!(err, ConfigError::OutOfRange { value, .. } if value < 1));
        }

        std::env::set_var("MAINTENANCE_COMMS_TEST_LIMIT", "25");
        let limit = parse_positive_var("MAINTENANCE_COMMS_TEST_LIMIT").unwrap();
        assert_eq!(limit, Some(25));
        std::env::remove_var("MAINTENANCE_COMMS_TEST_LIMIT");
    }

    #[test]
    fn test_parse_var_absent() {
        let value = parse_var::<i64>("MAINTENANCE_COMMS_TEST_UNSET").unwrap();
        assert!(value.is_none());
    }
}
