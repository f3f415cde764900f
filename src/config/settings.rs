use std::env;

/// Application settings loaded from the environment
#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    /// Backing store connection string
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    /// Load settings from environment variables.
    ///
    /// Every value has a default so a dev instance runs with no environment
    /// at all: a local SQLite file on 0.0.0.0:3000.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://items.db?mode=rwc".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            host,
            port,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
