//! Environment-driven settings for server wiring.

use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub database_url: String,
    /// Origin the link builder embeds in every `_links` entry.
    pub public_base_url: String,
}

impl Settings {
    /// Read settings from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/airports".into());
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://{}", bind_addr));
        Settings {
            bind_addr,
            database_url,
            public_base_url,
        }
    }
}
