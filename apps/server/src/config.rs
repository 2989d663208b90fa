//! Server configuration, sourced from `FOLIO_*` environment variables.

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// HS256 secret shared with the identity provider that issues tokens.
    pub auth_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("FOLIO_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8425".to_string()),
            db_path: std::env::var("FOLIO_DB_PATH").unwrap_or_else(|_| "folio.db".to_string()),
            auth_secret: std::env::var("FOLIO_AUTH_SECRET").unwrap_or_default(),
        }
    }
}
