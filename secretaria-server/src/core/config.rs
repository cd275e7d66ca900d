/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (cache, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | REMOTE_DB_URL | (empty) | Relational backend base URL |
/// | REMOTE_DB_KEY | (empty) | Relational backend API key |
/// | SHEET_MEMBERS_URL | (empty) | Member spreadsheet endpoint |
/// | SHEET_MEMBERS_TOKEN | (empty) | Member spreadsheet bearer token |
/// | SHEET_CHURCHES_URL | (empty) | Church spreadsheet endpoint |
/// | SHEET_CHURCHES_TOKEN | (empty) | Church spreadsheet bearer token |
///
/// Empty backend credentials are allowed: the server starts in offline mode
/// and serves the cached (or seed) data.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the cache database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    /// Relational backend base URL
    pub remote_db_url: String,
    /// Relational backend API key
    pub remote_db_key: String,
    /// Default spreadsheet endpoints, overridable from the settings screen
    pub sheet_members_url: String,
    pub sheet_members_token: String,
    pub sheet_churches_url: String,
    pub sheet_churches_token: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            remote_db_url: std::env::var("REMOTE_DB_URL").unwrap_or_default(),
            remote_db_key: std::env::var("REMOTE_DB_KEY").unwrap_or_default(),
            sheet_members_url: std::env::var("SHEET_MEMBERS_URL").unwrap_or_default(),
            sheet_members_token: std::env::var("SHEET_MEMBERS_TOKEN").unwrap_or_default(),
            sheet_churches_url: std::env::var("SHEET_CHURCHES_URL").unwrap_or_default(),
            sheet_churches_token: std::env::var("SHEET_CHURCHES_TOKEN").unwrap_or_default(),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
