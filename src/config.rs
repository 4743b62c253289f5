//! Configuration for CompanyStore
//!
//! Provides a builder pattern for configuring the store, plus loading from
//! environment variables.

/// Default MySQL connection URL used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "mysql://root@localhost:3306/company";

/// Default name of the company table
pub const DEFAULT_COMPANY_TABLE: &str = "company";

/// Default size of the connection pool
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration for the company store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MySQL database URL
    pub database_url: String,
    /// Name of the company table (default: "company")
    pub company_table: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl StoreConfig {
    /// Create a new configuration builder
    pub fn builder(database_url: impl Into<String>) -> StoreConfigBuilder {
        StoreConfigBuilder::new(database_url)
    }

    /// Load configuration from the process environment
    ///
    /// Reads `DATABASE_URL`, `COMPANY_TABLE` and `DATABASE_MAX_CONNECTIONS`.
    /// Unset or empty variables fall back to the defaults, as does a
    /// connection count that does not parse.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_connections = env_or(&lookup, "DATABASE_MAX_CONNECTIONS", "")
            .parse()
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        StoreConfigBuilder::new(env_or(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL))
            .company_table(env_or(&lookup, "COMPANY_TABLE", DEFAULT_COMPANY_TABLE))
            .max_connections(max_connections)
            .build()
    }
}

/// Look up `key`, returning `default` when it is unset or empty
pub fn env_or(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Builder for StoreConfig
#[derive(Debug)]
pub struct StoreConfigBuilder {
    database_url: String,
    company_table: String,
    max_connections: u32,
}

impl StoreConfigBuilder {
    /// Create a new builder with the database URL
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            company_table: DEFAULT_COMPANY_TABLE.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Set the company table name (default: "company")
    pub fn company_table(mut self, name: impl Into<String>) -> Self {
        self.company_table = name.into();
        self
    }

    /// Set the maximum pool size (default: 5)
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Build the configuration
    pub fn build(self) -> StoreConfig {
        StoreConfig {
            database_url: self.database_url,
            company_table: self.company_table,
            max_connections: self.max_connections,
        }
    }
}
