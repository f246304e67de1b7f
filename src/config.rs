use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend `{}`", other)),
        }
    }
}

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub test_database_url: String,
    pub test_database_name: String,
    pub store_backend: StoreBackend,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            host: var_or("HOST", "localhost"),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database_url: var_or("DATABASE_URL", "mongodb://localhost:27017"),
            database_name: var_or("DATABASE_NAME", "blog_api"),
            test_database_url: var_or("TEST_DATABASE_URL", "mongodb://localhost:27017"),
            test_database_name: var_or("TEST_DATABASE_NAME", "blog_api_test"),
            store_backend: lookup("STORE_BACKEND")
                .and_then(|b| b.parse().ok())
                .unwrap_or(StoreBackend::Mongo),
        }
    }
}
