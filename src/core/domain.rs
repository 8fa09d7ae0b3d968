use std::env;
use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_BOOKS_FILE: &str = "books.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_LOOKUP_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub books_file: PathBuf,
    pub store: RepositoryStore,
    pub bind_addr: String,
    pub lookup_url: String,
    pub lookup_timeout: Duration,
    pub log_level: String,
}

impl Configuration {
    pub fn new(books_file: &str) -> Self {
        Configuration {
            books_file: PathBuf::from(books_file),
            store: RepositoryStore::File,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // builds configuration from any key lookup so tests don't have to touch process env
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("BOOKS_FILE").as_deref().unwrap_or(DEFAULT_BOOKS_FILE));
        if let Some(store) = lookup("CATALOG_STORE") {
            config.store = RepositoryStore::try_from(store)?;
        }
        if let Some(addr) = lookup("CATALOG_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(url) = lookup("CATALOG_LOOKUP_URL") {
            config.lookup_url = url;
        }
        if let Some(secs) = lookup("CATALOG_LOOKUP_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| LibraryError::validation(
                format!("invalid CATALOG_LOOKUP_TIMEOUT_SECS {:?}", secs).as_str(), None))?;
            if secs == 0 {
                return Err(LibraryError::validation("CATALOG_LOOKUP_TIMEOUT_SECS must be positive", None));
            }
            config.lookup_timeout = Duration::from_secs(secs);
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            config.log_level = level;
        }
        let _ = config.tracing_level()?;
        Ok(config)
    }

    pub fn tracing_level(&self) -> LibraryResult<tracing::Level> {
        self.log_level.parse::<tracing::Level>().map_err(|_| LibraryError::validation(
            format!("invalid log level {:?}", self.log_level).as_str(), None))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("books.json");
        assert_eq!(PathBuf::from("books.json"), config.books_file);
        assert_eq!(RepositoryStore::File, config.store);
        assert_eq!(Duration::from_secs(10), config.lookup_timeout);
        assert_eq!(tracing::Level::INFO, config.tracing_level().expect("should parse level"));
    }

    #[tokio::test]
    async fn test_should_build_config_from_lookup() {
        let vars = HashMap::from([
            ("BOOKS_FILE", "/tmp/shelf.json"),
            ("CATALOG_STORE", "memory"),
            ("CATALOG_BIND_ADDR", "0.0.0.0:9000"),
            ("CATALOG_LOOKUP_URL", "http://localhost:1234/volumes"),
            ("CATALOG_LOOKUP_TIMEOUT_SECS", "3"),
            ("CATALOG_LOG_LEVEL", "debug"),
        ]);
        let config = Configuration::from_lookup(|k| vars.get(k).map(|v| v.to_string()))
            .expect("should build config");
        assert_eq!(PathBuf::from("/tmp/shelf.json"), config.books_file);
        assert_eq!(RepositoryStore::Memory, config.store);
        assert_eq!("0.0.0.0:9000", config.bind_addr.as_str());
        assert_eq!("http://localhost:1234/volumes", config.lookup_url.as_str());
        assert_eq!(Duration::from_secs(3), config.lookup_timeout);
        assert_eq!(tracing::Level::DEBUG, config.tracing_level().expect("should parse level"));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_config() {
        assert!(Configuration::from_lookup(|k| (k == "CATALOG_LOOKUP_TIMEOUT_SECS").then(|| "soon".to_string())).is_err());
        assert!(Configuration::from_lookup(|k| (k == "CATALOG_LOOKUP_TIMEOUT_SECS").then(|| "0".to_string())).is_err());
        assert!(Configuration::from_lookup(|k| (k == "CATALOG_LOG_LEVEL").then(|| "loud".to_string())).is_err());
        assert!(Configuration::from_lookup(|k| (k == "CATALOG_STORE").then(|| "dynamo".to_string())).is_err());
    }
}
