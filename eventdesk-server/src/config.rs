//! Store configuration
//!
//! Resolved once at process entry and passed down; nothing below this
//! reads the environment.

use std::path::PathBuf;

/// Environment variable overriding the events database path
pub const EVENTS_DB_ENV: &str = "EVENTS_DB_PATH";
/// Environment variable overriding the leads database path
pub const LEADS_DB_ENV: &str = "LEADS_DB_PATH";

pub const DEFAULT_EVENTS_DB: &str = "events.db";
pub const DEFAULT_LEADS_DB: &str = "leads.db";

/// Location of each resource's SQLite file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub events_db: PathBuf,
    pub leads_db: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            events_db: PathBuf::from(DEFAULT_EVENTS_DB),
            leads_db: PathBuf::from(DEFAULT_LEADS_DB),
        }
    }
}

impl StoreConfig {
    /// Defaults, overridden by `EVENTS_DB_PATH` / `LEADS_DB_PATH` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        Self {
            events_db: path(EVENTS_DB_ENV, defaults.events_db),
            leads_db: path(LEADS_DB_ENV, defaults.leads_db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_directory_files() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.events_db, PathBuf::from("events.db"));
    }

    #[test]
    fn env_overrides_each_path() {
        let config = StoreConfig::from_lookup(|key| match key {
            EVENTS_DB_ENV => Some("/tmp/e.db".into()),
            LEADS_DB_ENV => Some("/tmp/l.db".into()),
            _ => None,
        });
        assert_eq!(config.events_db, PathBuf::from("/tmp/e.db"));
        assert_eq!(config.leads_db, PathBuf::from("/tmp/l.db"));
    }

    #[test]
    fn blank_env_value_uses_default() {
        let config = StoreConfig::from_lookup(|key| match key {
            EVENTS_DB_ENV => Some(String::new()),
            LEADS_DB_ENV => Some("  ".into()),
            _ => None,
        });
        assert_eq!(config, StoreConfig::default());
    }
}
