//! HTTP server command
//!
//! Runs the eventdesk HTTP server with the events and leads routes.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use eventdesk_server::{run_server, ServerConfig, StoreConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "EVENTDESK_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "EVENTDESK_CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    /// SQLite file for events [default: $EVENTS_DB_PATH, else events.db]
    #[arg(long)]
    pub events_db: Option<PathBuf>,

    /// SQLite file for leads [default: $LEADS_DB_PATH, else leads.db]
    #[arg(long)]
    pub leads_db: Option<PathBuf>,
}

impl ServeArgs {
    /// Resolve arguments into the server configuration. Database paths not
    /// given as flags come from `stores`.
    pub fn into_config(self, stores: StoreConfig) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            stores: StoreConfig {
                events_db: self.events_db.unwrap_or(stores.events_db),
                leads_db: self.leads_db.unwrap_or(stores.leads_db),
            },
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config(StoreConfig::from_env());

    tracing::info!(
        bind = %config.bind_addr,
        events_db = %config.stores.events_db.display(),
        leads_db = %config.stores.leads_db.display(),
        "Starting eventdesk server"
    );

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn explicit_paths_win() {
        let harness = Harness::try_parse_from([
            "eventdesk",
            "--bind",
            "0.0.0.0:9000",
            "--events-db",
            "/data/events.db",
            "--leads-db",
            "/data/leads.db",
            "--cors-permissive",
        ])
        .unwrap();

        let config = harness.serve.into_config(StoreConfig::default());
        assert_eq!(config.bind_addr.port(), 9000);
        assert!(config.cors_permissive);
        assert_eq!(config.stores.events_db, PathBuf::from("/data/events.db"));
        assert_eq!(config.stores.leads_db, PathBuf::from("/data/leads.db"));
    }

    #[test]
    fn missing_paths_fall_back_to_store_config() {
        let harness =
            Harness::try_parse_from(["eventdesk", "--leads-db", "/data/leads.db"]).unwrap();

        let fallback = StoreConfig {
            events_db: PathBuf::from("/env/events.db"),
            leads_db: PathBuf::from("/env/leads.db"),
        };
        let config = harness.serve.into_config(fallback);
        assert_eq!(config.stores.events_db, PathBuf::from("/env/events.db"));
        assert_eq!(config.stores.leads_db, PathBuf::from("/data/leads.db"));
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(Harness::try_parse_from(["eventdesk", "--bind", "not-an-addr"]).is_err());
    }
}
