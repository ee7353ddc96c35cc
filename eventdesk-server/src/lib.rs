//! eventdesk-server: HTTP backend for event and lead records
//!
//! Each resource is a SQLite-backed table served through one generic
//! repository and one set of CRUD routes, parameterized by a static
//! record schema.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::StoreConfig;
pub use http::{run_server, ServerConfig, ServerError};
