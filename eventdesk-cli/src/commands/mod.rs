//! Command implementations for eventdesk CLI

pub mod serve;

pub use serve::run_serve;
