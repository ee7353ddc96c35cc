//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Opens one connection per call and drops it before returning
//! - Returns records synthesized from validated input on writes
//! - Signals missing ids as `DbError::NotFound`, never swallows storage faults

pub mod records;

pub use records::{DbError, RecordRepo};
