//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod schema;
pub mod input;
pub mod record;

pub use validation::ValidationError;
pub use schema::{FieldKind, FieldSpec, RecordSchema, EVENTS, LEADS};
pub use input::{FieldValue, RecordInput};
pub use record::{Fields, Record};
