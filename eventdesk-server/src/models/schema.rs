//! Record schemas for the events and leads resources
//!
//! Both resources share one repository and one codec; everything that
//! differs between them lives in a static [`RecordSchema`].

/// Storage kind of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Real,
    /// List of identifier strings, stored as a JSON array in a TEXT column
    TextList,
}

impl FieldKind {
    /// SQLite column type used for this kind.
    pub fn sql_type(self) -> &'static str {
        match self {
            Self::Text | Self::TextList => "TEXT",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
        }
    }

    /// Human description used in validation messages.
    pub fn expected(self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::Integer => "an integer",
            Self::Real => "a number",
            Self::TextList => "an array of strings",
        }
    }
}

/// Definition of one business field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key used in JSON payloads
    pub name: &'static str,
    /// Column name in the records table
    pub column: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Literal stored when the key is absent from the payload
    pub default: Option<&'static str>,
}

impl FieldSpec {
    const fn new(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            required: false,
            default: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn default_text(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }
}

/// Static description of a record resource.
#[derive(Debug)]
pub struct RecordSchema {
    /// Singular noun used in error messages ("Event")
    pub label: &'static str,
    /// Collection name: table name, URL segment and bulk import key
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Look up a field by its wire name.
    #[cfg(test)]
    pub(crate) fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Column names in schema order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.column)
    }
}

use FieldKind::{Integer, Real, Text, TextList};

pub static EVENTS: RecordSchema = RecordSchema {
    label: "Event",
    collection: "events",
    fields: &[
        FieldSpec::new("name", "name", Text).required(),
        FieldSpec::new("date", "date", Text),
        FieldSpec::new("start_time", "start_time", Text),
        FieldSpec::new("end_time", "end_time", Text),
        FieldSpec::new("location", "location", Text),
        FieldSpec::new("package", "package", Text),
        FieldSpec::new("guest_count", "guest_count", Integer),
        FieldSpec::new("payout", "payout", Real),
        FieldSpec::new("target_staff_count", "target_staff_count", Integer),
        FieldSpec::new("assign_employees", "assign_employees", TextList),
        FieldSpec::new("client_name", "client_name", Text),
        FieldSpec::new("client_phone", "client_phone", Text),
        FieldSpec::new("status", "status", Text).default_text("Draft"),
        FieldSpec::new("staffing_status", "staffing_status", Text),
        FieldSpec::new("notes", "notes", Text),
    ],
};

pub static LEADS: RecordSchema = RecordSchema {
    label: "Lead",
    collection: "leads",
    fields: &[
        FieldSpec::new("name", "name", Text).required(),
        FieldSpec::new("company", "company", Text),
        FieldSpec::new("eventName", "event_name", Text),
        FieldSpec::new("eventType", "event_type", Text),
        FieldSpec::new("idealDate", "ideal_date", Text),
        FieldSpec::new("estimatedValue", "estimated_value", Real),
        FieldSpec::new("valueLevel", "value_level", Text),
        FieldSpec::new("status", "status", Text).default_text("Discovery call"),
        FieldSpec::new("statusLevel", "status_level", Text),
        FieldSpec::new("nextTouchpoint", "next_touchpoint", Text),
        FieldSpec::new("email", "email", Text),
        FieldSpec::new("phone", "phone", Text),
        FieldSpec::new("guests", "guests", Integer),
        FieldSpec::new("source", "source", Text),
        FieldSpec::new("location", "location", Text),
        FieldSpec::new("notes", "notes", Text),
        FieldSpec::new("actionItems", "action_items", TextList),
    ],
};
