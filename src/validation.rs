//! Structural checks on incoming JSON documents.
//!
//! Each writable entity declares a [`Schema`]: the properties it requires and
//! the JSON type (and optional string format) of every property it knows.
//! Unknown properties are ignored. Type rules follow JSON Schema draft 7:
//! `number` accepts any JSON number, `integer` only integral ones, and `null`
//! never matches.

use chrono::DateTime;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Integer,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 timestamp, e.g. `2026-03-01T12:00:00+02:00`.
    DateTime,
    /// Usable as one URL path segment: not empty, `.` or `..`, which clients
    /// collapse when resolving a Location header.
    PathSegment,
}

impl Format {
    fn name(self) -> &'static str {
        match self {
            Self::DateTime => "date-time",
            Self::PathSegment => "path-segment",
        }
    }

    fn matches(self, value: &str) -> bool {
        match self {
            Self::DateTime => DateTime::parse_from_rfc3339(value).is_ok(),
            Self::PathSegment => !matches!(value, "" | "." | ".."),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub name: &'static str,
    pub kind: FieldType,
    pub format: Option<Format>,
}

impl Property {
    const fn new(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            kind,
            format: None,
        }
    }

    const fn with_format(name: &'static str, kind: FieldType, format: Format) -> Self {
        Self {
            name,
            kind,
            format: Some(format),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub required: &'static [&'static str],
    pub properties: &'static [Property],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("{found} is not of type 'object'")]
    NotAnObject { found: String },

    #[error("'{0}' is a required property")]
    MissingProperty(&'static str),

    #[error("'{field}': {found} is not of type '{expected}'")]
    WrongType {
        field: &'static str,
        found: String,
        expected: &'static str,
    },

    #[error("'{field}': {found} is not a '{format}'")]
    InvalidFormat {
        field: &'static str,
        found: String,
        format: &'static str,
    },
}

impl SchemaError {
    /// The offending property, if the failure concerns a single one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject { .. } => None,
            Self::MissingProperty(field)
            | Self::WrongType { field, .. }
            | Self::InvalidFormat { field, .. } => Some(*field),
        }
    }
}

impl Schema {
    /// Check `document` against this schema, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found: a non-object document, then
    /// missing required properties, then type and format mismatches in
    /// declaration order.
    pub fn validate(&self, document: &Value) -> Result<(), SchemaError> {
        let Some(object) = document.as_object() else {
            return Err(SchemaError::NotAnObject {
                found: document.to_string(),
            });
        };

        if let Some(missing) = self.required.iter().find(|name| !object.contains_key(**name)) {
            return Err(SchemaError::MissingProperty(*missing));
        }

        for property in self.properties {
            let Some(value) = object.get(property.name) else {
                continue;
            };

            if !property.kind.matches(value) {
                return Err(SchemaError::WrongType {
                    field: property.name,
                    found: value.to_string(),
                    expected: property.kind.name(),
                });
            }

            if let (Some(format), Some(text)) = (property.format, value.as_str())
                && !format.matches(text)
            {
                return Err(SchemaError::InvalidFormat {
                    field: property.name,
                    found: value.to_string(),
                    format: format.name(),
                });
            }
        }

        Ok(())
    }
}

/// `{name, model}` plus an optional `location_id` to attach. The name ends up
/// in the sensor's URL.
pub const SENSOR: Schema = Schema {
    required: &["name", "model"],
    properties: &[
        Property::with_format("name", FieldType::String, Format::PathSegment),
        Property::new("model", FieldType::String),
        Property::new("location_id", FieldType::Integer),
    ],
};

pub const MEASUREMENT: Schema = Schema {
    required: &["value", "time"],
    properties: &[
        Property::new("value", FieldType::Number),
        Property::with_format("time", FieldType::String, Format::DateTime),
    ],
};

pub const LOCATION: Schema = Schema {
    required: &["name"],
    properties: &[
        Property::new("name", FieldType::String),
        Property::new("latitude", FieldType::Number),
        Property::new("longitude", FieldType::Number),
        Property::new("altitude", FieldType::Number),
        Property::new("description", FieldType::String),
    ],
};

pub const PRODUCT: Schema = Schema {
    required: &["handle", "weight", "price"],
    properties: &[
        Property::new("handle", FieldType::String),
        Property::new("weight", FieldType::Number),
        Property::new("price", FieldType::Number),
    ],
};

pub const STORAGE_ITEM: Schema = Schema {
    required: &["location", "qty"],
    properties: &[
        Property::new("location", FieldType::String),
        Property::new("qty", FieldType::Integer),
    ],
};
