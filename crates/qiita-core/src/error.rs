//! Decode error type.

/// Errors returned when a payload cannot be decoded into a resource.
///
/// Every variant names the resource being decoded. Field paths are dotted
/// wire keys relative to the payload root, e.g. `user.organization` or
/// `[0].tags[1].name` for list payloads.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is larger than the configured limit.
    #[error("{resource}: payload of {len} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge {
        resource: &'static str,
        len: usize,
        limit: usize,
    },

    /// The payload is not well-formed JSON.
    #[error("{resource}: malformed JSON: {source}")]
    Syntax {
        resource: &'static str,
        source: serde_json::Error,
    },

    /// The payload root is not the expected JSON object or array.
    #[error("{resource}: expected a JSON {expected}, found {found}")]
    UnexpectedShape {
        resource: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A required field is absent.
    #[error("{resource}: missing required field `{field}`")]
    MissingField {
        resource: &'static str,
        field: String,
    },

    /// A field holds a JSON value of the wrong type.
    #[error("{resource}: field `{field}` has wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        resource: &'static str,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The payload passed schema checks but could not be deserialized.
    #[error("{resource}: {source}")]
    Invalid {
        resource: &'static str,
        source: serde_json::Error,
    },
}

/// Result alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

impl DecodeError {
    /// Name of the resource that failed to decode.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::PayloadTooLarge { resource, .. }
            | Self::Syntax { resource, .. }
            | Self::UnexpectedShape { resource, .. }
            | Self::MissingField { resource, .. }
            | Self::TypeMismatch { resource, .. }
            | Self::Invalid { resource, .. } => *resource,
        }
    }

    /// Path of the offending field, if the error concerns a single field.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. } | Self::TypeMismatch { field, .. } => {
                Some(field.as_str())
            }
            _ => None,
        }
    }

    /// Returns `true` if the input was not well-formed JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

/// JSON type name used in error messages.
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
