//! Static descriptions of each resource's wire format.
//!
//! A [`Schema`] lists every wire key a resource carries, whether it may be
//! absent or `null`, and the JSON shape it must have. The decoder checks a
//! parsed payload against the schema before deserializing it, which is what
//! lets decode errors name the exact field at fault.

use serde_json::{Map, Value};

use crate::error::{DecodeError, Result, json_type};

/// JSON shape expected for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Boolean,
    /// RFC 3339 string with an explicit offset. A space is accepted in place
    /// of the `T` separator.
    Timestamp,
    StringList,
    Record(&'static Schema),
    RecordList(&'static Schema),
}

impl Kind {
    /// Human-readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Timestamp => "RFC 3339 timestamp",
            Self::StringList => "array of strings",
            Self::Record(_) => "object",
            Self::RecordList(_) => "array of objects",
        }
    }

    fn check(&self, resource: &'static str, path: &str, value: &Value) -> Result<()> {
        let matches = match (self, value) {
            (Self::String, Value::String(_)) => true,
            (Self::Integer, Value::Number(n)) => n.is_i64(),
            (Self::Boolean, Value::Bool(_)) => true,
            // Same parser chrono's `Deserialize` uses, so a string that
            // passes here cannot fail later without a field name.
            (Self::Timestamp, Value::String(s)) => s.parse::<crate::Timestamp>().is_ok(),
            (Self::StringList, Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    Self::String.check(resource, &element(path, i), item)?;
                }
                true
            }
            (Self::Record(schema), Value::Object(fields)) => {
                schema.check_object(resource, path, fields)?;
                true
            }
            (Self::RecordList(schema), Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    Self::Record(*schema).check(resource, &element(path, i), item)?;
                }
                true
            }
            _ => false,
        };

        if matches {
            Ok(())
        } else {
            Err(DecodeError::TypeMismatch {
                resource,
                field: path.to_owned(),
                expected: self.describe(),
                found: json_type(value),
            })
        }
    }
}

/// One wire key of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub kind: Kind,
    /// Absent and `null` are both accepted and decode to `None`.
    pub optional: bool,
}

impl Field {
    pub const fn required(key: &'static str, kind: Kind) -> Self {
        Self {
            key,
            kind,
            optional: false,
        }
    }

    pub const fn optional(key: &'static str, kind: Kind) -> Self {
        Self {
            key,
            kind,
            optional: true,
        }
    }
}

/// Wire format of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Resource name as used in error messages (`"post"`, `"user"`).
    pub resource: &'static str,
    /// Schema whose fields are inlined before this one's.
    pub base: Option<&'static Schema>,
    pub fields: &'static [Field],
}

impl Schema {
    pub const fn new(resource: &'static str, fields: &'static [Field]) -> Self {
        Self {
            resource,
            base: None,
            fields,
        }
    }

    /// A schema that carries every field of `base` plus its own.
    pub const fn extending(
        resource: &'static str,
        base: &'static Schema,
        fields: &'static [Field],
    ) -> Self {
        Self {
            resource,
            base: Some(base),
            fields,
        }
    }

    /// All fields, inherited ones first, in declaration order.
    pub fn all_fields(&self) -> Vec<&Field> {
        let mut out = self.base.map(Schema::all_fields).unwrap_or_default();
        out.extend(self.fields);
        out
    }

    /// Looks up a field by wire key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .or_else(|| self.base.and_then(|b| b.field(key)))
    }

    /// Every wire key in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.all_fields().into_iter().map(|f| f.key).collect()
    }

    /// Checks a parsed payload against this schema.
    ///
    /// Keys the schema does not declare are ignored.
    pub fn check(&self, value: &Value) -> Result<()> {
        match value {
            Value::Object(fields) => self.check_object(self.resource, "", fields),
            other => Err(DecodeError::UnexpectedShape {
                resource: self.resource,
                expected: "object",
                found: json_type(other),
            }),
        }
    }

    /// Checks one object, reporting errors against `resource` with paths
    /// below `prefix`.
    pub(crate) fn check_object(
        &self,
        resource: &'static str,
        prefix: &str,
        object: &Map<String, Value>,
    ) -> Result<()> {
        for field in self.all_fields() {
            let path = child(prefix, field.key);
            match object.get(field.key) {
                None | Some(Value::Null) if field.optional => {}
                None => return Err(DecodeError::MissingField { resource, field: path }),
                Some(value) => field.kind.check(resource, &path, value)?,
            }
        }
        Ok(())
    }
}

fn child(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

pub(crate) fn element(prefix: &str, index: usize) -> String {
    format!("{prefix}[{index}]")
}
