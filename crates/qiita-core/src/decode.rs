//! Decoding raw response bytes into resources.
//!
//! A payload goes through a size guard, a JSON syntax parse, an optional
//! rewrite of legacy wire keys, a [`Schema`] check, and finally typed
//! deserialization. Any failure aborts the whole decode; no partially
//! populated value is ever returned.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::compare::ValueEq;
use crate::error::{DecodeError, Result, json_type};
use crate::schema::{Kind, Schema, element};

/// Legacy wire keys and the canonical key each one stands for.
///
/// Older payloads and hand-written fixtures carry these spellings.
pub const LEGACY_KEYS: &[(&str, &str)] = &[
    ("craeated_at", "created_at"),
    ("taggings", "tags"),
    ("expanded_taggings", "expanded_tags"),
];

/// A JSON resource of the Qiita API.
pub trait Resource: Serialize + DeserializeOwned + ValueEq {
    /// Wire format of the resource.
    const SCHEMA: &'static Schema;

    /// Decodes a single JSON object with default options.
    fn from_json(bytes: &[u8]) -> Result<Self> {
        Decoder::default().decode(bytes)
    }

    /// Decodes a JSON array of objects with default options.
    fn list_from_json(bytes: &[u8]) -> Result<Vec<Self>> {
        Decoder::default().decode_list(bytes)
    }
}

/// Knobs for [`Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Accept the spellings in [`LEGACY_KEYS`] when the canonical key is absent.
    pub legacy_keys: bool,
    /// Reject payloads longer than this many bytes.
    pub max_payload_bytes: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            legacy_keys: true,
            max_payload_bytes: None,
        }
    }
}

/// Decodes resources from raw JSON bytes.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes a single resource from a JSON object.
    pub fn decode<R: Resource>(&self, bytes: &[u8]) -> Result<R> {
        let schema = R::SCHEMA;
        debug!(resource = schema.resource, len = bytes.len(), "decoding resource");

        let mut value = self.parse(schema, bytes)?;
        let object = match &mut value {
            Value::Object(object) => object,
            other => {
                return Err(fail(DecodeError::UnexpectedShape {
                    resource: schema.resource,
                    expected: "object",
                    found: json_type(other),
                }));
            }
        };
        self.prepare(schema, "", object)?;
        into_typed(schema, value)
    }

    /// Decodes a list of resources from a JSON array of objects.
    pub fn decode_list<R: Resource>(&self, bytes: &[u8]) -> Result<Vec<R>> {
        let schema = R::SCHEMA;
        debug!(resource = schema.resource, len = bytes.len(), "decoding resource list");

        let mut value = self.parse(schema, bytes)?;
        let items = match &mut value {
            Value::Array(items) => items,
            other => {
                return Err(fail(DecodeError::UnexpectedShape {
                    resource: schema.resource,
                    expected: "array",
                    found: json_type(other),
                }));
            }
        };
        trace!(resource = schema.resource, count = items.len(), "decoding list items");
        for (i, item) in items.iter_mut().enumerate() {
            let path = element("", i);
            let object = match item {
                Value::Object(object) => object,
                other => {
                    return Err(fail(DecodeError::TypeMismatch {
                        resource: schema.resource,
                        field: path,
                        expected: "object",
                        found: json_type(other),
                    }));
                }
            };
            self.prepare(schema, &path, object)?;
        }
        into_typed(schema, value)
    }

    fn parse(&self, schema: &Schema, bytes: &[u8]) -> Result<Value> {
        if let Some(limit) = self.options.max_payload_bytes {
            if bytes.len() > limit {
                return Err(fail(DecodeError::PayloadTooLarge {
                    resource: schema.resource,
                    len: bytes.len(),
                    limit,
                }));
            }
        }
        serde_json::from_slice(bytes).map_err(|source| {
            fail(DecodeError::Syntax {
                resource: schema.resource,
                source,
            })
        })
    }

    fn prepare(&self, schema: &Schema, path: &str, object: &mut Map<String, Value>) -> Result<()> {
        if self.options.legacy_keys {
            rewrite_legacy_keys(schema, object);
        }
        schema
            .check_object(schema.resource, path, object)
            .map_err(fail)
    }
}

/// Renames legacy keys to their canonical spelling, recursing into nested
/// records. A legacy key is only rewritten when the schema declares the
/// canonical key and the payload does not already carry it.
fn rewrite_legacy_keys(schema: &Schema, object: &mut Map<String, Value>) {
    for &(legacy, canonical) in LEGACY_KEYS {
        if schema.field(canonical).is_none() || object.contains_key(canonical) {
            continue;
        }
        if let Some(value) = object.remove(legacy) {
            debug!(resource = schema.resource, legacy, canonical, "rewrote legacy wire key");
            object.insert(canonical.to_owned(), value);
        }
    }

    for field in schema.all_fields() {
        match (field.kind, object.get_mut(field.key)) {
            (Kind::Record(nested), Some(Value::Object(inner))) => {
                rewrite_legacy_keys(nested, inner);
            }
            (Kind::RecordList(nested), Some(Value::Array(items))) => {
                for item in items {
                    if let Value::Object(inner) = item {
                        rewrite_legacy_keys(nested, inner);
                    }
                }
            }
            _ => {}
        }
    }
}

fn into_typed<T: DeserializeOwned>(schema: &Schema, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| {
        fail(DecodeError::Invalid {
            resource: schema.resource,
            source,
        })
    })
}

fn fail(err: DecodeError) -> DecodeError {
    debug!(resource = err.resource(), error = %err, "decode failed");
    err
}
