//! Dynamic value codec seam.
//!
//! The adapter converts between in-memory [`Value`]s and schema-typed
//! byte blobs exclusively through [`DynamicCodec`], so the concrete
//! encoding stays swappable. [`JsonCodec`] is the default: it checks
//! that the value conforms to the schema's implied type, then uses
//! compact JSON bytes as the binary form.

use ferrule_types::ValueType;
use serde_json::Value;
use thiserror::Error;

/// Failure while encoding or decoding a dynamic value.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("value does not conform to schema at {path}: expected {expected}, found {found}")]
    Shape {
        path: String,
        expected: String,
        found: String,
    },

    #[error("value does not conform to schema at {path}: field is not declared")]
    UnknownField { path: String },

    #[error("encoding failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("decoding failed: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl CodecError {
    fn shape(path: &str, expected: impl Into<String>, found: &Value) -> Self {
        Self::Shape {
            path: if path.is_empty() { "(root)".to_string() } else { path.to_string() },
            expected: expected.into(),
            found: json_type_name(found).to_string(),
        }
    }
}

/// Opaque encode/decode boundary between typed in-memory values and a
/// schema-typed binary form.
pub trait DynamicCodec: Send + Sync {
    /// Encode `value` against the implied type `ty`.
    fn encode(&self, value: &Value, ty: &ValueType) -> Result<Vec<u8>, CodecError>;

    /// Decode `bytes` against the implied type `ty`. Empty input
    /// decodes to `Value::Null` (no state).
    fn decode(&self, bytes: &[u8], ty: &ValueType) -> Result<Value, CodecError>;
}

/// Default codec: schema conformance check plus compact JSON bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl DynamicCodec for JsonCodec {
    fn encode(&self, value: &Value, ty: &ValueType) -> Result<Vec<u8>, CodecError> {
        conform(value, ty, "")?;
        serde_json::to_vec(value).map_err(CodecError::Serialize)
    }

    fn decode(&self, bytes: &[u8], ty: &ValueType) -> Result<Value, CodecError> {
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        let value: Value = serde_json::from_slice(bytes).map_err(CodecError::Deserialize)?;
        conform(&value, ty, "")?;
        Ok(value)
    }
}

/// Check that `value` is a legal inhabitant of `ty`.
///
/// `Null` inhabits every type (absent state/attribute). Objects may
/// omit declared fields but must not carry undeclared ones.
fn conform(value: &Value, ty: &ValueType, path: &str) -> Result<(), CodecError> {
    match (ty, value) {
        (_, Value::Null) => Ok(()),
        (ValueType::String, Value::String(_)) => Ok(()),
        (ValueType::Number, Value::Number(_)) => Ok(()),
        (ValueType::Bool, Value::Bool(_)) => Ok(()),
        (ValueType::List(element), Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                conform(item, element, &format!("{path}[{index}]"))?;
            }
            Ok(())
        }
        (ValueType::Map(element), Value::Object(entries)) => {
            for (key, entry) in entries {
                conform(entry, element, &format!("{path}.{key}"))?;
            }
            Ok(())
        }
        (ValueType::Object(fields), Value::Object(entries)) => {
            for (key, entry) in entries {
                let field_path = format!("{path}.{key}");
                match fields.get(key) {
                    Some(field_type) => conform(entry, field_type, &field_path)?,
                    None => return Err(CodecError::UnknownField { path: field_path }),
                }
            }
            Ok(())
        }
        (expected, found) => Err(CodecError::shape(path, describe(expected), found)),
    }
}

/// Short human-readable name for an implied type.
fn describe(ty: &ValueType) -> String {
    match ty {
        ValueType::String => "string".to_string(),
        ValueType::Number => "number".to_string(),
        ValueType::Bool => "bool".to_string(),
        ValueType::List(element) => format!("list of {}", describe(element)),
        ValueType::Map(element) => format!("map of {}", describe(element)),
        ValueType::Object(_) => "object".to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
