//! JSON field-spec and member maps.
//!
//! Field specs look like:
//!
//! ```json
//! {
//!     "city": { "type": "str", "description": "City to look up" },
//!     "days": { "type": "int", "default": 3 }
//! }
//! ```
//!
//! Unknown keys inside a field spec are ignored.

use super::type_expr::parse_type;
use crate::enumeration::{EnumMemberMap, EnumType};
use crate::error::FactoryError;
use crate::factory::TypeFactory;
use crate::ir::ScalarValue;
use crate::record::{FieldSpec, FieldSpecMap, RecordType};
use serde_json::Value;

/// Parse an object of field name to field spec.
pub fn parse_field_specs(input: &Value) -> Result<FieldSpecMap, FactoryError> {
    let obj = input
        .as_object()
        .ok_or_else(|| FactoryError::Malformed("field specs must be an object".into()))?;

    let mut fields = FieldSpecMap::with_capacity(obj.len());
    for (name, spec) in obj {
        fields.insert(name.clone(), parse_field_spec(name, spec)?);
    }
    Ok(fields)
}

fn parse_field_spec(name: &str, spec: &Value) -> Result<FieldSpec, FactoryError> {
    let spec = spec.as_object().ok_or_else(|| {
        FactoryError::Malformed(format!("spec for field `{}` must be an object", name))
    })?;

    let ty = match spec.get("type") {
        None | Some(Value::Null) => {
            return Err(FactoryError::MissingFieldAttribute {
                field: name.to_string(),
                attribute: "type",
            });
        }
        Some(Value::String(expr)) => parse_type(expr)?,
        Some(other) => {
            return Err(FactoryError::InvalidType {
                expr: other.to_string(),
                reason: format!("type of field `{}` must be a string", name),
            });
        }
    };

    let description = match spec.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(FactoryError::Malformed(format!(
                "description of field `{}` must be a string",
                name
            )));
        }
    };

    Ok(FieldSpec {
        ty,
        description,
        default: spec.get("default").cloned(),
    })
}

/// Parse an object of member name to scalar value.
///
/// Values must be integers, strings, or booleans.
pub fn parse_enum_members(input: &Value) -> Result<EnumMemberMap, FactoryError> {
    let obj = input
        .as_object()
        .ok_or_else(|| FactoryError::Malformed("enum members must be an object".into()))?;

    let mut members = EnumMemberMap::with_capacity(obj.len());
    for (name, value) in obj {
        let value = match value {
            Value::Bool(b) => ScalarValue::Bool(*b),
            Value::String(s) => ScalarValue::Str(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ScalarValue::Int(i),
                None if n.is_u64() => {
                    return Err(FactoryError::Malformed(format!(
                        "value of member `{}` is out of range for a 64-bit signed integer: {}",
                        name, n
                    )));
                }
                None => {
                    return Err(FactoryError::Malformed(format!(
                        "value of member `{}` must be an integer, got {}",
                        name, n
                    )));
                }
            },
            other => {
                return Err(FactoryError::Malformed(format!(
                    "value of member `{}` must be a scalar, got {}",
                    name, other
                )));
            }
        };
        members.insert(name.clone(), value);
    }
    Ok(members)
}

/// Parse field specs and build a record type from them.
pub fn record_type_from_json(
    factory: &TypeFactory,
    name: &str,
    fields: &Value,
) -> Result<RecordType, FactoryError> {
    factory.create_record_type(name, parse_field_specs(fields)?)
}

/// Parse a member map and build an enum type from it.
pub fn enum_type_from_json(
    factory: &TypeFactory,
    name: &str,
    members: &Value,
) -> Result<EnumType, FactoryError> {
    factory.create_enum_type(name, parse_enum_members(members)?)
}
