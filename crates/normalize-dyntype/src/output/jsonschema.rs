//! JSON Schema rendering.

use crate::enumeration::EnumTypeDefinition;
use crate::ir::{ScalarValue, TypeRef};
use crate::record::RecordTypeDefinition;
use serde_json::{Map, Value, json};

/// JSON Schema for a single [`TypeRef`].
///
/// Named references point into `#/$defs`.
pub fn type_json_schema(ty: &TypeRef) -> Value {
    match ty {
        TypeRef::Any => json!({}),
        TypeRef::Null => json!({ "type": "null" }),
        TypeRef::Boolean => json!({ "type": "boolean" }),
        TypeRef::Integer => json!({ "type": "integer" }),
        TypeRef::Float => json!({ "type": "number" }),
        TypeRef::String => json!({ "type": "string" }),
        TypeRef::Array(item) => json!({ "type": "array", "items": type_json_schema(item) }),
        TypeRef::Map { value, .. } => json!({
            "type": "object",
            "additionalProperties": type_json_schema(value)
        }),
        TypeRef::Optional(inner) => json!({
            "anyOf": [type_json_schema(inner), { "type": "null" }]
        }),
        TypeRef::Union(types) => json!({
            "anyOf": types.iter().map(type_json_schema).collect::<Vec<_>>()
        }),
        TypeRef::Ref(name) => json!({ "$ref": format!("#/$defs/{}", name) }),
    }
}

/// JSON Schema object for a record type.
///
/// Members without a description get no `description` key at all.
pub fn record_json_schema(record: &RecordTypeDefinition) -> Value {
    let mut schema = Map::new();
    schema.insert("title".into(), record.name().into());
    if let Some(description) = record.description() {
        schema.insert("description".into(), description.into());
    }
    schema.insert("type".into(), "object".into());

    let mut properties = Map::new();
    for field in record.fields() {
        let mut prop = match type_json_schema(&field.ty) {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };
        if let Some(description) = &field.description {
            prop.insert("description".into(), description.clone().into());
        }
        if let Some(default) = &field.default {
            prop.insert("default".into(), default.clone());
        }
        properties.insert(field.name.clone(), Value::Object(prop));
    }
    schema.insert("properties".into(), Value::Object(properties));

    let required: Vec<Value> = record
        .required_fields()
        .map(|f| Value::String(f.name.clone()))
        .collect();
    if !required.is_empty() {
        schema.insert("required".into(), Value::Array(required));
    }

    Value::Object(schema)
}

/// Record schema with the given enums embedded under `$defs`.
pub fn record_json_schema_with_defs(
    record: &RecordTypeDefinition,
    enums: &[&EnumTypeDefinition],
) -> Value {
    let mut schema = record_json_schema(record);
    if enums.is_empty() {
        return schema;
    }
    let defs: Map<String, Value> = enums
        .iter()
        .map(|e| (e.name().to_string(), enum_json_schema(e)))
        .collect();
    if let Value::Object(obj) = &mut schema {
        obj.insert("$defs".into(), Value::Object(defs));
    }
    schema
}

/// JSON Schema object for an enum type.
pub fn enum_json_schema(enumeration: &EnumTypeDefinition) -> Value {
    let mut schema = Map::new();
    schema.insert("title".into(), enumeration.name().into());
    if let Some(ty) = common_scalar_type(enumeration) {
        schema.insert("type".into(), ty.into());
    }
    schema.insert(
        "enum".into(),
        Value::Array(enumeration.values().map(ScalarValue::to_json).collect()),
    );
    Value::Object(schema)
}

fn common_scalar_type(enumeration: &EnumTypeDefinition) -> Option<&'static str> {
    let mut common = None;
    for value in enumeration.values() {
        let ty = match value {
            ScalarValue::Bool(_) => "boolean",
            ScalarValue::Int(_) => "integer",
            ScalarValue::Str(_) => "string",
        };
        match common {
            None => common = Some(ty),
            Some(prev) if prev != ty => return None,
            Some(_) => {}
        }
    }
    common
}
