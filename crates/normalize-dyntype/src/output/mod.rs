//! Renderers for produced type definitions.

mod jsonschema;

pub use jsonschema::{
    enum_json_schema, record_json_schema, record_json_schema_with_defs, type_json_schema,
};
