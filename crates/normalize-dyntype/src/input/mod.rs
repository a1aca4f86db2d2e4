//! Declarative input readers.
//!
//! Each reader turns configuration-like data into the maps the factories
//! consume, or builds the type directly.

mod spec;
mod tool;
mod type_expr;

pub use spec::{enum_type_from_json, parse_enum_members, parse_field_specs, record_type_from_json};
pub use tool::{ArgDef, ToolDef, args_record_type, args_type_name};
pub use type_expr::parse_type;
