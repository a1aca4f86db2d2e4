//! Argument records for callable tools.
//!
//! A tool declares its arguments as a list of [`ArgDef`]s, typically read from
//! YAML or JSON config:
//!
//! ```yaml
//! desc: Look up the weather
//! args:
//!   - key: city
//!     desc: City to look up
//!     type: str
//!   - key: days
//!     type: Optional[int]
//! ```
//!
//! [`args_record_type`] turns those into a record named after the tool.

use super::type_expr::parse_type;
use crate::error::FactoryError;
use crate::factory::TypeFactory;
use crate::record::{FieldSpec, FieldSpecMap, RecordType};
use serde::{Deserialize, Serialize};

/// One documented tool argument.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ArgDef {
    pub key: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Type expression, see [`parse_type`].
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
}

/// Documentation for a tool and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ToolDef {
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub args: Vec<ArgDef>,
}

impl ToolDef {
    pub fn args_record_type(
        &self,
        factory: &TypeFactory,
        tool_name: &str,
    ) -> Result<RecordType, FactoryError> {
        args_record_type(factory, tool_name, &self.args)
    }
}

/// Name of the argument record for a tool: `get_weather` → `GetWeatherArgs`.
pub fn args_type_name(tool_name: &str) -> String {
    let mut out = String::with_capacity(tool_name.len() + 4);
    let mut prev_letter = false;
    for c in tool_name.chars() {
        if c == '_' || c.is_whitespace() {
            prev_letter = false;
            continue;
        }
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out.push_str("Args");
    out
}

/// Build the argument record for `tool_name`.
///
/// Every argument must carry a type; descriptions are optional.
pub fn args_record_type(
    factory: &TypeFactory,
    tool_name: &str,
    args: &[ArgDef],
) -> Result<RecordType, FactoryError> {
    crate::error::validate_name(tool_name)?;

    let mut fields = FieldSpecMap::with_capacity(args.len());
    for arg in args {
        let expr = arg
            .ty
            .as_deref()
            .ok_or_else(|| FactoryError::MissingFieldAttribute {
                field: arg.key.clone(),
                attribute: "type",
            })?;
        fields.insert(
            arg.key.clone(),
            FieldSpec {
                ty: parse_type(expr)?,
                description: arg.desc.clone(),
                default: None,
            },
        );
    }

    let description = format!("Arguments for the {} tool.", tool_name);
    factory.create_record_type_with_description(
        &args_type_name(tool_name),
        Some(&description),
        fields,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeRef;

    #[test]
    fn type_names() {
        assert_eq!(args_type_name("get_weather"), "GetWeatherArgs");
        assert_eq!(args_type_name("combinations"), "CombinationsArgs");
        assert_eq!(args_type_name("fetchURL_v2"), "FetchurlV2Args");
    }

    #[test]
    fn record_from_args() {
        let args = vec![
            ArgDef {
                key: "city".into(),
                desc: Some("City to look up".into()),
                ty: Some("str".into()),
            },
            ArgDef {
                key: "days".into(),
                desc: Some(String::new()),
                ty: Some("Optional[int]".into()),
            },
        ];
        let model = args_record_type(&TypeFactory::default(), "get_weather", &args).unwrap();

        assert_eq!(model.name(), "GetWeatherArgs");
        assert_eq!(model.description(), Some("Arguments for the get_weather tool."));
        let city = model.field("city").unwrap();
        assert_eq!(city.description.as_deref(), Some("City to look up"));
        let days = model.field("days").unwrap();
        assert_eq!(days.ty, TypeRef::optional(TypeRef::Integer));
        assert_eq!(days.description, None);
    }

    #[test]
    fn untyped_arg_rejected() {
        let tool = ToolDef {
            desc: None,
            args: vec![ArgDef {
                key: "query".into(),
                ..Default::default()
            }],
        };
        let err = tool
            .args_record_type(&TypeFactory::default(), "search")
            .unwrap_err();
        assert!(matches!(
            err,
            FactoryError::MissingFieldAttribute { ref field, .. } if field == "query"
        ));
    }

    #[test]
    fn tool_def_from_json() {
        let tool: ToolDef = serde_json::from_value(serde_json::json!({
            "desc": "Search the web",
            "args": [{ "key": "q", "type": "str" }]
        }))
        .unwrap();
        assert_eq!(tool.args[0].ty.as_deref(), Some("str"));
        assert_eq!(tool.args[0].desc, None);
    }
}
