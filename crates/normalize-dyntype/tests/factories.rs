//! End-to-end tests for the record and enum factories.

use normalize_dyntype::input::{self, ArgDef};
use normalize_dyntype::output::{enum_json_schema, record_json_schema, record_json_schema_with_defs};
use normalize_dyntype::{
    FactoryConfig, FactoryError, FieldSpec, StructureEq, TypeDefinition, TypeFactory, TypeRef,
    create_enum_type, create_record_type,
};
use serde_json::json;

// ============================================================================
// Record types
// ============================================================================

mod records {
    use super::*;

    #[test]
    fn empty_description_normalizes_to_none() {
        let model = create_record_type(
            "TestModel",
            [("a", FieldSpec::new(TypeRef::Integer).with_description(""))],
        )
        .unwrap();
        assert_eq!(model.field("a").unwrap().description, None);
    }

    #[test]
    fn missing_description_normalizes_to_none() {
        let model = create_record_type("TestModel", [("a", FieldSpec::new(TypeRef::Integer))])
            .unwrap();
        assert_eq!(model.field("a").unwrap().description, None);
    }

    #[test]
    fn json_declaration_order_kept() {
        let model = input::record_type_from_json(
            &TypeFactory::default(),
            "Window",
            &json!({
                "width": { "type": "int" },
                "height": { "type": "int" },
                "anchor": { "type": "Anchor", "description": "Corner to pin" }
            }),
        )
        .unwrap();
        assert_eq!(model.member_names(), vec!["width", "height", "anchor"]);
        assert_eq!(
            model.field("anchor").unwrap().ty,
            TypeRef::Ref("Anchor".into())
        );
    }

    #[test]
    fn same_input_twice_gives_equivalent_types() {
        let factory = TypeFactory::default();
        let spec = json!({ "a": { "type": "int", "description": "count" } });
        let first = input::record_type_from_json(&factory, "M", &spec).unwrap();
        let second = input::record_type_from_json(&factory, "M", &spec).unwrap();
        assert!(!first.is_same_type(&second));
        assert!(first.structure_eq(&second));
    }

    #[test]
    fn missing_type_is_an_error() {
        let err = input::record_type_from_json(
            &TypeFactory::default(),
            "M",
            &json!({ "ok": { "type": "str" }, "bad": { "description": "untyped" } }),
        )
        .unwrap_err();
        assert!(matches!(err, FactoryError::MissingFieldAttribute { .. }));
    }
}

// ============================================================================
// Enum types
// ============================================================================

mod enums {
    use super::*;

    #[test]
    fn basic() {
        let color = create_enum_type("Color", [("RED", 1), ("BLUE", 2)]).unwrap();
        assert!(color.is_enumeration());
        assert_eq!(*color.member("RED").unwrap().value(), 1i64);
        assert_eq!(*color.member("BLUE").unwrap().value(), 2i64);
        let names: Vec<&str> = color.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["RED", "BLUE"]);
    }

    #[test]
    fn empty_enum_policy() {
        let empty = json!({});
        assert!(matches!(
            input::enum_type_from_json(&TypeFactory::default(), "Nothing", &empty),
            Err(FactoryError::EmptyEnum { .. })
        ));

        let config = FactoryConfig::from_toml_str("allow_empty_enums = true").unwrap();
        let nothing =
            input::enum_type_from_json(&TypeFactory::new(config), "Nothing", &empty).unwrap();
        assert_eq!(nothing.len(), 0);
    }
}

// ============================================================================
// Schema output
// ============================================================================

mod schema {
    use super::*;

    #[test]
    fn tool_args_schema() {
        let args = [
            ArgDef {
                key: "city".into(),
                desc: Some("City to look up".into()),
                ty: Some("str".into()),
            },
            ArgDef {
                key: "days".into(),
                desc: Some(String::new()),
                ty: Some("int | None".into()),
            },
        ];
        let model = input::args_record_type(&TypeFactory::default(), "get_weather", &args).unwrap();

        insta::assert_json_snapshot!(record_json_schema(&model), @r###"
        {
          "title": "GetWeatherArgs",
          "description": "Arguments for the get_weather tool.",
          "type": "object",
          "properties": {
            "city": {
              "type": "string",
              "description": "City to look up"
            },
            "days": {
              "anyOf": [
                {
                  "type": "integer"
                },
                {
                  "type": "null"
                }
              ]
            }
          },
          "required": [
            "city",
            "days"
          ]
        }
        "###);
    }

    #[test]
    fn enum_schema() {
        let color = create_enum_type("Color", [("RED", 1), ("BLUE", 2)]).unwrap();
        insta::assert_json_snapshot!(enum_json_schema(&color), @r###"
        {
          "title": "Color",
          "type": "integer",
          "enum": [
            1,
            2
          ]
        }
        "###);
    }

    #[test]
    fn refs_resolve_through_defs() {
        let color = create_enum_type("Color", [("RED", "red"), ("BLUE", "blue")]).unwrap();
        let paint = create_record_type(
            "Paint",
            [(
                "color",
                FieldSpec::new(TypeRef::Ref("Color".into())).with_default(json!("red")),
            )],
        )
        .unwrap();

        let schema = record_json_schema_with_defs(&paint, &[color.definition()]);
        assert_eq!(
            schema.pointer("/properties/color/$ref"),
            Some(&json!("#/$defs/Color"))
        );
        assert_eq!(
            schema.pointer("/$defs/Color/enum"),
            Some(&json!(["red", "blue"]))
        );
        assert!(schema.get("required").is_none());
    }
}
