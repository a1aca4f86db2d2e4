//! Runtime record and enum types from declarative specs.
//!
//! `normalize-dyntype` turns configuration-like data into type descriptors:
//! a field-spec map becomes a record type, a name-to-value map becomes an
//! enumerated type. The produced definitions are immutable and expose a fixed
//! capability set ([`TypeDefinition`]) for introspection and iteration.
//!
//! # Architecture
//!
//! ```text
//! Input                     Factories               Output
//! ──────────────────    ───────────────────    ──────────────────
//! JSON field specs  ─┐                      ┌─> RecordType / EnumType
//! Tool ArgDefs      ─┼─> TypeFactory ───────┤
//! Type expressions  ─┘   (FactoryConfig)    └─> JSON Schema
//! ```
//!
//! # Example
//!
//! ```
//! use normalize_dyntype::{FieldSpec, TypeDefinition, TypeRef, create_enum_type, create_record_type};
//!
//! let model = create_record_type(
//!     "TestModel",
//!     [
//!         ("a", FieldSpec::new(TypeRef::Integer).with_description("")),
//!         ("b", FieldSpec::new(TypeRef::String).with_description("a label")),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(model.field("a").unwrap().description, None);
//! assert_eq!(model.field("b").unwrap().description.as_deref(), Some("a label"));
//!
//! let color = create_enum_type("Color", [("RED", 1), ("BLUE", 2)]).unwrap();
//! assert!(color.is_enumeration());
//! assert_eq!(*color.member("RED").unwrap().value(), 1i64);
//! ```
//!
//! # Declarative input
//!
//! ```
//! use normalize_dyntype::{TypeFactory, input};
//!
//! let factory = TypeFactory::default();
//! let model = input::record_type_from_json(
//!     &factory,
//!     "Query",
//!     &serde_json::json!({ "terms": { "type": "List[str]", "description": "Search terms" } }),
//! )
//! .unwrap();
//! assert_eq!(model.field("terms").unwrap().ty.to_string(), "List[str]");
//! ```

pub mod config;
pub mod enumeration;
pub mod error;
pub mod factory;
pub mod input;
pub mod ir;
pub mod output;
pub mod record;
pub mod traits;

pub use config::FactoryConfig;
pub use enumeration::{EnumMember, EnumMemberMap, EnumType, EnumTypeDefinition, create_enum_type};
pub use error::FactoryError;
pub use factory::TypeFactory;
pub use ir::{ScalarValue, TypeRef};
pub use record::{
    FieldSpec, FieldSpecMap, RecordField, RecordType, RecordTypeDefinition, create_record_type,
    create_record_type_with_description,
};
pub use traits::{StructureEq, TypeDefinition, TypeKind};
