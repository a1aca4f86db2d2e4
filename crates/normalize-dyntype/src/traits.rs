//! Capabilities shared by every produced type definition.

/// What sort of type a definition describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Named fields, each with a type and optional description.
    Record,
    /// A closed set of named values.
    Enumeration,
}

/// Introspection over a produced type.
///
/// Both [`RecordTypeDefinition`](crate::RecordTypeDefinition) and
/// [`EnumTypeDefinition`](crate::EnumTypeDefinition) implement this, so
/// callers can treat built types uniformly:
///
/// ```
/// use normalize_dyntype::{TypeDefinition, create_enum_type};
///
/// let color = create_enum_type("Color", [("RED", 1), ("BLUE", 2)]).unwrap();
/// assert!(color.is_enumeration());
/// assert_eq!(color.member_names(), vec!["RED", "BLUE"]);
/// ```
pub trait TypeDefinition {
    /// The identifier the type was created with.
    fn name(&self) -> &str;

    fn kind(&self) -> TypeKind;

    /// Member names in declaration order.
    fn member_names(&self) -> Vec<&str>;

    fn is_enumeration(&self) -> bool {
        self.kind() == TypeKind::Enumeration
    }

    fn is_record(&self) -> bool {
        self.kind() == TypeKind::Record
    }
}

/// Structural equality between produced types.
///
/// Unlike `PartialEq`, this ignores details that don't change what the type
/// describes. Record field order is one of them; enum member order is not,
/// since iteration order is part of an enum's behaviour.
pub trait StructureEq {
    fn structure_eq(&self, other: &Self) -> bool;
}
