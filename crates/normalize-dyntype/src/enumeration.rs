//! Enumerated types built from name-to-value maps.

use crate::error::FactoryError;
use crate::ir::ScalarValue;
use crate::traits::{StructureEq, TypeDefinition, TypeKind};
use indexmap::IndexMap;
use serde::Serialize;
use std::ops::Deref;
use std::sync::Arc;

/// Member name to value, in declaration order.
pub type EnumMemberMap = IndexMap<String, ScalarValue>;

/// One member of an enumerated type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EnumMember {
    name: String,
    value: ScalarValue,
}

impl EnumMember {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ScalarValue {
        &self.value
    }
}

/// A named type whose members are exactly the declared entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumTypeDefinition {
    name: String,
    members: Vec<EnumMember>,
}

impl EnumTypeDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, EnumMember> {
        self.members.iter()
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// Look up a member by name, e.g. `RED` in `Color`.
    pub fn member(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// First declared member carrying `value`.
    ///
    /// Several members may share a value; later ones are still members but
    /// are never returned here.
    pub fn from_value(&self, value: &ScalarValue) -> Option<&EnumMember> {
        self.members.iter().find(|m| &m.value == value)
    }

    pub fn values(&self) -> impl Iterator<Item = &ScalarValue> {
        self.members.iter().map(|m| &m.value)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnumTypeDefinition {
    type Item = &'a EnumMember;
    type IntoIter = std::slice::Iter<'a, EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl TypeDefinition for EnumTypeDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Enumeration
    }

    fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }
}

impl StructureEq for EnumTypeDefinition {
    fn structure_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Handle to a produced enumerated type.
#[derive(Debug, Clone)]
pub struct EnumType(Arc<EnumTypeDefinition>);

impl EnumType {
    pub fn is_same_type(&self, other: &EnumType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn definition(&self) -> &EnumTypeDefinition {
        &self.0
    }
}

impl Deref for EnumType {
    type Target = EnumTypeDefinition;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a EnumType {
    type Item = &'a EnumMember;
    type IntoIter = std::slice::Iter<'a, EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.members.iter()
    }
}

impl StructureEq for EnumType {
    fn structure_eq(&self, other: &Self) -> bool {
        self.0.structure_eq(&other.0)
    }
}

pub(crate) fn build_enum(
    name: &str,
    members: EnumMemberMap,
    allow_empty: bool,
) -> Result<EnumType, FactoryError> {
    crate::error::validate_name(name)?;
    if members.is_empty() && !allow_empty {
        return Err(FactoryError::EmptyEnum {
            name: name.to_string(),
        });
    }
    for member_name in members.keys() {
        crate::error::validate_name(member_name)?;
    }

    let definition = EnumTypeDefinition {
        name: name.to_string(),
        members: members
            .into_iter()
            .map(|(name, value)| EnumMember { name, value })
            .collect(),
    };
    tracing::debug!(
        name = %definition.name,
        members = definition.members.len(),
        "built enum type"
    );
    Ok(EnumType(Arc::new(definition)))
}

/// Build an enumerated type whose members follow `members` in order.
///
/// Repeated names keep their first position and take the last value, as
/// when collecting into an [`EnumMemberMap`].
pub fn create_enum_type<K: Into<String>, V: Into<ScalarValue>>(
    name: &str,
    members: impl IntoIterator<Item = (K, V)>,
) -> Result<EnumType, FactoryError> {
    crate::factory::TypeFactory::default().create_enum_type(name, members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_enum() {
        let color = create_enum_type("Color", [("RED", 1), ("BLUE", 2)]).unwrap();
        assert!(color.is_enumeration());
        assert_eq!(color.member("RED").unwrap().value(), &ScalarValue::Int(1));
        assert_eq!(*color.member("BLUE").unwrap().value(), 2i64);
        let names: Vec<&str> = color.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["RED", "BLUE"]);
    }

    #[test]
    fn duplicate_values_stay_distinct() {
        let level = create_enum_type("Level", [("LOW", 0), ("MIN", 0), ("HIGH", 9)]).unwrap();
        assert_eq!(level.len(), 3);
        assert_eq!(level.member_names(), vec!["LOW", "MIN", "HIGH"]);
        assert_eq!(level.from_value(&ScalarValue::Int(0)).unwrap().name(), "LOW");
        assert_ne!(level.member("LOW"), level.member("MIN"));
    }

    #[test]
    fn string_values() {
        let status =
            create_enum_type("Status", [("ACTIVE", "active"), ("DONE", "done")]).unwrap();
        assert_eq!(
            status.from_value(&"done".into()).map(EnumMember::name),
            Some("DONE")
        );
        assert!(status.from_value(&"missing".into()).is_none());
    }

    #[test]
    fn repeated_name_keeps_position() {
        let e = create_enum_type("E", [("A", 1), ("B", 2), ("A", 3)]).unwrap();
        assert_eq!(e.member_names(), vec!["A", "B"]);
        assert_eq!(*e.member("A").unwrap().value(), 3i64);
    }

    #[test]
    fn empty_enum_rejected() {
        let err = create_enum_type::<&str, i64>("Nothing", []).unwrap_err();
        assert!(matches!(err, FactoryError::EmptyEnum { ref name } if name == "Nothing"));
    }

    #[test]
    fn invalid_names_rejected() {
        assert!(matches!(
            create_enum_type("", [("A", 1)]),
            Err(FactoryError::InvalidName { .. })
        ));
        assert!(matches!(
            create_enum_type("E", [(" ", 1)]),
            Err(FactoryError::InvalidName { .. })
        ));
    }

    #[test]
    fn distinct_but_structurally_equal() {
        let a = create_enum_type("Color", [("RED", 1), ("BLUE", 2)]).unwrap();
        let b = create_enum_type("Color", [("RED", 1), ("BLUE", 2)]).unwrap();
        assert!(!a.is_same_type(&b));
        assert!(a.structure_eq(&b));

        let reordered = create_enum_type("Color", [("BLUE", 2), ("RED", 1)]).unwrap();
        assert!(!a.structure_eq(&reordered));
    }

    #[test]
    fn handle_iterates_in_order() {
        let color = create_enum_type("Color", [("RED", 1), ("GREEN", 2), ("BLUE", 3)]).unwrap();
        let mut values = Vec::new();
        for member in &color {
            values.push(member.value().clone());
        }
        assert_eq!(
            values,
            vec![ScalarValue::Int(1), ScalarValue::Int(2), ScalarValue::Int(3)]
        );
    }
}
