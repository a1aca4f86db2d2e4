//! Record types built from field specifications.

use crate::error::FactoryError;
use crate::ir::TypeRef;
use crate::traits::{StructureEq, TypeDefinition, TypeKind};
use indexmap::IndexMap;
use serde::Serialize;
use std::ops::Deref;
use std::sync::Arc;

/// Declared shape of one record member.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub ty: TypeRef,
    /// Raw description as declared. `None` and `Some("")` both produce a
    /// member without a description.
    pub description: Option<String>,
    pub default: Option<serde_json::Value>,
}

impl FieldSpec {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            description: None,
            default: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Field name to spec, in declaration order.
pub type FieldSpecMap = IndexMap<String, FieldSpec>;

/// A member of a produced record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordField {
    pub name: String,
    pub ty: TypeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl RecordField {
    /// A field without a default must be supplied by every instance.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A named structural type whose members mirror a [`FieldSpecMap`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordTypeDefinition {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    fields: Vec<RecordField>,
}

impl RecordTypeDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Members in declaration order.
    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&RecordField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &RecordField> {
        self.fields.iter().filter(|f| f.is_required())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TypeDefinition for RecordTypeDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Record
    }

    fn member_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

impl StructureEq for RecordTypeDefinition {
    fn structure_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|f| other.field(&f.name) == Some(f))
    }
}

/// Handle to a produced record type.
///
/// Clones share one definition. Every factory call yields a new handle, so
/// [`is_same_type`](Self::is_same_type) distinguishes types that
/// [`StructureEq`] considers equivalent.
#[derive(Debug, Clone)]
pub struct RecordType(Arc<RecordTypeDefinition>);

impl RecordType {
    pub fn is_same_type(&self, other: &RecordType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn definition(&self) -> &RecordTypeDefinition {
        &self.0
    }
}

impl Deref for RecordType {
    type Target = RecordTypeDefinition;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl StructureEq for RecordType {
    fn structure_eq(&self, other: &Self) -> bool {
        self.0.structure_eq(&other.0)
    }
}

/// Collapse a declared description to present-or-absent.
///
/// Three input states (missing, empty, present) map onto two: the empty
/// string means "no description". With `blank_is_absent`, whitespace-only
/// strings collapse as well. Everything else is kept verbatim.
pub(crate) fn normalize_description(raw: Option<&str>, blank_is_absent: bool) -> Option<String> {
    let normalized = match raw {
        None => None,
        Some("") => None,
        Some(s) if blank_is_absent && s.trim().is_empty() => None,
        Some(s) => Some(s.to_string()),
    };
    if raw.is_some() && normalized.is_none() {
        tracing::trace!(raw = ?raw, "description normalized to absent");
    }
    normalized
}

pub(crate) fn build_record(
    name: &str,
    description: Option<&str>,
    fields: FieldSpecMap,
    blank_is_absent: bool,
) -> Result<RecordType, FactoryError> {
    crate::error::validate_name(name)?;
    for field_name in fields.keys() {
        crate::error::validate_name(field_name)?;
    }

    let fields: Vec<RecordField> = fields
        .into_iter()
        .map(|(field_name, spec)| RecordField {
            description: normalize_description(spec.description.as_deref(), blank_is_absent),
            name: field_name,
            ty: spec.ty,
            default: spec.default,
        })
        .collect();

    let definition = RecordTypeDefinition {
        name: name.to_string(),
        description: normalize_description(description, blank_is_absent),
        fields,
    };
    tracing::debug!(
        name = %definition.name,
        fields = definition.fields.len(),
        "built record type"
    );
    Ok(RecordType(Arc::new(definition)))
}

/// Build a record type with one member per field spec.
///
/// ```
/// use normalize_dyntype::{FieldSpec, TypeRef, create_record_type};
///
/// let model = create_record_type(
///     "TestModel",
///     [("a", FieldSpec::new(TypeRef::Integer).with_description(""))],
/// )
/// .unwrap();
/// assert_eq!(model.field("a").unwrap().description, None);
/// ```
pub fn create_record_type<K: Into<String>>(
    name: &str,
    fields: impl IntoIterator<Item = (K, FieldSpec)>,
) -> Result<RecordType, FactoryError> {
    crate::factory::TypeFactory::default().create_record_type(name, fields)
}

/// Like [`create_record_type`], also describing the record itself.
pub fn create_record_type_with_description<K: Into<String>>(
    name: &str,
    description: Option<&str>,
    fields: impl IntoIterator<Item = (K, FieldSpec)>,
) -> Result<RecordType, FactoryError> {
    crate::factory::TypeFactory::default().create_record_type_with_description(
        name,
        description,
        fields,
    )
}
