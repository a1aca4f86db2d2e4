//! Configured entry point for both factories.

use crate::config::FactoryConfig;
use crate::enumeration::{EnumMemberMap, EnumType, build_enum};
use crate::error::FactoryError;
use crate::ir::ScalarValue;
use crate::record::{FieldSpec, FieldSpecMap, RecordType, build_record};

/// Builds record and enum types under a [`FactoryConfig`].
///
/// Holds no state besides its configuration; calls never affect each other.
#[derive(Debug, Clone, Default)]
pub struct TypeFactory {
    config: FactoryConfig,
}

impl TypeFactory {
    pub fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn create_record_type<K: Into<String>>(
        &self,
        name: &str,
        fields: impl IntoIterator<Item = (K, FieldSpec)>,
    ) -> Result<RecordType, FactoryError> {
        self.create_record_type_with_description(name, None, fields)
    }

    pub fn create_record_type_with_description<K: Into<String>>(
        &self,
        name: &str,
        description: Option<&str>,
        fields: impl IntoIterator<Item = (K, FieldSpec)>,
    ) -> Result<RecordType, FactoryError> {
        let fields: FieldSpecMap = fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        build_record(
            name,
            description,
            fields,
            self.config.blank_descriptions_absent,
        )
    }

    pub fn create_enum_type<K: Into<String>, V: Into<ScalarValue>>(
        &self,
        name: &str,
        members: impl IntoIterator<Item = (K, V)>,
    ) -> Result<EnumType, FactoryError> {
        let members: EnumMemberMap = members
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        build_enum(name, members, self.config.allow_empty_enums)
    }
}
