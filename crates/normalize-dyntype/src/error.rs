//! Errors raised while building type definitions.

/// Error that can occur when constructing a record or enum type.
///
/// Construction is atomic: when any of these is returned, no definition
/// was produced.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("field `{field}` is missing required attribute `{attribute}`")]
    MissingFieldAttribute {
        field: String,
        attribute: &'static str,
    },

    #[error("enum `{name}` must declare at least one member")]
    EmptyEnum { name: String },

    #[error("invalid type expression `{expr}`: {reason}")]
    InvalidType { expr: String, reason: String },

    #[error("malformed spec: {0}")]
    Malformed(String),

    #[error("invalid factory config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("could not read factory config: {0}")]
    Io(#[from] std::io::Error),
}

/// Check a type, field, or member name.
///
/// Names must contain at least one non-whitespace character.
pub(crate) fn validate_name(name: &str) -> Result<(), FactoryError> {
    if name.is_empty() {
        return Err(FactoryError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty",
        });
    }
    if name.trim().is_empty() {
        return Err(FactoryError::InvalidName {
            name: name.to_string(),
            reason: "name must not be whitespace only",
        });
    }
    Ok(())
}
