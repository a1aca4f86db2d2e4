//! Building blocks shared by record and enum definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic type of a record member.
///
/// The record factory never inspects these beyond carrying them into the
/// produced definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeRef {
    /// Any value.
    Any,
    Null,
    Boolean,
    Integer,
    Float,
    String,
    /// Homogeneous sequence.
    Array(Box<TypeRef>),
    /// String-keyed (or otherwise keyed) mapping.
    Map {
        key: Box<TypeRef>,
        value: Box<TypeRef>,
    },
    /// `T` or null.
    Optional(Box<TypeRef>),
    /// One of several types.
    Union(Vec<TypeRef>),
    /// Reference to a named type, e.g. a previously built enum.
    Ref(String),
}

impl TypeRef {
    pub fn array(item: TypeRef) -> Self {
        TypeRef::Array(Box::new(item))
    }

    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        TypeRef::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn optional(inner: TypeRef) -> Self {
        TypeRef::Optional(Box::new(inner))
    }

    /// Whether null is an accepted value of this type.
    pub fn is_nullable(&self) -> bool {
        match self {
            TypeRef::Any | TypeRef::Null | TypeRef::Optional(_) => true,
            TypeRef::Union(types) => types.iter().any(TypeRef::is_nullable),
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Any => f.write_str("Any"),
            TypeRef::Null => f.write_str("None"),
            TypeRef::Boolean => f.write_str("bool"),
            TypeRef::Integer => f.write_str("int"),
            TypeRef::Float => f.write_str("float"),
            TypeRef::String => f.write_str("str"),
            TypeRef::Array(item) => write!(f, "List[{}]", item),
            TypeRef::Map { key, value } => write!(f, "Dict[{}, {}]", key, value),
            TypeRef::Optional(inner) => write!(f, "Optional[{}]", inner),
            TypeRef::Union(types) => {
                f.write_str("Union[")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", ty)?;
                }
                f.write_str("]")
            }
            TypeRef::Ref(name) => f.write_str(name),
        }
    }
}

/// Value carried by an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl ScalarValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ScalarValue::Bool(b) => serde_json::Value::Bool(*b),
            ScalarValue::Int(i) => serde_json::Value::from(*i),
            ScalarValue::Str(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int(value.into())
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Str(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Str(value)
    }
}

impl PartialEq<i64> for ScalarValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<&str> for ScalarValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
