//! Type expressions such as `List[str]` or `Optional[int]`.
//!
//! Accepts both Python-style spellings (`str`, `Dict[str, int]`, `int | None`)
//! and JSON Schema primitive names (`string`, `integer`, `array`). Any other
//! bare identifier is kept as a [`TypeRef::Ref`] to a named type.

use crate::error::FactoryError;
use crate::ir::TypeRef;

/// Deepest `[` nesting accepted in a type expression.
const MAX_DEPTH: usize = 128;

/// Parse a type expression into a [`TypeRef`].
pub fn parse_type(expr: &str) -> Result<TypeRef, FactoryError> {
    let mut parser = TypeParser::new(expr);
    let ty = parser.parse_union()?;
    parser.skip_ws();
    if let Some(c) = parser.peek() {
        return Err(parser.error(format!("unexpected `{}`", c)));
    }
    Ok(ty)
}

struct TypeParser<'a> {
    source: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> TypeParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            depth: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> FactoryError {
        FactoryError::InvalidType {
            expr: self.source.to_string(),
            reason: reason.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn parse_union(&mut self) -> Result<TypeRef, FactoryError> {
        let mut types = vec![self.parse_term()?];
        while self.eat('|') {
            types.push(self.parse_term()?);
        }
        Ok(simplify_union(types))
    }

    fn parse_term(&mut self) -> Result<TypeRef, FactoryError> {
        let name = self.parse_ident()?;
        let args = if self.eat('[') {
            if self.depth >= MAX_DEPTH {
                return Err(self.error("type expression nested too deeply"));
            }
            self.depth += 1;
            let mut args = vec![self.parse_union()?];
            while self.eat(',') {
                args.push(self.parse_union()?);
            }
            if !self.eat(']') {
                return Err(self.error(format!("unclosed `[` after `{}`", name)));
            }
            self.depth -= 1;
            Some(args)
        } else {
            None
        };
        self.resolve(name, args)
    }

    fn parse_ident(&mut self) -> Result<&'a str, FactoryError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '.' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        if start == self.pos {
            return Err(match self.peek() {
                Some(c) => self.error(format!("expected a type name, found `{}`", c)),
                None => self.error("expected a type name"),
            });
        }
        Ok(&self.source[start..self.pos])
    }

    fn resolve(&self, name: &str, args: Option<Vec<TypeRef>>) -> Result<TypeRef, FactoryError> {
        let base = name.strip_prefix("typing.").unwrap_or(name);
        let Some(mut args) = args else {
            return Ok(match base {
                "str" | "string" => TypeRef::String,
                "int" | "integer" => TypeRef::Integer,
                "float" | "number" => TypeRef::Float,
                "bool" | "boolean" => TypeRef::Boolean,
                "None" | "NoneType" | "null" => TypeRef::Null,
                "Any" | "any" => TypeRef::Any,
                "list" | "List" | "array" | "set" | "Set" | "tuple" | "Tuple" => {
                    TypeRef::array(TypeRef::Any)
                }
                "dict" | "Dict" | "object" => TypeRef::map(TypeRef::String, TypeRef::Any),
                _ => TypeRef::Ref(name.to_string()),
            });
        };

        match base {
            "list" | "List" | "Sequence" | "set" | "Set" => {
                self.expect_arity(base, &args, 1)?;
                Ok(TypeRef::array(args.remove(0)))
            }
            "dict" | "Dict" | "Mapping" => {
                self.expect_arity(base, &args, 2)?;
                let value = args.remove(1);
                let key = args.remove(0);
                Ok(TypeRef::map(key, value))
            }
            "Optional" => {
                self.expect_arity(base, &args, 1)?;
                Ok(simplify_union(vec![args.remove(0), TypeRef::Null]))
            }
            "Union" => Ok(simplify_union(args)),
            _ => Err(self.error(format!("`{}` does not take type arguments", name))),
        }
    }

    fn expect_arity(&self, name: &str, args: &[TypeRef], arity: usize) -> Result<(), FactoryError> {
        if args.len() == arity {
            Ok(())
        } else {
            Err(self.error(format!(
                "`{}` takes {} type argument(s), got {}",
                name,
                arity,
                args.len()
            )))
        }
    }
}

/// Flatten nested unions and fold `T | None` into `Optional[T]`.
fn simplify_union(types: Vec<TypeRef>) -> TypeRef {
    let mut flat: Vec<TypeRef> = Vec::new();
    let mut nullable = false;
    for ty in types {
        let parts = match ty {
            TypeRef::Union(inner) => inner,
            TypeRef::Optional(inner) => {
                nullable = true;
                vec![*inner]
            }
            other => vec![other],
        };
        for part in parts {
            if part == TypeRef::Null {
                nullable = true;
            } else if !flat.contains(&part) {
                flat.push(part);
            }
        }
    }

    let base = match flat.len() {
        0 => return TypeRef::Null,
        1 => flat.remove(0),
        _ => TypeRef::Union(flat),
    };
    if nullable {
        TypeRef::optional(base)
    } else {
        base
    }
}
