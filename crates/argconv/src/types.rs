//! Statically declared target type descriptors.

use std::fmt;

use crate::Value;

/// A scalar element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    Char,
    I8,
    U8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
}

impl ScalarType {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Char => "char",
            ScalarType::I8 => "i8",
            ScalarType::U8 => "u8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::String => "String",
        }
    }
}

/// The raw (unparameterized) kind of a generic container type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawType {
    List,
    Collection,
    Iterable,
    Set,
    /// Any other generic type, e.g. `Map` or `Option`.
    Other(String),
}

impl RawType {
    pub fn name(&self) -> &str {
        match self {
            RawType::List => "List",
            RawType::Collection => "Collection",
            RawType::Iterable => "Iterable",
            RawType::Set => "Set",
            RawType::Other(name) => name,
        }
    }
}

/// Description of the type a conversion must produce.
///
/// Byte sequences are arrays of [`ScalarType::U8`]; see
/// [`TypeDescriptor::bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Scalar(ScalarType),
    /// A sequence whose length is fixed at conversion time.
    Array(Box<TypeDescriptor>),
    /// A generic type applied to its type arguments, e.g. `List<i32>`.
    Parameterized {
        raw: RawType,
        args: Vec<TypeDescriptor>,
    },
    /// An opaque named type, e.g. `Duration`.
    Named(String),
}

impl TypeDescriptor {
    /// `[u8]`, the target of every byte-producing converter.
    pub fn bytes() -> Self {
        Self::array(TypeDescriptor::Scalar(ScalarType::U8))
    }

    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    pub fn list(element: TypeDescriptor) -> Self {
        Self::parameterized(RawType::List, vec![element])
    }

    pub fn set(element: TypeDescriptor) -> Self {
        Self::parameterized(RawType::Set, vec![element])
    }

    pub fn parameterized(raw: RawType, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Parameterized { raw, args }
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, TypeDescriptor::Array(element) if **element == TypeDescriptor::Scalar(ScalarType::U8))
    }

    /// Whether this type holds other values (arrays and generic containers).
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Array(_) | TypeDescriptor::Parameterized { .. }
        )
    }

    /// Derives the runtime type of a value; `None` for [`Value::Null`].
    ///
    /// Element types of arrays and containers are taken from their first
    /// element; empty ones get the opaque element type `Value`.
    pub fn for_value(value: &Value) -> Option<TypeDescriptor> {
        let scalar = |ty| Some(TypeDescriptor::Scalar(ty));
        match value {
            Value::Null => None,
            Value::Bool(_) => scalar(ScalarType::Bool),
            Value::Char(_) => scalar(ScalarType::Char),
            Value::I8(_) => scalar(ScalarType::I8),
            Value::U8(_) => scalar(ScalarType::U8),
            Value::I16(_) => scalar(ScalarType::I16),
            Value::I32(_) => scalar(ScalarType::I32),
            Value::I64(_) => scalar(ScalarType::I64),
            Value::F32(_) => scalar(ScalarType::F32),
            Value::F64(_) => scalar(ScalarType::F64),
            Value::String(_) => scalar(ScalarType::String),
            Value::Bytes(_) => Some(TypeDescriptor::bytes()),
            Value::Array(items) => Some(TypeDescriptor::array(element_of(items.iter()))),
            Value::List(items) => Some(TypeDescriptor::list(element_of(items.iter()))),
            Value::Set(items) => Some(TypeDescriptor::set(element_of(items.iter()))),
        }
    }
}

fn element_of<'a>(mut items: impl Iterator<Item = &'a Value>) -> TypeDescriptor {
    items
        .next()
        .and_then(TypeDescriptor::for_value)
        .unwrap_or_else(|| TypeDescriptor::named("Value"))
}

impl From<ScalarType> for TypeDescriptor {
    fn from(scalar: ScalarType) -> Self {
        TypeDescriptor::Scalar(scalar)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Scalar(scalar) => f.write_str(scalar.name()),
            TypeDescriptor::Array(element) => write!(f, "[{element}]"),
            TypeDescriptor::Parameterized { raw, args } => {
                f.write_str(raw.name())?;
                if args.is_empty() {
                    return Ok(());
                }
                f.write_str("<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeDescriptor::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(TypeDescriptor::bytes().to_string(), "[u8]");
        assert_eq!(
            TypeDescriptor::list(ScalarType::I32.into()).to_string(),
            "List<i32>"
        );
        assert_eq!(
            TypeDescriptor::parameterized(
                RawType::Other("Map".into()),
                vec![ScalarType::String.into(), ScalarType::I64.into()]
            )
            .to_string(),
            "Map<String, i64>"
        );
        assert_eq!(
            TypeDescriptor::array(TypeDescriptor::array(ScalarType::Bool.into())).to_string(),
            "[[bool]]"
        );
        assert_eq!(TypeDescriptor::named("Duration").to_string(), "Duration");
    }

    #[test]
    fn bytes_is_array_of_u8() {
        assert!(TypeDescriptor::bytes().is_bytes());
        assert!(!TypeDescriptor::array(ScalarType::I8.into()).is_bytes());
        assert!(!TypeDescriptor::Scalar(ScalarType::U8).is_bytes());
    }

    #[test]
    fn for_value() {
        assert_eq!(TypeDescriptor::for_value(&Value::Null), None);
        assert_eq!(
            TypeDescriptor::for_value(&Value::from(1)),
            Some(ScalarType::I32.into())
        );
        assert_eq!(
            TypeDescriptor::for_value(&Value::Bytes(vec![1])),
            Some(TypeDescriptor::bytes())
        );
        assert_eq!(
            TypeDescriptor::for_value(&Value::Array(vec!["a".into()])),
            Some(TypeDescriptor::array(ScalarType::String.into()))
        );
        assert_eq!(
            TypeDescriptor::for_value(&Value::List(vec![])),
            Some(TypeDescriptor::list(TypeDescriptor::named("Value")))
        );
    }
}
