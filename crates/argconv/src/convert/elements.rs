use std::sync::Arc;

use indexmap::IndexSet;

use super::{traced, ArgumentConverter};
use crate::{
    ConversionError, DefaultTokenConverter, RawType, ScalarType, TokenConverter, TypeDescriptor,
    Value,
};

const DELIMITER: char = ',';

/// The container shape a delimited string is converted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetShape {
    /// An array with one slot per token.
    FixedArray(TypeDescriptor),
    /// A list keeping split order (`List`, `Collection` or `Iterable`).
    OrderedContainer(TypeDescriptor),
    /// A set; duplicate elements collapse.
    UniqueContainer(TypeDescriptor),
}

impl TargetShape {
    /// Resolves the shape of a declared target type.
    ///
    /// Element types that are themselves containers are not supported.
    pub fn resolve(target: &TypeDescriptor) -> Result<Self, ConversionError> {
        let unsupported = || ConversionError::unsupported_target(target);
        match target {
            TypeDescriptor::Array(element) if !element.is_container() => {
                Ok(TargetShape::FixedArray((**element).clone()))
            }
            TypeDescriptor::Parameterized { raw, args } => {
                let [element] = args.as_slice() else {
                    return Err(unsupported());
                };
                if element.is_container() {
                    return Err(unsupported());
                }
                match raw {
                    RawType::List | RawType::Collection | RawType::Iterable => {
                        Ok(TargetShape::OrderedContainer(element.clone()))
                    }
                    RawType::Set => Ok(TargetShape::UniqueContainer(element.clone())),
                    RawType::Other(_) => Err(unsupported()),
                }
            }
            _ => Err(unsupported()),
        }
    }

    pub fn element(&self) -> &TypeDescriptor {
        match self {
            TargetShape::FixedArray(element)
            | TargetShape::OrderedContainer(element)
            | TargetShape::UniqueContainer(element) => element,
        }
    }

    fn assemble(&self, values: Vec<Value>) -> Value {
        match self {
            TargetShape::FixedArray(element) => into_array(element, values),
            TargetShape::OrderedContainer(_) => Value::List(values),
            TargetShape::UniqueContainer(_) => Value::Set(values.into_iter().collect::<IndexSet<_>>()),
        }
    }
}

// Arrays of u8 are byte sequences.
fn into_array(element: &TypeDescriptor, values: Vec<Value>) -> Value {
    if *element == TypeDescriptor::Scalar(ScalarType::U8) {
        let bytes: Option<Vec<u8>> = values
            .iter()
            .map(|value| match value {
                Value::U8(b) => Some(*b),
                _ => None,
            })
            .collect();
        if let Some(bytes) = bytes {
            return Value::Bytes(bytes);
        }
    }
    Value::Array(values)
}

/// Splits a string on `,`, trims every token and converts each one to the
/// element type of the declared array, list or set.
///
/// An empty source yields a single empty token, and every delimiter yields
/// a token, trailing ones included.
#[derive(Clone)]
pub struct ElementsConverter {
    tokens: Arc<dyn TokenConverter>,
}

impl Default for ElementsConverter {
    fn default() -> Self {
        Self::new(Arc::new(DefaultTokenConverter))
    }
}

impl std::fmt::Debug for ElementsConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementsConverter").finish_non_exhaustive()
    }
}

impl ElementsConverter {
    pub fn new(tokens: Arc<dyn TokenConverter>) -> Self {
        Self { tokens }
    }

    /// Splits `source` into trimmed tokens.
    ///
    /// Empty tokens at the end of the source are dropped before trimming, so
    /// `"1, 2,"` has two tokens and `","` none. A source without any
    /// delimiter is a single token, even when empty.
    pub fn split(source: &str) -> Vec<&str> {
        let mut tokens: Vec<&str> = source.split(DELIMITER).collect();
        if tokens.len() > 1 {
            while tokens.last().is_some_and(|token| token.is_empty()) {
                tokens.pop();
            }
        }
        tokens.into_iter().map(str::trim).collect()
    }

    fn convert_elements(
        &self,
        source: &Value,
        target: &TypeDescriptor,
    ) -> Result<Value, ConversionError> {
        let text = match source {
            Value::Null => return Err(ConversionError::NullSource),
            Value::String(s) => s,
            other => return Err(ConversionError::unsupported_source(other)),
        };
        let shape = TargetShape::resolve(target)?;
        let element = shape.element();
        let values = Self::split(text)
            .into_iter()
            .map(|token| self.tokens.convert(token, element))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(shape.assemble(values))
    }
}

impl ArgumentConverter for ElementsConverter {
    fn name(&self) -> &'static str {
        "elements"
    }

    fn convert(&self, source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        traced(self.name(), source, target, || {
            self.convert_elements(source, target)
        })
    }
}
