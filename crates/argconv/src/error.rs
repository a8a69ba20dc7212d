//! Conversion failures.

use argconv_base64::Base64Error;
use argconv_buffers::CharsetError;
use argconv_hex::HexError;

use crate::{TypeDescriptor, Value};

/// Error type for every converter.
///
/// Codec failures wrap the codec's own error, which stays reachable through
/// [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("'null' is not supported")]
    NullSource,
    #[error("Source type {type_name} is not supported")]
    UnsupportedSource { type_name: String },
    #[error("Target type {type_name} is not supported")]
    UnsupportedTarget { type_name: String },
    #[error("{0}")]
    Hex(#[from] HexError),
    #[error("{0}")]
    Base64(#[from] Base64Error),
    #[error("{0}")]
    Charset(#[from] CharsetError),
    #[error("No converter available for source type String and target type {target}")]
    NoConverter { target: String },
    #[error("Failed to convert String \"{token}\" to type {target}")]
    InvalidToken { token: String, target: String },
    #[error("Conversion service is not available")]
    ServiceUnavailable,
    /// A failure reported by an external conversion service.
    #[error("{0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullSource,
    UnsupportedSource,
    UnsupportedTarget,
    MalformedInput,
    UnsupportedCharset,
    /// A token or delegated value could not be converted to its type.
    Conversion,
    ServiceUnavailable,
}

impl ConversionError {
    pub fn unsupported_source(source: &Value) -> Self {
        ConversionError::UnsupportedSource {
            type_name: source.type_name().to_string(),
        }
    }

    pub fn unsupported_target(target: &TypeDescriptor) -> Self {
        ConversionError::UnsupportedTarget {
            type_name: target.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::NullSource => ErrorKind::NullSource,
            ConversionError::UnsupportedSource { .. } => ErrorKind::UnsupportedSource,
            ConversionError::UnsupportedTarget { .. } => ErrorKind::UnsupportedTarget,
            ConversionError::Hex(_) | ConversionError::Base64(_) => ErrorKind::MalformedInput,
            ConversionError::Charset(_) => ErrorKind::UnsupportedCharset,
            ConversionError::NoConverter { .. }
            | ConversionError::InvalidToken { .. }
            | ConversionError::Service(_) => ErrorKind::Conversion,
            ConversionError::ServiceUnavailable => ErrorKind::ServiceUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::ScalarType;

    #[test]
    fn messages() {
        assert_eq!(
            ConversionError::NullSource.to_string(),
            "'null' is not supported"
        );
        assert_eq!(
            ConversionError::unsupported_source(&Value::I32(42)).to_string(),
            "Source type i32 is not supported"
        );
        assert_eq!(
            ConversionError::unsupported_target(&TypeDescriptor::list(ScalarType::I32.into()))
                .to_string(),
            "Target type List<i32> is not supported"
        );
        assert_eq!(
            ConversionError::InvalidToken {
                token: "x".into(),
                target: "i32".into()
            }
            .to_string(),
            "Failed to convert String \"x\" to type i32"
        );
    }

    #[test]
    fn codec_errors_keep_their_message_and_cause() {
        let err = ConversionError::from(HexError::OddLength);
        assert_eq!(err.to_string(), "Hex string must have even length");
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        let cause = err.source().and_then(|s| s.downcast_ref::<HexError>());
        assert_eq!(cause, Some(&HexError::OddLength));
    }

    #[test]
    fn kinds() {
        assert_eq!(
            ConversionError::from(CharsetError::Unsupported("x".into())).kind(),
            ErrorKind::UnsupportedCharset
        );
        assert_eq!(
            ConversionError::ServiceUnavailable.kind(),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            ConversionError::NoConverter {
                target: "Duration".into()
            }
            .kind(),
            ErrorKind::Conversion
        );
    }
}
