use super::{require_bytes_target, traced, ArgumentConverter};
use crate::{ConversionError, TypeDescriptor, Value};

/// Decodes hex strings into bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexConverter;

impl HexConverter {
    fn decode(source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        if source.is_null() {
            return Err(ConversionError::NullSource);
        }
        require_bytes_target(target)?;
        let text = source
            .as_str()
            .ok_or_else(|| ConversionError::unsupported_source(source))?;
        Ok(Value::Bytes(argconv_hex::decode(text)?))
    }
}

impl ArgumentConverter for HexConverter {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn convert(&self, source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        traced(self.name(), source, target, || Self::decode(source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, HexError};

    fn convert(source: impl Into<Value>) -> Result<Value, ConversionError> {
        HexConverter.convert(&source.into(), &TypeDescriptor::bytes())
    }

    #[test]
    fn decodes() {
        assert_eq!(convert("").unwrap(), Value::Bytes(vec![]));
        assert_eq!(convert("0xcafe").unwrap(), Value::Bytes(vec![0xCA, 0xFE]));
    }

    #[test]
    fn malformed_input_keeps_position() {
        let err = convert("AG").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(matches!(
            err,
            ConversionError::Hex(HexError::InvalidDigit { position: 1 })
        ));
    }

    #[test]
    fn byte_sources_are_rejected() {
        let err = convert(Value::Bytes(vec![])).unwrap_err();
        assert_eq!(err.to_string(), "Source type [u8] is not supported");
    }

    #[test]
    fn null_source() {
        assert!(matches!(
            convert(Value::Null),
            Err(ConversionError::NullSource)
        ));
    }
}
