use super::{require_bytes_target, traced, ArgumentConverter};
use crate::{Base64Options, ConversionError, TypeDescriptor, Value};

/// Decodes base64 text, given as a string or as its raw bytes, with the
/// configured scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Converter {
    options: Base64Options,
}

impl Base64Converter {
    pub fn new(options: Base64Options) -> Self {
        Self { options }
    }

    fn decode(&self, source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        if source.is_null() {
            return Err(ConversionError::NullSource);
        }
        require_bytes_target(target)?;
        let encoding = self.options.encoding;
        let decoded = if let Some(text) = source.as_str() {
            encoding.decode(text)?
        } else if let Some(raw) = source.as_bytes() {
            encoding.decode_bytes(raw)?
        } else {
            return Err(ConversionError::unsupported_source(source));
        };
        Ok(Value::Bytes(decoded))
    }
}

impl ArgumentConverter for Base64Converter {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn convert(&self, source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        traced(self.name(), source, target, || self.decode(source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Base64Error, Encoding, ErrorKind};

    fn convert(encoding: Encoding, source: impl Into<Value>) -> Result<Value, ConversionError> {
        Base64Converter::new(Base64Options::new(encoding))
            .convert(&source.into(), &TypeDescriptor::bytes())
    }

    #[test]
    fn strings_and_bytes_decode_alike() {
        for encoding in [Encoding::Basic, Encoding::Url, Encoding::Mime] {
            assert_eq!(
                convert(encoding, "AAA=").unwrap(),
                convert(encoding, Value::Bytes(b"AAA=".to_vec())).unwrap()
            );
        }
    }

    #[test]
    fn scheme_errors_are_surfaced_verbatim() {
        let err = convert(Encoding::Basic, "  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.to_string(), "Illegal base64 character 20");
        assert!(matches!(
            err,
            ConversionError::Base64(Base64Error::IllegalCharacter(0x20))
        ));
    }

    #[test]
    fn unsupported_source() {
        let err = convert(Encoding::Basic, 42).unwrap_err();
        assert_eq!(err.to_string(), "Source type i32 is not supported");
    }
}
