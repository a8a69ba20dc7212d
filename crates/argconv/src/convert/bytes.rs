use argconv_buffers::{Charset, Writer};

use super::{require_bytes_target, traced, ArgumentConverter};
use crate::{BytesOptions, ConversionError, TypeDescriptor, Value};

/// Converts strings and numeric primitives into their byte layout.
///
/// Strings are encoded with the configured charset, resolved on each call.
/// Numbers are written at their natural width in the configured byte order.
#[derive(Debug, Clone, Default)]
pub struct BytesConverter {
    options: BytesOptions,
}

impl BytesConverter {
    pub fn new(options: BytesOptions) -> Self {
        Self { options }
    }

    fn encode(&self, source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        if source.is_null() {
            return Err(ConversionError::NullSource);
        }
        require_bytes_target(target)?;

        let mut writer = Writer::with_capacity(self.options.order, 8);
        match source {
            Value::String(s) => {
                let charset = Charset::for_name(&self.options.charset)?;
                return Ok(Value::Bytes(charset.encode(s)));
            }
            Value::I8(v) => writer.i8(*v),
            Value::U8(v) => writer.u8(*v),
            Value::I16(v) => writer.i16(*v),
            Value::I32(v) => writer.i32(*v),
            Value::I64(v) => writer.i64(*v),
            Value::F32(v) => writer.f32(*v),
            Value::F64(v) => writer.f64(*v),
            other => return Err(ConversionError::unsupported_source(other)),
        }
        Ok(Value::Bytes(writer.flush()))
    }
}

impl ArgumentConverter for BytesConverter {
    fn name(&self) -> &'static str {
        "bytes"
    }

    fn convert(&self, source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        traced(self.name(), source, target, || self.encode(source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteOrder, ErrorKind, ScalarType};

    fn convert(options: BytesOptions, source: impl Into<Value>) -> Result<Value, ConversionError> {
        BytesConverter::new(options).convert(&source.into(), &TypeDescriptor::bytes())
    }

    #[test]
    fn int_in_both_orders() {
        assert_eq!(
            convert(BytesOptions::new(), 0x12345678).unwrap(),
            Value::Bytes(vec![0x12, 0x34, 0x56, 0x78])
        );
        assert_eq!(
            convert(BytesOptions::new().order(ByteOrder::LittleEndian), 0x12345678).unwrap(),
            Value::Bytes(vec![0x78, 0x56, 0x34, 0x12])
        );
    }

    #[test]
    fn strings_use_charset() {
        assert_eq!(
            convert(BytesOptions::new(), "ä").unwrap(),
            Value::Bytes(vec![0xC3, 0xA4])
        );
        assert_eq!(
            convert(BytesOptions::new().charset("ISO-8859-1"), "ä").unwrap(),
            Value::Bytes(vec![0xE4])
        );
        assert_eq!(
            convert(BytesOptions::new().charset("US-ASCII"), "").unwrap(),
            Value::Bytes(vec![])
        );
    }

    #[test]
    fn unknown_charset() {
        let err = convert(BytesOptions::new().charset("KLINGON"), "a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedCharset);
        assert_eq!(err.to_string(), "Unsupported charset: KLINGON");
    }

    #[test]
    fn charset_is_only_resolved_for_strings() {
        assert_eq!(
            convert(BytesOptions::new().charset("KLINGON"), 1_i8).unwrap(),
            Value::Bytes(vec![1])
        );
    }

    #[test]
    fn rejections() {
        let err = convert(BytesOptions::new(), Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "'null' is not supported");

        let err = convert(BytesOptions::new(), Value::Bytes(vec![])).unwrap_err();
        assert_eq!(err.to_string(), "Source type [u8] is not supported");

        let err = convert(BytesOptions::new(), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSource);

        let err = BytesConverter::default()
            .convert(&Value::from(1), &TypeDescriptor::Scalar(ScalarType::I32))
            .unwrap_err();
        assert_eq!(err.to_string(), "Target type i32 is not supported");
    }
}
