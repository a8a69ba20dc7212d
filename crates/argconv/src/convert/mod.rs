//! Converters invoked by the host framework.

mod base64;
mod bytes;
mod delegating;
mod elements;
mod hex;

pub use self::base64::Base64Converter;
pub use self::bytes::BytesConverter;
pub use self::delegating::{ConversionService, DelegatingConverter};
pub use self::elements::{ElementsConverter, TargetShape};
pub use self::hex::HexConverter;

use argconv_buffers::Octets;

use crate::{ConversionError, TypeDescriptor, Value};

/// A converter selected by the host for one parameter or field.
///
/// `source` is the raw argument ([`Value::Null`] when absent) and `target`
/// the statically declared type of the parameter. Conversion is
/// all-or-nothing and has no side effects.
pub trait ArgumentConverter: Send + Sync {
    fn name(&self) -> &'static str;
    fn convert(&self, source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError>;
}

fn traced<F>(
    converter: &'static str,
    source: &Value,
    target: &TypeDescriptor,
    convert: F,
) -> Result<Value, ConversionError>
where
    F: FnOnce() -> Result<Value, ConversionError>,
{
    tracing::trace!(converter, source = source.type_name(), %target, "converting argument");
    let result = convert();
    match &result {
        Ok(Value::Bytes(bytes)) => {
            tracing::trace!(converter, output = %Octets::new(bytes), "converted argument");
        }
        Ok(_) => {}
        Err(error) => tracing::debug!(converter, %target, %error, "argument conversion failed"),
    }
    result
}

fn require_bytes_target(target: &TypeDescriptor) -> Result<(), ConversionError> {
    if target.is_bytes() {
        Ok(())
    } else {
        Err(ConversionError::unsupported_target(target))
    }
}
