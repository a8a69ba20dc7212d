//! Conversion of single string tokens to scalar element types.

use crate::{ConversionError, ScalarType, TypeDescriptor, Value};

/// Converts one string token into a value of the requested type.
///
/// Used by [`ElementsConverter`](crate::ElementsConverter) for every split
/// token. Implementations backed by a richer type registry can be injected in
/// place of [`DefaultTokenConverter`].
pub trait TokenConverter: Send + Sync {
    fn convert(&self, token: &str, target: &TypeDescriptor) -> Result<Value, ConversionError>;
}

/// Built-in conversions from strings to scalar types.
///
/// - `bool`: `true` or `false`, ignoring case
/// - `char`: exactly one character
/// - integers: optional sign, then decimal, `0x`/`0X`/`#` hexadecimal, or
///   octal with a leading `0`; out-of-range values are rejected
/// - floats: decimal or scientific notation, `inf` and `NaN`
/// - `String`: the token itself
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenConverter;

impl TokenConverter for DefaultTokenConverter {
    fn convert(&self, token: &str, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        let TypeDescriptor::Scalar(scalar) = target else {
            return Err(ConversionError::NoConverter {
                target: target.to_string(),
            });
        };
        let invalid = || ConversionError::InvalidToken {
            token: token.to_string(),
            target: target.to_string(),
        };
        let value = match scalar {
            ScalarType::Bool => parse_bool(token).map(Value::Bool),
            ScalarType::Char => single_char(token).map(Value::Char),
            ScalarType::I8 => decode_integer(token)
                .and_then(|n| i8::try_from(n).ok())
                .map(Value::I8),
            ScalarType::U8 => decode_integer(token)
                .and_then(|n| u8::try_from(n).ok())
                .map(Value::U8),
            ScalarType::I16 => decode_integer(token)
                .and_then(|n| i16::try_from(n).ok())
                .map(Value::I16),
            ScalarType::I32 => decode_integer(token)
                .and_then(|n| i32::try_from(n).ok())
                .map(Value::I32),
            ScalarType::I64 => decode_integer(token)
                .and_then(|n| i64::try_from(n).ok())
                .map(Value::I64),
            ScalarType::F32 => token.parse().ok().map(Value::F32),
            ScalarType::F64 => token.parse().ok().map(Value::F64),
            ScalarType::String => Some(Value::String(token.to_string())),
        };
        value.ok_or_else(invalid)
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn decode_integer(token: &str) -> Option<i128> {
    let (negative, rest) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    let (radix, digits) = if let Some(hex) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .or_else(|| rest.strip_prefix('#'))
    {
        (16, hex)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };
    // from_str_radix would accept a second sign.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
