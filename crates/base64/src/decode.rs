//! Scheme-aware base64 decoding.

use base64::Engine;

use crate::{Base64Error, Encoding};

const PAD: u8 = b'=';

/// Decodes a standard base64 string to bytes.
///
/// # Example
///
/// ```
/// use argconv_base64::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    Encoding::Basic.decode(encoded)
}

/// Decodes a URL-safe base64 string to bytes.
///
/// This expects the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and accepts missing padding.
///
/// ```
/// use argconv_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    Encoding::Url.decode(encoded)
}

/// Decodes a MIME base64 string to bytes, skipping line breaks.
///
/// ```
/// use argconv_base64::from_base64_mime;
///
/// assert_eq!(from_base64_mime("aGVs\r\nbG8=").unwrap(), b"hello");
/// ```
pub fn from_base64_mime(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    Encoding::Mime.decode(encoded)
}

pub(crate) fn decode_with(encoding: Encoding, input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let symbols = collect_symbols(encoding, input)?;
    if symbols.is_empty() {
        return Ok(Vec::new());
    }
    Ok(encoding.engine().decode(&symbols)?)
}

/// Validates `input` against the scheme and returns its alphabet symbols
/// with padding and ignorable bytes removed.
fn collect_symbols(encoding: Encoding, input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.len() < 2 && !encoding.is_lenient() {
        return Err(Base64Error::TooShort);
    }

    let alphabet = encoding.alphabet().as_bytes();
    let is_symbol = |b: u8| alphabet.contains(&b);

    let mut symbols = Vec::with_capacity(input.len());
    let mut pos = 0;
    while pos < input.len() {
        let b = input[pos];
        pos += 1;
        if is_symbol(b) {
            symbols.push(b);
            continue;
        }
        if b == PAD {
            // Symbols already seen in the current 4-symbol unit.
            match symbols.len() % 4 {
                0 => return Err(Base64Error::WrongEndingUnit),
                2 => {
                    if input.get(pos) != Some(&PAD) {
                        return Err(Base64Error::WrongEndingUnit);
                    }
                    pos += 1;
                }
                _ => {}
            }
            break;
        }
        if !encoding.is_lenient() {
            return Err(Base64Error::IllegalCharacter(b));
        }
    }

    if symbols.len() % 4 == 1 {
        return Err(Base64Error::LastUnit);
    }

    for (offset, &b) in input.iter().enumerate().skip(pos) {
        if !encoding.is_lenient() {
            return Err(Base64Error::TrailingByte(offset));
        }
        // The lenient scan has already consumed the offending byte.
        if is_symbol(b) {
            return Err(Base64Error::TrailingByte(offset + 1));
        }
    }

    Ok(symbols)
}
