//! Hexadecimal codec.
//!
//! Decoding is case-insensitive and accepts one optional `0x`/`0X` prefix.
//! It is strict about length parity and digit validity, and reports the
//! position of the first offending character.
//!
//! # Example
//!
//! ```
//! use argconv_hex::{decode, encode, HexError};
//!
//! assert_eq!(decode("0xCAFE").unwrap(), vec![0xCA, 0xFE]);
//! assert_eq!(encode(&[0xCA, 0xFE]), "cafe");
//! assert_eq!(decode("AG"), Err(HexError::InvalidDigit { position: 1 }));
//! ```

const PREFIX: &str = "0x";
const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Error type for hex decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("Hex string must have even length")]
    OddLength,
    #[error("Hex string must contain at least one hex digit after '0x' prefix")]
    MissingDigits,
    /// `position` is the 0-based character index after prefix stripping.
    #[error("Invalid hex character at position {position}")]
    InvalidDigit { position: usize },
}

/// Decodes a hex string into bytes.
///
/// A plain empty string decodes to an empty sequence, while a bare `0x`
/// prefix is rejected with [`HexError::MissingDigits`].
pub fn decode(source: &str) -> Result<Vec<u8>, HexError> {
    let digits = match strip_prefix(source) {
        Some("") => return Err(HexError::MissingDigits),
        Some(rest) => rest,
        None => source,
    };

    let chars: Vec<char> = digits.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    let mut bytes = Vec::with_capacity(chars.len() / 2);
    for (i, pair) in chars.chunks_exact(2).enumerate() {
        let hi = digit(pair[0], 2 * i)?;
        let lo = digit(pair[1], 2 * i + 1)?;
        bytes.push((hi << 4) | lo);
    }
    Ok(bytes)
}

/// Encodes bytes as a lowercase hex string without prefix.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(DIGITS[(byte >> 4) as usize] as char);
        out.push(DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}

fn strip_prefix(source: &str) -> Option<&str> {
    let head = source.get(..PREFIX.len())?;
    if head.eq_ignore_ascii_case(PREFIX) {
        Some(&source[PREFIX.len()..])
    } else {
        None
    }
}

fn digit(c: char, position: usize) -> Result<u8, HexError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(HexError::InvalidDigit { position })
}
