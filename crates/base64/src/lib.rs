//! Base64 decoding for argconv.
//!
//! Three schemes are supported, selected through [`Encoding`]:
//!
//! - [`Encoding::Basic`] - standard alphabet (`+/`)
//! - [`Encoding::Url`] - URL and filename safe alphabet (`-_`)
//! - [`Encoding::Mime`] - standard alphabet, ignoring line breaks and any
//!   other byte outside the alphabet
//!
//! Padding is optional on decode for every scheme but must be well formed
//! when present. Input validation happens here so that errors carry stable
//! messages; the bit arithmetic is done by the `base64` crate.
//!
//! # Example
//!
//! ```
//! use argconv_base64::{from_base64, Encoding};
//!
//! assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
//! assert_eq!(Encoding::Url.decode("Pz8_").unwrap(), vec![63, 63, 63]);
//! assert_eq!(Encoding::Mime.decode("Pz\r\n8/").unwrap(), vec![63, 63, 63]);
//! ```

mod decode;
mod encoding;

pub use decode::{from_base64, from_base64_mime, from_base64_url};
pub use encoding::Encoding;

/// Error type for base64 decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// A byte outside the scheme's alphabet; rendered in hex.
    #[error("Illegal base64 character {0:x}")]
    IllegalCharacter(u8),
    #[error("Input byte[] should at least have 2 bytes for base64 bytes")]
    TooShort,
    /// A single dangling symbol in the final unit.
    #[error("Last unit does not have enough valid bits")]
    LastUnit,
    #[error("Input byte array has wrong 4-byte ending unit")]
    WrongEndingUnit,
    /// Non-ignorable data after the padding. The position is the offending
    /// byte's offset, or one past it under MIME.
    #[error("Input byte array has incorrect ending byte at {0}")]
    TrailingByte(usize),
    #[error("base64 engine rejected input: {0}")]
    Engine(#[from] base64::DecodeError),
}
