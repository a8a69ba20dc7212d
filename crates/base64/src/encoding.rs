//! Scheme selection and per-scheme engines.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};

use crate::decode::decode_with;
use crate::Base64Error;

// Symbols reach the engines already validated and stripped of padding.
const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::RequireNone)
    .with_decode_allow_trailing_bits(true);

pub(crate) static STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);
pub(crate) static URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, CONFIG);

const STANDARD_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// A Base64 encoding scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Encoding {
    /// The basic scheme (RFC 4648 section 4).
    #[default]
    Basic,
    /// The URL and filename safe scheme (RFC 4648 section 5).
    Url,
    /// The MIME scheme (RFC 2045): standard alphabet, non-alphabet bytes ignored.
    Mime,
}

impl Encoding {
    /// The 64-character alphabet of this scheme.
    pub fn alphabet(&self) -> &'static str {
        match self {
            Encoding::Basic | Encoding::Mime => STANDARD_SYMBOLS,
            Encoding::Url => URL_SAFE_SYMBOLS,
        }
    }

    /// Whether bytes outside the alphabet are skipped rather than rejected.
    pub fn is_lenient(&self) -> bool {
        matches!(self, Encoding::Mime)
    }

    pub(crate) fn engine(&self) -> &'static GeneralPurpose {
        match self {
            Encoding::Basic | Encoding::Mime => &STANDARD,
            Encoding::Url => &URL_SAFE,
        }
    }

    /// Decodes base64 text.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, Base64Error> {
        decode_with(*self, encoded.as_bytes())
    }

    /// Decodes base64 text given as its raw encoded bytes.
    pub fn decode_bytes(&self, encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
        decode_with(*self, encoded)
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Basic => f.write_str("BASIC"),
            Encoding::Url => f.write_str("URL"),
            Encoding::Mime => f.write_str("MIME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_basic() {
        assert_eq!(Encoding::default(), Encoding::Basic);
    }

    #[test]
    fn deserializes_from_constant_names() {
        let cases = [
            ("\"BASIC\"", Encoding::Basic),
            ("\"URL\"", Encoding::Url),
            ("\"MIME\"", Encoding::Mime),
        ];
        for (json, expected) in cases {
            assert_eq!(serde_json::from_str::<Encoding>(json).unwrap(), expected);
        }
        assert!(serde_json::from_str::<Encoding>("\"HEX\"").is_err());
    }

    #[test]
    fn alphabets() {
        assert!(Encoding::Basic.alphabet().ends_with("+/"));
        assert!(Encoding::Url.alphabet().ends_with("-_"));
        assert_eq!(Encoding::Mime.alphabet(), Encoding::Basic.alphabet());
    }
}
