//! Named character encodings for string-to-bytes conversion.

/// Error returned when a charset name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharsetError {
    #[error("Unsupported charset: {0}")]
    Unsupported(String),
}

/// A character encoding that strings can be encoded with.
///
/// Names are matched case-insensitively against the canonical name and its
/// common aliases. An empty name resolves to the default charset, UTF-8.
///
/// # Example
///
/// ```
/// use argconv_buffers::Charset;
///
/// let charset = Charset::for_name("utf-16le").unwrap();
/// assert_eq!(charset.encode("a"), vec![0x61, 0x00]);
/// assert_eq!(Charset::for_name("").unwrap(), Charset::Utf8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    #[default]
    Utf8,
    UsAscii,
    Iso8859_1,
    /// Big-endian UTF-16 preceded by a `FE FF` byte-order mark.
    Utf16,
    Utf16Be,
    Utf16Le,
    /// Big-endian UTF-32 without a byte-order mark.
    Utf32,
    Utf32Le,
}

const REPLACEMENT: u8 = b'?';

const NAMES: &[(Charset, &[&str])] = &[
    (Charset::Utf8, &["UTF-8", "UTF8", "unicode-1-1-utf-8"]),
    (
        Charset::UsAscii,
        &["US-ASCII", "ASCII", "ISO646-US", "ANSI_X3.4-1968", "cp367", "646"],
    ),
    (
        Charset::Iso8859_1,
        &["ISO-8859-1", "ISO8859-1", "ISO8859_1", "ISO_8859-1", "latin1", "l1", "cp819"],
    ),
    (Charset::Utf16, &["UTF-16", "UTF16", "UTF_16"]),
    (Charset::Utf16Be, &["UTF-16BE", "UTF_16BE", "X-UTF-16BE"]),
    (Charset::Utf16Le, &["UTF-16LE", "UTF_16LE", "X-UTF-16LE"]),
    (Charset::Utf32, &["UTF-32", "UTF32", "UTF_32", "UTF-32BE", "UTF_32BE"]),
    (Charset::Utf32Le, &["UTF-32LE", "UTF_32LE"]),
];

impl Charset {
    /// Resolves a charset by name; an empty name yields the default charset.
    pub fn for_name(name: &str) -> Result<Self, CharsetError> {
        if name.is_empty() {
            return Ok(Charset::default());
        }
        NAMES
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name)))
            .map(|(charset, _)| *charset)
            .ok_or_else(|| CharsetError::Unsupported(name.to_string()))
    }

    /// Canonical name of this charset.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Utf16 => "UTF-16",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf32 => "UTF-32",
            Charset::Utf32Le => "UTF-32LE",
        }
    }

    /// Encodes `s` into bytes.
    ///
    /// Characters a single-byte charset cannot represent are replaced by `?`.
    pub fn encode(&self, s: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => s.as_bytes().to_vec(),
            Charset::UsAscii => single_byte(s, 0x7F),
            Charset::Iso8859_1 => single_byte(s, 0xFF),
            Charset::Utf16 => {
                if s.is_empty() {
                    return Vec::new();
                }
                let mut out = vec![0xFE, 0xFF];
                out.extend(s.encode_utf16().flat_map(u16::to_be_bytes));
                out
            }
            Charset::Utf16Be => s.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Charset::Utf16Le => s.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Charset::Utf32 => s.chars().flat_map(|c| (c as u32).to_be_bytes()).collect(),
            Charset::Utf32Le => s.chars().flat_map(|c| (c as u32).to_le_bytes()).collect(),
        }
    }
}

fn single_byte(s: &str, max: u32) -> Vec<u8> {
    s.chars()
        .map(|c| {
            let code = c as u32;
            if code <= max {
                code as u8
            } else {
                REPLACEMENT
            }
        })
        .collect()
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
