//! Byte order selection.

use serde::{Deserialize, Serialize};

/// Order in which the bytes of a multibyte value are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Returns the opposite byte order.
    pub fn reverse(self) -> Self {
        match self {
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::BigEndian => f.write_str("BIG_ENDIAN"),
            ByteOrder::LittleEndian => f.write_str("LITTLE_ENDIAN"),
        }
    }
}
