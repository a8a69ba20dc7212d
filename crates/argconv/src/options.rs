//! Converter configuration.
//!
//! Options are fixed at the call site and deserialize from the same
//! constant names a declaration would use, with every field optional.

use argconv_base64::Encoding;
use argconv_buffers::ByteOrder;
use serde::{Deserialize, Serialize};

/// Options of [`BytesConverter`](crate::BytesConverter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BytesOptions {
    /// Charset for string sources; empty selects the default charset.
    pub charset: String,
    /// Byte order for numeric sources.
    pub order: ByteOrder,
}

impl BytesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }
}

/// Options of [`Base64Converter`](crate::Base64Converter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Base64Options {
    pub encoding: Encoding,
}

impl Base64Options {
    pub fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }
}
