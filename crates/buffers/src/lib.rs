//! Byte layout utilities for argconv.
//!
//! This crate turns single numeric primitives and strings into byte
//! sequences:
//!
//! - [`Writer`] - Writes fixed-width primitives in a chosen [`ByteOrder`]
//! - [`Reader`] - Reads them back with cursor tracking
//! - [`Charset`] - Encodes strings with a named character encoding
//! - [`Octets`] - Hex display of byte sequences for logging
//!
//! # Example
//!
//! ```
//! use argconv_buffers::{ByteOrder, Reader, Writer};
//!
//! let mut writer = Writer::with_order(ByteOrder::LittleEndian);
//! writer.i32(0x12345678);
//! let data = writer.flush();
//! assert_eq!(data, vec![0x78, 0x56, 0x34, 0x12]);
//!
//! let mut reader = Reader::with_order(&data, ByteOrder::LittleEndian);
//! assert_eq!(reader.i32().unwrap(), 0x12345678);
//! ```

mod byte_order;
mod charset;
mod octets;
mod reader;
mod writer;

pub use byte_order::ByteOrder;
pub use charset::{Charset, CharsetError};
pub use octets::Octets;
pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
}
