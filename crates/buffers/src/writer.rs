//! Fixed-width primitive writer.

use crate::ByteOrder;

/// Writes numeric primitives into an auto-growing buffer.
///
/// Every primitive occupies exactly its natural width (1, 2, 4 or 8 bytes);
/// floats are written as their IEEE-754 bit patterns.
///
/// # Example
///
/// ```
/// use argconv_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.i16(0x0203);
/// assert_eq!(writer.flush(), vec![0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    uint8: Vec<u8>,
    order: ByteOrder,
}

macro_rules! write_primitive {
    ($($(#[$doc:meta])* $name:ident: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(&mut self, value: $ty) {
                match self.order {
                    ByteOrder::BigEndian => self.uint8.extend_from_slice(&value.to_be_bytes()),
                    ByteOrder::LittleEndian => self.uint8.extend_from_slice(&value.to_le_bytes()),
                }
            }
        )*
    };
}

impl Writer {
    /// Creates a big-endian writer.
    pub fn new() -> Self {
        Self::with_order(ByteOrder::BigEndian)
    }

    /// Creates a writer using the given byte order.
    pub fn with_order(order: ByteOrder) -> Self {
        Self {
            uint8: Vec::new(),
            order,
        }
    }

    /// Creates a writer with preallocated capacity.
    pub fn with_capacity(order: ByteOrder, capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
            order,
        }
    }

    write_primitive! {
        /// Writes an unsigned 8-bit integer.
        u8: u8;
        /// Writes a signed 8-bit integer.
        i8: i8;
        /// Writes a signed 16-bit integer.
        i16: i16;
        /// Writes an unsigned 16-bit integer.
        u16: u16;
        /// Writes a signed 32-bit integer.
        i32: i32;
        /// Writes an unsigned 32-bit integer.
        u32: u32;
        /// Writes a signed 64-bit integer.
        i64: i64;
        /// Writes an unsigned 64-bit integer.
        u64: u64;
        /// Writes a 32-bit float.
        f32: f32;
        /// Writes a 64-bit float.
        f64: f64;
    }

    /// Takes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }
}
