//! Fixed-width primitive reader with cursor tracking.

use crate::{BufferError, ByteOrder};

/// Reads numeric primitives from a byte slice in a chosen byte order.
///
/// # Example
///
/// ```
/// use argconv_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.u16().unwrap(), 0x0203);
/// assert!(reader.u8().is_err());
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    order: ByteOrder,
}

macro_rules! read_primitive {
    ($($(#[$doc:meta])* $name:ident: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(&mut self) -> Result<$ty, BufferError> {
                let bytes = self.take::<{ std::mem::size_of::<$ty>() }>()?;
                Ok(match self.order {
                    ByteOrder::BigEndian => <$ty>::from_be_bytes(bytes),
                    ByteOrder::LittleEndian => <$ty>::from_le_bytes(bytes),
                })
            }
        )*
    };
}

impl<'a> Reader<'a> {
    /// Creates a big-endian reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self::with_order(uint8, ByteOrder::BigEndian)
    }

    /// Creates a reader using the given byte order.
    pub fn with_order(uint8: &'a [u8], order: ByteOrder) -> Self {
        Self { uint8, x: 0, order }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let remaining = self.size();
        if remaining < N {
            return Err(BufferError::EndOfBuffer {
                needed: N,
                remaining,
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.uint8[self.x..self.x + N]);
        self.x += N;
        Ok(out)
    }

    read_primitive! {
        /// Reads an unsigned 8-bit integer.
        u8: u8;
        /// Reads a signed 8-bit integer.
        i8: i8;
        /// Reads an unsigned 16-bit integer.
        u16: u16;
        /// Reads a signed 16-bit integer.
        i16: i16;
        /// Reads an unsigned 32-bit integer.
        u32: u32;
        /// Reads a signed 32-bit integer.
        i32: i32;
        /// Reads an unsigned 64-bit integer.
        u64: u64;
        /// Reads a signed 64-bit integer.
        i64: i64;
        /// Reads a 32-bit float.
        f32: f32;
        /// Reads a 64-bit float.
        f64: f64;
    }
}
