use std::fmt;

/// Displays a byte sequence as space separated lowercase hex pairs.
///
/// Output is capped at [`Octets::DEFAULT_LIMIT`] bytes unless another limit
/// is given; the remainder is summarized. Formatting happens only when the
/// value is displayed, so it is cheap to pass to disabled log statements.
///
/// ```
/// use argconv_buffers::Octets;
///
/// assert_eq!(Octets::new(&[0x01, 0x02, 0x0a, 0xff]).to_string(), "01 02 0a ff");
/// assert_eq!(Octets::with_limit(&[1, 2, 3], 2).to_string(), "01 02 ... (1 more)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Octets<'a> {
    bytes: &'a [u8],
    limit: usize,
}

impl<'a> Octets<'a> {
    pub const DEFAULT_LIMIT: usize = 16;

    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_limit(bytes, Self::DEFAULT_LIMIT)
    }

    pub fn with_limit(bytes: &'a [u8], limit: usize) -> Self {
        Self { bytes, limit }
    }
}

impl fmt::Display for Octets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().take(self.limit).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        if self.bytes.len() > self.limit {
            write!(f, " ... ({} more)", self.bytes.len() - self.limit)?;
        }
        Ok(())
    }
}
