//! Declarations that select a converter for a parameter.

use serde::{Deserialize, Serialize};

use crate::{Base64Options, BytesOptions};

/// The declaration attached to a parameter or field, with its options.
///
/// Deserializes from an object tagged with `kind`; omitted options take
/// their defaults:
///
/// ```
/// use argconv::{Annotation, ByteOrder, BytesOptions};
///
/// let annotation: Annotation =
///     serde_json::from_str(r#"{"kind":"bytes","order":"LITTLE_ENDIAN"}"#).unwrap();
/// assert_eq!(
///     annotation,
///     Annotation::Bytes(BytesOptions::new().order(ByteOrder::LittleEndian))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    Bytes(BytesOptions),
    Hex,
    Base64(Base64Options),
    Elements,
    /// Delegation to the external conversion service.
    Conversion,
}
