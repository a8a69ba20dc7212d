//! Typed argument converters for parameterized test frameworks.
//!
//! A host framework hands each converter a raw source [`Value`] and the
//! statically declared [`TypeDescriptor`] of the parameter, and gets back
//! either a converted value or a [`ConversionError`].
//!
//! | Converter | Source | Target |
//! |---|---|---|
//! | [`BytesConverter`] | string, 8/16/32/64-bit integer, 32/64-bit float | `[u8]` |
//! | [`HexConverter`] | hex string | `[u8]` |
//! | [`Base64Converter`] | base64 string or its raw bytes | `[u8]` |
//! | [`ElementsConverter`] | comma-delimited string | array, list, set |
//! | [`DelegatingConverter`] | anything | anything the service supports |
//!
//! # Example
//!
//! ```
//! use argconv::{Annotation, Converters, ScalarType, TypeDescriptor, Value};
//!
//! let converters = Converters::new();
//!
//! let bytes = converters
//!     .convert(&Annotation::Hex, &Value::from("0xCAFE"), &TypeDescriptor::bytes())
//!     .unwrap();
//! assert_eq!(bytes, Value::Bytes(vec![0xCA, 0xFE]));
//!
//! let list = converters
//!     .convert(
//!         &Annotation::Elements,
//!         &Value::from("1, 2, 3"),
//!         &TypeDescriptor::list(TypeDescriptor::Scalar(ScalarType::I32)),
//!     )
//!     .unwrap();
//! assert_eq!(list, Value::List(vec![1.into(), 2.into(), 3.into()]));
//! ```

mod annotation;
mod convert;
mod error;
mod options;
mod registry;
mod token;
mod types;
mod value;

pub use annotation::Annotation;
pub use convert::{
    ArgumentConverter, Base64Converter, BytesConverter, ConversionService, DelegatingConverter,
    ElementsConverter, HexConverter, TargetShape,
};
pub use error::{ConversionError, ErrorKind};
pub use options::{Base64Options, BytesOptions};
pub use registry::Converters;
pub use token::{DefaultTokenConverter, TokenConverter};
pub use types::{RawType, ScalarType, TypeDescriptor};
pub use value::Value;

pub use argconv_base64::{Base64Error, Encoding};
pub use argconv_buffers::{ByteOrder, Charset, CharsetError};
pub use argconv_hex::HexError;
