//! Aggregate converter holder.

use std::sync::Arc;

use crate::{
    Annotation, ArgumentConverter, Base64Converter, BytesConverter, ConversionError,
    ConversionService, DefaultTokenConverter, DelegatingConverter, ElementsConverter,
    HexConverter, TokenConverter, TypeDescriptor, Value,
};

/// Builds converters for annotations, sharing the injected capabilities.
///
/// By default tokens go through [`DefaultTokenConverter`] and no external
/// conversion service is available.
#[derive(Clone)]
pub struct Converters {
    tokens: Arc<dyn TokenConverter>,
    service: Option<Arc<dyn ConversionService>>,
}

impl Default for Converters {
    fn default() -> Self {
        Self::new()
    }
}

impl Converters {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(DefaultTokenConverter),
            service: None,
        }
    }

    pub fn with_token_converter(mut self, tokens: Arc<dyn TokenConverter>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_conversion_service(mut self, service: Arc<dyn ConversionService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Returns the converter an annotation selects.
    pub fn converter_for(&self, annotation: &Annotation) -> Box<dyn ArgumentConverter> {
        match annotation {
            Annotation::Bytes(options) => Box::new(BytesConverter::new(options.clone())),
            Annotation::Hex => Box::new(HexConverter),
            Annotation::Base64(options) => Box::new(Base64Converter::new(*options)),
            Annotation::Elements => Box::new(ElementsConverter::new(self.tokens.clone())),
            Annotation::Conversion => Box::new(match &self.service {
                Some(service) => DelegatingConverter::new(service.clone()),
                None => DelegatingConverter::unavailable(),
            }),
        }
    }

    /// Converts `source` with the converter `annotation` selects.
    pub fn convert(
        &self,
        annotation: &Annotation,
        source: &Value,
        target: &TypeDescriptor,
    ) -> Result<Value, ConversionError> {
        self.converter_for(annotation).convert(source, target)
    }
}
