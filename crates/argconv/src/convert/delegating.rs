use std::sync::Arc;

use super::{traced, ArgumentConverter};
use crate::{ConversionError, TypeDescriptor, Value};

/// An external service able to convert between arbitrary type pairs.
///
/// `source_type` is the runtime type of `source`, `None` when it is
/// [`Value::Null`].
pub trait ConversionService: Send + Sync {
    fn convert(
        &self,
        source: &Value,
        source_type: Option<&TypeDescriptor>,
        target: &TypeDescriptor,
    ) -> Result<Value, ConversionError>;
}

/// Forwards every conversion to a [`ConversionService`].
///
/// Without a service every call fails with
/// [`ConversionError::ServiceUnavailable`].
#[derive(Clone, Default)]
pub struct DelegatingConverter {
    service: Option<Arc<dyn ConversionService>>,
}

impl std::fmt::Debug for DelegatingConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatingConverter")
            .field("available", &self.is_available())
            .finish()
    }
}

impl DelegatingConverter {
    pub fn new(service: Arc<dyn ConversionService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    pub fn unavailable() -> Self {
        Self { service: None }
    }

    pub fn is_available(&self) -> bool {
        self.service.is_some()
    }
}

impl ArgumentConverter for DelegatingConverter {
    fn name(&self) -> &'static str {
        "conversion"
    }

    fn convert(&self, source: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
        traced(self.name(), source, target, || {
            let service = self
                .service
                .as_ref()
                .ok_or(ConversionError::ServiceUnavailable)?;
            let source_type = TypeDescriptor::for_value(source);
            service.convert(source, source_type.as_ref(), target)
        })
    }
}
