//! Property recording used to capture which property an accessor reads.
//!
//! [`PropertyRecorder`] stands in for a real schema instance. The
//! [`schema!`](crate::schema!) macro implements every declared schema trait
//! for it so that each getter records its own name and declared type instead
//! of returning real data.

use crate::error::{TemplateError, TemplateResult};
use crate::schema::Schema;
use crate::schema::types::PropertyType;
use log::trace;
use std::any::{Any, type_name};
use std::cell::Cell;
use std::fmt;

/// A property read observed by the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedProperty {
    /// Getter name as declared in the schema trait
    pub name: &'static str,
    /// Fully qualified name of the declared Rust type
    pub type_name: &'static str,
    /// Property kind, if the declared type is supported
    pub property_type: Option<PropertyType>,
}

impl RecordedProperty {
    fn of<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            type_name: type_name::<T>(),
            property_type: PropertyType::of::<T>(),
        }
    }
}

/// A property whose name and supported type have been captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedProperty {
    pub name: &'static str,
    pub property_type: PropertyType,
}

/// Synthetic schema instance that records property reads.
///
/// The recorder holds a single slot. Every read overwrites it, so when an
/// accessor touches several properties the last one wins.
#[derive(Default)]
pub struct PropertyRecorder {
    recorded: Cell<Option<RecordedProperty>>,
}

impl PropertyRecorder {
    /// Create a recorder with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a read of `name` and return a placeholder of the declared type.
    ///
    /// Called by the getters that [`schema!`](crate::schema!) generates.
    pub fn record<T: Any + Default>(&self, name: &'static str) -> T {
        let property = RecordedProperty::of::<T>(name);
        if let Some(previous) = self.recorded.replace(Some(property)) {
            trace!(
                "Property '{}' overwrites earlier read of '{}'",
                name, previous.name
            );
        }
        T::default()
    }

    /// Take the current recording, leaving the slot empty.
    pub fn take(&self) -> Option<RecordedProperty> {
        self.recorded.take()
    }

    /// Run `accessor` once against the recording view of `S` and resolve the
    /// property it read.
    ///
    /// # Errors
    ///
    /// * [`TemplateError::AccessorCapture`] if the accessor read nothing
    /// * [`TemplateError::UnsupportedPropertyType`] if the property's declared
    ///   type has no pattern
    pub fn capture<S, F, V>(&self, accessor: &F) -> TemplateResult<CapturedProperty>
    where
        S: Schema + ?Sized,
        F: Fn(&S) -> V,
    {
        self.recorded.set(None);
        let _placeholder = accessor(S::recording(self));
        let recorded = self.take().ok_or(TemplateError::AccessorCapture)?;

        let property_type = recorded
            .property_type
            .ok_or_else(|| TemplateError::unsupported_type(recorded.name, recorded.type_name))?;

        trace!(
            "Captured property '{}' of type {}",
            recorded.name, property_type
        );
        Ok(CapturedProperty {
            name: recorded.name,
            property_type,
        })
    }
}

impl fmt::Debug for PropertyRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PropertyRecorder")
    }
}

impl fmt::Display for PropertyRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PropertyRecorder")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::Decimal;

    crate::schema! {
        trait Gauge {
            fn count(&self) -> i32;
            fn label(&self) -> String;
            fn amount(&self) -> Decimal;
            fn initial(&self) -> char;
        }
    }

    #[test]
    fn test_record_returns_placeholder() {
        let recorder = PropertyRecorder::new();
        assert_eq!(recorder.record::<i32>("count"), 0);
        assert_eq!(recorder.record::<String>("label"), "");
        assert_eq!(recorder.record::<Decimal>("amount").to_string(), "0");
    }

    #[test]
    fn test_last_read_wins() {
        let recorder = PropertyRecorder::new();
        recorder.record::<i32>("count");
        recorder.record::<String>("label");

        let recorded = recorder.take().unwrap();
        assert_eq!(recorded.name, "label");
        assert_eq!(recorded.property_type, Some(PropertyType::Text));
        assert!(recorder.take().is_none());
    }

    #[test]
    fn test_capture_method_path() {
        let recorder = PropertyRecorder::new();
        let captured = recorder.capture::<dyn Gauge, _, _>(&Gauge::count).unwrap();
        assert_eq!(captured.name, "count");
        assert_eq!(captured.property_type, PropertyType::Int32);
    }

    #[test]
    fn test_capture_closure_reading_through() {
        let recorder = PropertyRecorder::new();
        let captured = recorder
            .capture::<dyn Gauge, _, _>(&|gauge| gauge.amount())
            .unwrap();
        assert_eq!(captured.name, "amount");
        assert_eq!(captured.property_type, PropertyType::Decimal);
    }

    #[test]
    fn test_capture_invokes_accessor_once() {
        let recorder = PropertyRecorder::new();
        let calls = Cell::new(0usize);
        let captured = recorder
            .capture::<dyn Gauge, _, _>(&|gauge| {
                calls.set(calls.get() + 1);
                gauge.label()
            })
            .unwrap();

        assert_eq!(captured.name, "label");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_capture_constant_function_fails() {
        let recorder = PropertyRecorder::new();
        let result = recorder.capture::<dyn Gauge, _, _>(&|_| 42);
        assert!(matches!(result, Err(TemplateError::AccessorCapture)));
    }

    #[test]
    fn test_capture_unsupported_type_fails() {
        let recorder = PropertyRecorder::new();
        match recorder.capture::<dyn Gauge, _, _>(&Gauge::initial) {
            Err(TemplateError::UnsupportedPropertyType {
                property,
                type_name,
            }) => {
                assert_eq!(property, "initial");
                assert_eq!(type_name, "char");
            }
            other => panic!("Expected UnsupportedPropertyType, got: {:?}", other),
        }
    }

    #[test]
    fn test_capture_clears_slot() {
        let recorder = PropertyRecorder::new();
        recorder
            .capture::<dyn Gauge, _, _>(&Gauge::label)
            .unwrap();
        assert!(recorder.take().is_none());

        // A stale recording must not leak into the next capture
        recorder.record::<i32>("count");
        let result = recorder.capture::<dyn Gauge, _, _>(&|_| ());
        assert!(matches!(result, Err(TemplateError::AccessorCapture)));
    }

    #[test]
    fn test_unsupported_operations_degrade() {
        let recorder = PropertyRecorder::new();
        assert_eq!(format!("{:?}", recorder), "PropertyRecorder");
        assert_eq!(recorder.to_string(), "PropertyRecorder");
    }
}
