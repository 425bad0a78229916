//! Field-constraint collection for partial records.

use retrofit_core::ValidationError;

/// Accumulates constraint violations in field order.
#[derive(Debug, Default)]
pub(crate) struct Checker {
    violations: Vec<ValidationError>,
}

impl Checker {
    /// Record a violation at `field` unless `ok` holds.
    pub(crate) fn require(
        &mut self,
        ok: bool,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) {
        if !ok {
            self.violations.push(ValidationError::constraint(field, reason));
        }
    }

    /// Require a list, when present, to be non-empty.
    pub(crate) fn non_empty<T>(&mut self, list: Option<&[T]>, field: &str) {
        if let Some(list) = list {
            self.require(!list.is_empty(), field, "must contain at least one entry");
        }
    }

    /// Require a percentage, when present, to lie in 0..=100.
    pub(crate) fn percentage(&mut self, value: Option<f64>, field: &str) {
        if let Some(v) = value {
            self.require((0.0..=100.0).contains(&v), field, "must be between 0 and 100");
        }
    }

    pub(crate) fn finish(self) -> Vec<ValidationError> {
        self.violations
    }
}
