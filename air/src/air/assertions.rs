use super::TraceInfo;
use crate::errors::AssertionError;
use core::fmt::{Display, Formatter};
use math::BaseElement;

// ASSERTION
// ================================================================================================

/// Requires the value in `column` at `step` of the execution trace to equal `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assertion {
    column: usize,
    step: usize,
    value: BaseElement,
}

impl Assertion {
    pub fn single(column: usize, step: usize, value: BaseElement) -> Self {
        Assertion {
            column,
            step,
            value,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn value(&self) -> BaseElement {
        self.value
    }

    /// Checks that the assertion addresses a cell of a trace with the specified dimensions.
    pub fn validate(&self, trace_info: &TraceInfo) -> Result<(), AssertionError> {
        if self.column >= trace_info.width() {
            return Err(AssertionError::InvalidColumnIndex(self.column));
        }
        if self.step >= trace_info.length() {
            return Err(AssertionError::InvalidAssertionStep(self.step));
        }
        Ok(())
    }

    /// Returns true if both assertions address the same cell.
    pub fn overlaps_with(&self, other: &Assertion) -> bool {
        self.column == other.column && self.step == other.step
    }
}

impl Display for Assertion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "(column={}, step={}, value={})", self.column, self.step, self.value)
    }
}

/// Checks every assertion against the trace dimensions and makes sure no cell is asserted twice.
pub fn validate_assertions(
    assertions: &[Assertion],
    trace_info: &TraceInfo,
) -> Result<(), AssertionError> {
    for (i, assertion) in assertions.iter().enumerate() {
        assertion.validate(trace_info)?;
        if assertions[..i].iter().any(|a| a.overlaps_with(assertion)) {
            return Err(AssertionError::DuplicateAssertion(
                assertion.column,
                assertion.step,
            ));
        }
    }
    Ok(())
}
