use super::TraceInfo;
use crate::errors::AirError;
use core::cmp;
use math::{log2, BaseElement, StarkField};

// AIR CONTEXT
// ================================================================================================

/// Degrees and domain sizes implied by an AIR.
///
/// With trace length `n` and constraint evaluation blowup `m`, the composition polynomial has
/// degree `T = m * n - 1`. Every constraint quotient is lifted to degree `T` by multiplying it by a
/// power of `x`; the exponents are returned by [AirContext::transition_degree_adjustment()] and
/// [AirContext::boundary_degree_adjustment()].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirContext {
    trace_info: TraceInfo,
    transition_constraint_degrees: Vec<usize>,
    num_assertions: usize,
    ce_blowup_factor: usize,
    trace_domain_generator: BaseElement,
}

impl AirContext {
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------

    /// Returns a new context for a computation with the specified trace dimensions, transition
    /// constraint degrees and number of assertions.
    pub fn new(
        trace_info: TraceInfo,
        transition_constraint_degrees: Vec<usize>,
        num_assertions: usize,
    ) -> Result<Self, AirError> {
        if trace_info.width() == 0 {
            return Err(AirError::TraceWidthTooShort);
        }
        let trace_length = trace_info.length();
        if !trace_length.is_power_of_two() || trace_length < 4 {
            return Err(AirError::InvalidTraceLength(trace_length));
        }
        if transition_constraint_degrees.is_empty() {
            return Err(AirError::NoTransitionConstraints);
        }
        if let Some(i) = transition_constraint_degrees.iter().position(|&d| d == 0) {
            return Err(AirError::InvalidConstraintDegree(i));
        }
        if num_assertions == 0 {
            return Err(AirError::NoAssertionsSpecified);
        }

        // quotients of degree-D constraints have degree (D - 1)(n - 1) < (D - 1) n, so the
        // composition polynomial fits into next_pow2(D - 1) columns of n coefficients each
        let max_degree = transition_constraint_degrees.iter().copied().max().unwrap_or(1);
        let ce_blowup_factor = cmp::max(1, (max_degree - 1).next_power_of_two());

        Ok(AirContext {
            trace_info,
            transition_constraint_degrees,
            num_assertions,
            ce_blowup_factor,
            trace_domain_generator: BaseElement::get_root_of_unity(log2(trace_length)),
        })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    pub fn trace_info(&self) -> TraceInfo {
        self.trace_info
    }

    pub fn trace_length(&self) -> usize {
        self.trace_info.length()
    }

    pub fn trace_width(&self) -> usize {
        self.trace_info.width()
    }

    pub fn num_transition_constraints(&self) -> usize {
        self.transition_constraint_degrees.len()
    }

    pub fn num_assertions(&self) -> usize {
        self.num_assertions
    }

    /// Number of columns the composition polynomial is split into.
    pub fn ce_blowup_factor(&self) -> usize {
        self.ce_blowup_factor
    }

    /// Generator of the trace domain.
    pub fn trace_domain_generator(&self) -> BaseElement {
        self.trace_domain_generator
    }

    /// Degree of the composition polynomial.
    pub fn composition_degree(&self) -> usize {
        self.ce_blowup_factor * self.trace_length() - 1
    }

    /// Power of `x` which lifts the quotient of transition constraint `i` to the composition
    /// degree.
    pub fn transition_degree_adjustment(&self, i: usize) -> usize {
        let degree = self.transition_constraint_degrees[i];
        self.composition_degree() - (degree - 1) * (self.trace_length() - 1)
    }

    /// Power of `x` which lifts the quotient of an assertion to the composition degree.
    pub fn boundary_degree_adjustment(&self) -> usize {
        self.composition_degree() - (self.trace_length() - 2)
    }
}
