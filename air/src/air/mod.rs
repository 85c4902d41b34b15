use crate::errors::AirError;
use math::{BaseElement, FieldElement};

mod trace_info;
pub use trace_info::TraceInfo;

mod context;
pub use context::AirContext;

mod assertions;
pub use assertions::{validate_assertions, Assertion};

mod frame;
pub use frame::EvaluationFrame;


// AIR TRAIT
// ================================================================================================

/// Describes a computation by a set of transition constraints over two consecutive trace rows
/// and a set of assertions against single trace cells.
pub trait Air: Send + Sync {
    // REQUIRED METHODS
    // --------------------------------------------------------------------------------------------

    /// Instantiates the AIR for a trace of the specified dimensions and the specified public
    /// inputs.
    fn new(trace_info: TraceInfo, public_inputs: &[BaseElement]) -> Result<Self, AirError>
    where
        Self: Sized;

    /// Returns the context of this AIR.
    fn context(&self) -> &AirContext;

    /// Evaluates all transition constraints over `frame` and writes the results into `result`.
    /// All results must be zero for a frame of a valid execution trace.
    fn evaluate_transition<E: FieldElement + From<BaseElement>>(
        &self,
        frame: &EvaluationFrame<E>,
        result: &mut [E],
    );

    /// Returns the assertions placed against the execution trace.
    fn get_assertions(&self) -> Vec<Assertion>;

    // PROVIDED METHODS
    // --------------------------------------------------------------------------------------------

    fn trace_info(&self) -> TraceInfo {
        self.context().trace_info()
    }

    fn trace_length(&self) -> usize {
        self.context().trace_length()
    }

    fn trace_width(&self) -> usize {
        self.context().trace_width()
    }

    fn ce_blowup_factor(&self) -> usize {
        self.context().ce_blowup_factor()
    }

    fn num_transition_constraints(&self) -> usize {
        self.context().num_transition_constraints()
    }

    fn trace_domain_generator(&self) -> BaseElement {
        self.context().trace_domain_generator()
    }

    /// Evaluates transition constraints over `frame` and returns the results in a new vector.
    fn transition_evaluations<E: FieldElement + From<BaseElement>>(
        &self,
        frame: &EvaluationFrame<E>,
    ) -> Vec<E> {
        let mut result = vec![E::ZERO; self.num_transition_constraints()];
        self.evaluate_transition(frame, &mut result);
        result
    }

    /// Returns the assertions of this AIR after checking them against the trace dimensions.
    fn get_validated_assertions(&self) -> Result<Vec<Assertion>, AirError> {
        let assertions = self.get_assertions();
        if assertions.len() != self.context().num_assertions() {
            return Err(AirError::AssertionCountMismatch(
                assertions.len(),
                self.context().num_assertions(),
            ));
        }
        validate_assertions(&assertions, &self.trace_info())?;
        Ok(assertions)
    }
}
