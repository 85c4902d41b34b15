use math::FieldElement;

// EVALUATION FRAME
// ================================================================================================

/// Two consecutive rows of an execution trace; transition constraints are evaluated against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationFrame<E: FieldElement> {
    pub current: Vec<E>,
    pub next: Vec<E>,
}

impl<E: FieldElement> EvaluationFrame<E> {
    pub fn from_rows(current: Vec<E>, next: Vec<E>) -> Self {
        debug_assert_eq!(current.len(), next.len(), "frame rows must have the same width");
        EvaluationFrame { current, next }
    }
}
