//! Statement-side components of the verifier: the [Air] trait describing a computation, the
//! [ProofParams] a proof is generated against, and the [StarkProof] layout.

mod air;
pub use air::{Air, AirContext, Assertion, EvaluationFrame, TraceInfo};

mod params;
pub use params::ProofParams;

mod proof;
pub use proof::StarkProof;

mod errors;
pub use errors::{AirError, AssertionError, ParamsError, ProofShapeError};
