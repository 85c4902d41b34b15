use displaydoc::Display;
use thiserror::Error;

/// Represents an error produced while verifying a FRI proof
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum FriError {
    /// FRI proof is malformed: {0}
    InvalidProofShape(String),
    /// FRI queries did not match layer commitment at depth {0}
    LayerCommitmentMismatch(usize),
    /// Evaluations did not match column value at depth {0}
    InvalidLayerFolding(usize),
    /// FRI remainder did not match the commitment
    RemainderCommitmentMismatch,
    /// Folded value of query {0} is inconsistent with the remainder
    InvalidRemainderFolding(usize),
    /// Remainder is not a valid degree {0} polynomial
    RemainderDegreeMismatch(usize),
}
