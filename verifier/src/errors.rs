//! A list of error types which are produced while verifying a proof

use air::{AirError, ParamsError, ProofShapeError};
use crypto::RandomCoinError;
use displaydoc::Display;
use fri::FriError;
use thiserror::Error;

/// Represents an error thrown by the verifier during an execution of the protocol
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// Proof, parameters or public inputs are malformed: {0}
    MalformedInput(String),
    /// Public coin seed of the proof does not match the statement
    PublicCoinSeedMismatch,
    /// Query seed proof-of-work verification failed
    ProofOfWorkFailure,
    /// Queried values did not match the commitment: {0}
    CommitmentMismatch(String),
    /// Constraint evaluations at the out-of-domain point are inconsistent with the trace frame
    OodInconsistency,
    /// Out-of-domain point falls on a constraint divisor root
    DegenerateOodPoint,
    /// DEEP composition divisor vanishes at query position {0}
    DegenerateQueryPoint(usize),
    /// Verification of low-degree proof failed: {0}
    FriInconsistency(String),
    /// FRI remainder is not a valid degree {0} polynomial
    DegreeBoundViolation(usize),
    /// Only {0} distinct query positions were drawn but {1} are required
    InsufficientDistinctQueries(usize, usize),
}

impl From<ParamsError> for VerifierError {
    fn from(e: ParamsError) -> VerifierError {
        VerifierError::MalformedInput(e.to_string())
    }
}

impl From<ProofShapeError> for VerifierError {
    fn from(e: ProofShapeError) -> VerifierError {
        VerifierError::MalformedInput(e.to_string())
    }
}

impl From<AirError> for VerifierError {
    fn from(e: AirError) -> VerifierError {
        VerifierError::MalformedInput(e.to_string())
    }
}

impl From<RandomCoinError> for VerifierError {
    fn from(e: RandomCoinError) -> VerifierError {
        match e {
            RandomCoinError::InsufficientDistinctValues(found, requested) => {
                VerifierError::InsufficientDistinctQueries(found, requested)
            }
            RandomCoinError::InvalidIntegerWidth(_) => VerifierError::MalformedInput(e.to_string()),
        }
    }
}

impl From<FriError> for VerifierError {
    fn from(e: FriError) -> VerifierError {
        match e {
            FriError::InvalidProofShape(msg) => VerifierError::MalformedInput(msg),
            FriError::LayerCommitmentMismatch(depth) => {
                VerifierError::CommitmentMismatch(format!("FRI layer {}", depth))
            }
            FriError::RemainderCommitmentMismatch => {
                VerifierError::CommitmentMismatch(String::from("FRI remainder"))
            }
            FriError::InvalidLayerFolding(_) | FriError::InvalidRemainderFolding(_) => {
                VerifierError::FriInconsistency(e.to_string())
            }
            FriError::RemainderDegreeMismatch(degree) => {
                VerifierError::DegreeBoundViolation(degree)
            }
        }
    }
}
