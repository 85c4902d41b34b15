//! A list of error types produced while checking statements, parameters and proofs

use displaydoc::Display;
use thiserror::Error;

/// Represents an error in a set of proof parameters
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParamsError {
    /// Execution trace length ({0}) is not a power of two
    TraceLengthNotPowerOfTwo(usize),
    /// Execution trace length ({0}) must be at least 4
    TraceTooShort(usize),
    /// {0} blowup factor ({1}) is not a power of two
    BlowupFactorNotPowerOfTwo(&'static str, usize),
    /// Folding factor ({0}) must be a power of two greater than 1
    InvalidFoldingFactor(usize),
    /// Two-adicity {0} does not match the two-adicity of the field ({1})
    InvalidAddicity(u32, u32),
    /// Domain of size {0} does not fit into the two-adic subgroup of order 2^{1}
    DomainTooLarge(usize, u32),
    /// Domain offset must be nonzero
    ZeroDomainOffset,
    /// Parameter {0} must be nonzero
    ZeroParameter(&'static str),
    /// Number of queries ({0}) exceeds the LDE domain size ({1})
    TooManyQueries(usize, usize),
    /// Number of draws ({0}) is smaller than the number of queries ({1})
    TooFewDraws(usize, usize),
    /// Trace length ({0}) is not divisible by the folding factor raised to {1}
    InvalidFriLayerCount(usize, usize),
    /// FRI remainder of {0} values cannot be split into rows of {1}
    RemainderTooSmall(usize, usize),
    /// Grinding factor ({0}) must be smaller than 64
    GrindingFactorTooLarge(u32),
    /// Public coin seed must contain {1} elements, but {0} were specified
    InvalidCoinSeedSize(usize, usize),
    /// Security level of {0} bits cannot be evaluated
    SecurityLevelTooHigh(u32),
    /// Collecting {0} distinct queries needs more than {1} draws
    TooManyDrawsNeeded(usize, usize),
    /// Number of public inputs ({0}) is too large
    TooManyPublicInputs(usize),
}

/// Represents a proof component whose length does not match the proof parameters
#[derive(Debug, Error, PartialEq, Eq)]
#[error("proof component {0} has {1} elements, but {2} were expected")]
pub struct ProofShapeError(pub String, pub usize, pub usize);

/// Represents an error thrown while instantiating an AIR
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum AirError {
    /// Execution trace must be at least one column wide
    TraceWidthTooShort,
    /// Execution trace length ({0}) must be a power of two greater than 2
    InvalidTraceLength(usize),
    /// At least one transition constraint must be specified
    NoTransitionConstraints,
    /// Transition constraint {0} has degree 0
    InvalidConstraintDegree(usize),
    /// At least one assertion must be specified
    NoAssertionsSpecified,
    /// AIR declares {1} assertions, but returned {0}
    AssertionCountMismatch(usize, usize),
    /// AIR expects {1} public inputs, but {0} were provided
    InvalidPublicInputs(usize, usize),
    /// Invalid assertion: {0}
    Assertion(#[from] AssertionError),
}

/// Represents an assertion which cannot be placed against the execution trace
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum AssertionError {
    /// Invalid column index {0}
    InvalidColumnIndex(usize),
    /// Invalid assertion step {0}
    InvalidAssertionStep(usize),
    /// Duplicate assertion for (column={0}, step={1})
    DuplicateAssertion(usize, usize),
}
