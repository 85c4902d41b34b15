//! Error types produced by Merkle tree and public coin operations.

use displaydoc::Display;
use thiserror::Error;

/// Represents an error produced while building or checking Merkle trees
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum MerkleError {
    /// Number of leaves ({0}) must be a power of two
    NumberOfLeavesNotPowerOfTwo(usize),
    /// Leaf index {0} is out of bounds for a tree with {1} leaves
    LeafIndexOutOfBounds(usize, usize),
    /// Merkle path for leaf {0} has {1} nodes but {2} were expected
    InvalidPathLength(usize, usize, usize),
    /// Merkle path for leaf {0} does not resolve to the committed root
    RootMismatch(usize),
    /// Number of leaves ({0}) does not match the number of paths ({1})
    MismatchedOpeningCount(usize, usize),
}

/// Represents an error produced while drawing values from a public coin
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum RandomCoinError {
    /// Only {0} distinct integers were drawn but {1} were requested
    InsufficientDistinctValues(usize, usize),
    /// Cannot draw integers wider than {0} bits
    InvalidIntegerWidth(u32),
}
