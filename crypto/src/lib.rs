//! Cryptographic primitives used by the STARK verifier: a field-native Poseidon hash, Merkle
//! trees built over it, and a hash-chain based public coin.

pub mod hash;
pub use hash::{ElementHasher, Poseidon};

pub mod merkle;
pub use merkle::MerkleTree;

pub mod random;
pub use random::RandomCoin;

mod errors;
pub use errors::{MerkleError, RandomCoinError};
