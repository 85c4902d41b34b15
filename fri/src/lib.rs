//! FRI low-degree test, verifier side.
//!
//! The verifier checks that a set of queried evaluations belongs to a polynomial of bounded
//! degree over a multiplicative coset. Every layer folds `folding_factor` evaluations into one by
//! interpolating them and evaluating the interpolant at a random `alpha`; the last layer (the
//! remainder) is sent in full and checked directly.
//!
//! The folding and commitment helpers are public so that a prover can build layers that this
//! verifier accepts.

pub mod folding;

mod options;
pub use options::FriOptions;

mod verifier;
pub use verifier::{
    verify, verify_remainder, DefaultVerifierChannel, VerifierChannel, VerifierContext,
};

pub mod utils;

mod errors;
pub use errors::FriError;
