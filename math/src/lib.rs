//! Field and polynomial arithmetic over the BN254 scalar field.
//!
//! Everything the verifier computes is expressed through [BaseElement](field::BaseElement), the
//! scalar field of the BN254 curve. Keeping the verifier inside this field is what allows the
//! same verification procedure to be compiled into an arithmetic circuit over BN254.

pub mod bits;
pub mod field;
pub mod polynom;

mod errors;
pub use errors::{BitDecompositionError, ElementDecodingError};

mod utils;
pub use utils::log2;

pub use field::{BaseElement, FieldElement, StarkField};
