use super::ElementHasher;
use math::{BaseElement, FieldElement};

mod constants;
use constants::{ARK, MDS};


// CONSTANTS
// ================================================================================================

/// The state consists of one capacity element followed by two rate elements.
const STATE_WIDTH: usize = 3;
const CAPACITY: usize = 1;
const RATE: usize = 2;

/// Position of the digest in the state after the final permutation.
const DIGEST_INDEX: usize = 0;

/// 8 full rounds (4 before and 4 after the partial rounds) and 57 partial rounds; the same
/// round split circomlib uses for a width-3 Poseidon over BN254.
const NUM_FULL_ROUNDS: usize = 8;
const NUM_PARTIAL_ROUNDS: usize = 57;
const NUM_ROUNDS: usize = NUM_FULL_ROUNDS + NUM_PARTIAL_ROUNDS;

/// S-box exponent; gcd(5, p - 1) = 1 for the BN254 scalar field.
const ALPHA: u64 = 5;

// POSEIDON HASHER
// ================================================================================================

/// Poseidon hash function over the BN254 scalar field with a width-3 state.
///
/// The digest is always the first element of the state after the final permutation. With this
/// layout [Poseidon::merge()] computes the same digest as circomlib's `Poseidon(2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poseidon;

impl ElementHasher for Poseidon {
    fn merge(values: &[BaseElement; 2]) -> BaseElement {
        let mut state = [BaseElement::ZERO, values[0], values[1]];
        permute(&mut state);
        state[DIGEST_INDEX]
    }

    fn hash_elements(values: &[BaseElement]) -> BaseElement {
        // the capacity element is initialized with the number of inputs; this makes inputs of
        // different lengths hash into different digests even when they differ by zero padding
        let mut state = [BaseElement::ZERO; STATE_WIDTH];
        state[0] = BaseElement::from(values.len() as u64);

        if values.is_empty() {
            permute(&mut state);
        }
        for chunk in values.chunks(RATE) {
            for (s, &v) in state[CAPACITY..].iter_mut().zip(chunk) {
                *s += v;
            }
            permute(&mut state);
        }

        state[DIGEST_INDEX]
    }
}

// PERMUTATION
// ================================================================================================

/// Applies the Poseidon permutation to the provided state.
fn permute(state: &mut [BaseElement; STATE_WIDTH]) {
    let half_full_rounds = NUM_FULL_ROUNDS / 2;
    for (round, constants) in ARK.iter().enumerate() {
        add_constants(state, constants);
        if round < half_full_rounds || round >= half_full_rounds + NUM_PARTIAL_ROUNDS {
            apply_sbox(state);
        } else {
            state[0] = state[0].exp(ALPHA);
        }
        apply_mds(state);
    }
}

// HELPER FUNCTIONS
// ================================================================================================

#[inline(always)]
fn add_constants(state: &mut [BaseElement; STATE_WIDTH], constants: &[BaseElement; STATE_WIDTH]) {
    for (s, &c) in state.iter_mut().zip(constants) {
        *s += c;
    }
}

#[inline(always)]
fn apply_sbox(state: &mut [BaseElement; STATE_WIDTH]) {
    for s in state.iter_mut() {
        *s = s.exp(ALPHA);
    }
}

#[inline(always)]
fn apply_mds(state: &mut [BaseElement; STATE_WIDTH]) {
    let mut result = [BaseElement::ZERO; STATE_WIDTH];
    for (r, row) in result.iter_mut().zip(MDS.iter()) {
        for (&m, &s) in row.iter().zip(state.iter()) {
            *r += m * s;
        }
    }
    *state = result;
}
