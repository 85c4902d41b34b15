//! Poseidon parameters for the BN254 scalar field, width 3.
//!
//! Round constants and the MDS matrix come out of the Grain LFSR of the Poseidon reference
//! parameter generator, initialized with a prime field, the x^5 S-box, 254-bit elements, a width
//! of 3, 8 full rounds and 57 partial rounds. These are the parameters circomlib's `Poseidon(2)`
//! circuit is built with, so digests computed here match circuits using that template.

use super::{NUM_FULL_ROUNDS, NUM_PARTIAL_ROUNDS, NUM_ROUNDS, STATE_WIDTH};
use math::{BaseElement, FieldElement, StarkField};
use once_cell::sync::Lazy;

/// Round constants; one row of STATE_WIDTH elements per round.
pub(super) static ARK: Lazy<Vec<[BaseElement; STATE_WIDTH]>> = Lazy::new(|| {
    let mut grain = GrainLfsr::new();
    (0..NUM_ROUNDS)
        .map(|_| {
            let mut row = [BaseElement::ZERO; STATE_WIDTH];
            row.iter_mut().for_each(|c| *c = grain.next_element());
            row
        })
        .collect()
});

/// Cauchy MDS matrix with entries 1 / (x_i + y_j); x and y are the 2 * STATE_WIDTH elements the
/// generator produces right after the round constants.
pub(super) static MDS: Lazy<[[BaseElement; STATE_WIDTH]; STATE_WIDTH]> = Lazy::new(|| {
    let mut grain = GrainLfsr::new();
    for _ in 0..NUM_ROUNDS * STATE_WIDTH {
        grain.next_element();
    }
    let xs: Vec<BaseElement> = (0..STATE_WIDTH).map(|_| grain.next_reduced_element()).collect();
    let ys: Vec<BaseElement> = (0..STATE_WIDTH).map(|_| grain.next_reduced_element()).collect();

    let mut mds = [[BaseElement::ZERO; STATE_WIDTH]; STATE_WIDTH];
    for (row, &x) in mds.iter_mut().zip(&xs) {
        for (cell, &y) in row.iter_mut().zip(&ys) {
            *cell = (x + y).inv();
        }
    }
    mds
});

// GRAIN LFSR
// ================================================================================================

const STATE_BITS: usize = 80;
const NUM_WARMUP_STEPS: usize = 160;

/// Self-shrinking 80-bit Grain LFSR.
pub(super) struct GrainLfsr {
    bits: [bool; STATE_BITS],
    head: usize,
}

impl GrainLfsr {
    pub fn new() -> Self {
        // field type (1 = prime), S-box (0 = x^alpha), element size, width and round numbers; the
        // remaining bits are set
        let fields = [
            (1, 2),
            (0, 4),
            (BaseElement::MODULUS_BITS as usize, 12),
            (STATE_WIDTH, 12),
            (NUM_FULL_ROUNDS, 10),
            (NUM_PARTIAL_ROUNDS, 10),
        ];
        let mut bits = [true; STATE_BITS];
        let mut i = 0;
        for (value, width) in fields {
            for k in (0..width).rev() {
                bits[i] = (value >> k) & 1 == 1;
                i += 1;
            }
        }

        let mut lfsr = GrainLfsr { bits, head: 0 };
        for _ in 0..NUM_WARMUP_STEPS {
            lfsr.step();
        }
        lfsr
    }

    /// Returns the next element below the modulus; out-of-range candidates are discarded.
    pub fn next_element(&mut self) -> BaseElement {
        loop {
            let bits = self.next_bits(BaseElement::MODULUS_BITS as usize);
            let mut bytes = [0u8; 32];
            for (i, &bit) in bits.iter().rev().enumerate() {
                bytes[i / 8] |= (bit as u8) << (i % 8);
            }
            if let Some(element) = BaseElement::from_random_bytes(&bytes) {
                return element;
            }
        }
    }

    /// Returns the next MODULUS_BITS-bit integer reduced into the field.
    pub fn next_reduced_element(&mut self) -> BaseElement {
        self.next_bits(BaseElement::MODULUS_BITS as usize)
            .into_iter()
            .fold(BaseElement::ZERO, |acc, bit| {
                let acc = acc + acc;
                if bit {
                    acc + BaseElement::ONE
                } else {
                    acc
                }
            })
    }

    /// Returns `count` output bits, most significant first.
    fn next_bits(&mut self, count: usize) -> Vec<bool> {
        (0..count).map(|_| self.next_bit()).collect()
    }

    /// Output bits come in pairs; the second bit of a pair is kept only if the first one is set.
    fn next_bit(&mut self) -> bool {
        loop {
            let keep = self.step();
            let bit = self.step();
            if keep {
                return bit;
            }
        }
    }

    fn step(&mut self) -> bool {
        let bit = |k: usize| self.bits[(self.head + k) % STATE_BITS];
        let new_bit = bit(62) ^ bit(51) ^ bit(38) ^ bit(23) ^ bit(13) ^ bit(0);
        self.bits[self.head] = new_bit;
        self.head = (self.head + 1) % STATE_BITS;
        new_bit
    }
}
