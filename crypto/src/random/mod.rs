use crate::{errors::RandomCoinError, hash::ElementHasher};
use core::marker::PhantomData;
use math::{bits, BaseElement, StarkField};


// RANDOM COIN
// ================================================================================================

/// Pseudo-random element generator for a non-interactive transcript.
///
/// The coin holds a seed and a counter. Drawing increments the counter and returns
/// `H::merge([seed, counter])`; reseeding replaces the seed with `H::merge([seed, value])` and
/// resets the counter. Both the prover and the verifier run the same sequence of reseeds and
/// draws, so the verifier re-derives all challenges from the commitments alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomCoin<H: ElementHasher> {
    seed: BaseElement,
    counter: u64,
    _hasher: PhantomData<H>,
}

impl<H: ElementHasher> RandomCoin<H> {
    /// Returns a new coin seeded with the hash of the provided elements.
    pub fn new(seed: &[BaseElement]) -> Self {
        RandomCoin {
            seed: H::hash_elements(seed),
            counter: 0,
            _hasher: PhantomData,
        }
    }

    /// Returns the current seed.
    pub fn seed(&self) -> BaseElement {
        self.seed
    }

    /// Returns the number of values drawn since the last reseed.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    // RESEEDING
    // --------------------------------------------------------------------------------------------

    /// Absorbs `value` into the seed and resets the counter.
    pub fn reseed(&mut self, value: BaseElement) {
        self.seed = H::merge(&[self.seed, value]);
        self.counter = 0;
    }

    /// Absorbs a sequence of values into the seed; a single value is absorbed directly, longer
    /// sequences are hashed first.
    pub fn reseed_with_elements(&mut self, values: &[BaseElement]) {
        self.reseed(H::hash_leaf(values));
    }

    // PROOF OF WORK
    // --------------------------------------------------------------------------------------------

    /// Returns true if the lowest `grinding_factor` bits of the current seed are all zero.
    pub fn check_leading_zeros(&self, grinding_factor: u32) -> bool {
        bits::has_zero_low_bits(self.seed, grinding_factor)
    }

    // DRAW METHODS
    // --------------------------------------------------------------------------------------------

    /// Returns the next pseudo-random field element.
    pub fn draw(&mut self) -> BaseElement {
        self.counter += 1;
        H::merge(&[self.seed, BaseElement::from(self.counter)])
    }

    /// Returns the next pair of pseudo-random field elements.
    pub fn draw_pair(&mut self) -> (BaseElement, BaseElement) {
        (self.draw(), self.draw())
    }

    /// Returns the next triple of pseudo-random field elements.
    pub fn draw_triple(&mut self) -> (BaseElement, BaseElement, BaseElement) {
        (self.draw(), self.draw(), self.draw())
    }

    /// Draws `num_draws` elements, reduces each of them to its lowest `num_bits` bits and returns
    /// the first `num_values` distinct integers in the order they were drawn.
    ///
    /// All `num_draws` elements are always drawn, even when enough distinct values were found
    /// early; this keeps the work independent of the draws' outcome.
    ///
    /// # Errors
    /// Returns an error if fewer than `num_values` distinct integers were found.
    pub fn draw_integers(
        &mut self,
        num_values: usize,
        num_draws: usize,
        num_bits: u32,
    ) -> Result<Vec<usize>, RandomCoinError> {
        if num_bits >= usize::BITS || num_bits >= BaseElement::MODULUS_BITS {
            return Err(RandomCoinError::InvalidIntegerWidth(num_bits));
        }

        let mut values = Vec::with_capacity(num_values);
        for _ in 0..num_draws {
            let value = bits::low_bits(self.draw(), num_bits)
                .map_err(|_| RandomCoinError::InvalidIntegerWidth(num_bits))?;
            if values.len() < num_values && !values.contains(&value) {
                values.push(value);
            }
        }

        if values.len() < num_values {
            return Err(RandomCoinError::InsufficientDistinctValues(
                values.len(),
                num_values,
            ));
        }
        Ok(values)
    }
}
