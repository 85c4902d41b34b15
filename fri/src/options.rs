// FRI OPTIONS
// ================================================================================================

/// FRI protocol parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriOptions {
    blowup_factor: usize,
    folding_factor: usize,
    num_layers: usize,
}

impl FriOptions {
    /// Returns a new set of FRI options.
    ///
    /// # Panics
    /// Panics if the blowup or folding factor is not a power of two, or if the folding factor is
    /// smaller than 2.
    pub fn new(blowup_factor: usize, folding_factor: usize, num_layers: usize) -> Self {
        assert!(
            blowup_factor.is_power_of_two(),
            "blowup factor must be a power of 2"
        );
        assert!(
            folding_factor.is_power_of_two() && folding_factor >= 2,
            "folding factor must be a power of 2 greater than 1"
        );
        FriOptions {
            blowup_factor,
            folding_factor,
            num_layers,
        }
    }

    /// Ratio of the evaluation domain size to the degree bound of the committed polynomial.
    pub fn blowup_factor(&self) -> usize {
        self.blowup_factor
    }

    pub fn folding_factor(&self) -> usize {
        self.folding_factor
    }

    /// Number of folded layers; the remainder is not counted.
    pub fn num_layers(&self) -> usize {
        self.num_layers
    }

    /// Returns the number of values in the remainder for the specified initial domain.
    pub fn remainder_size(&self, domain_size: usize) -> usize {
        domain_size / self.folding_factor.pow(self.num_layers as u32)
    }
}
