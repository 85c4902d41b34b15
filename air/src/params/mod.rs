use crate::errors::ParamsError;
use fri::FriOptions;
use math::{log2, BaseElement, StarkField};
use serde::{Deserialize, Serialize};


// CONSTANTS
// ================================================================================================

/// Number of field elements the protocol context is serialized into.
pub const NUM_CONTEXT_ELEMENTS: usize = 2;

const MAX_GRINDING_FACTOR: u32 = 64;
const MAX_SECURITY_BITS: u32 = 512;

const MAX_NUM_DRAWS: usize = 1 << 14;

// PROOF PARAMETERS
// ================================================================================================

/// Parameters a proof is generated against.
///
/// These fix every size the verifier relies on; a proof is checked against them before any of
/// its values are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofParams {
    pub addicity: u32,
    pub ce_blowup_factor: usize,
    pub domain_offset: u64,
    pub folding_factor: usize,
    pub grinding_factor: u32,
    pub lde_blowup_factor: usize,
    pub num_assertions: usize,
    pub num_draws: usize,
    pub num_fri_layers: usize,
    pub num_pub_coin_seed: usize,
    pub num_public_inputs: usize,
    pub num_queries: usize,
    pub num_transition_constraints: usize,
    pub trace_length: usize,
    pub trace_width: usize,
}

impl ProofParams {
    // VALIDATION
    // --------------------------------------------------------------------------------------------

    /// Checks that the parameters describe a consistent protocol instance.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.trace_length.is_power_of_two() {
            return Err(ParamsError::TraceLengthNotPowerOfTwo(self.trace_length));
        }
        if self.trace_length < 4 {
            return Err(ParamsError::TraceTooShort(self.trace_length));
        }
        if !self.lde_blowup_factor.is_power_of_two() {
            return Err(ParamsError::BlowupFactorNotPowerOfTwo(
                "LDE",
                self.lde_blowup_factor,
            ));
        }
        if !self.ce_blowup_factor.is_power_of_two() {
            return Err(ParamsError::BlowupFactorNotPowerOfTwo(
                "Constraint evaluation",
                self.ce_blowup_factor,
            ));
        }
        if !self.folding_factor.is_power_of_two() || self.folding_factor < 2 {
            return Err(ParamsError::InvalidFoldingFactor(self.folding_factor));
        }
        if self.addicity != BaseElement::TWO_ADICITY {
            return Err(ParamsError::InvalidAddicity(
                self.addicity,
                BaseElement::TWO_ADICITY,
            ));
        }

        let lde_domain_size = self
            .trace_length
            .checked_mul(self.lde_blowup_factor)
            .filter(|&size| size.trailing_zeros() <= self.addicity)
            .ok_or(ParamsError::DomainTooLarge(
                self.trace_length.saturating_mul(self.lde_blowup_factor),
                self.addicity,
            ))?;

        if self.domain_offset == 0 {
            return Err(ParamsError::ZeroDomainOffset);
        }
        if self.trace_width == 0 {
            return Err(ParamsError::ZeroParameter("trace_width"));
        }
        if self.num_queries == 0 {
            return Err(ParamsError::ZeroParameter("num_queries"));
        }
        if self.num_transition_constraints == 0 {
            return Err(ParamsError::ZeroParameter("num_transition_constraints"));
        }
        if self.num_assertions == 0 {
            return Err(ParamsError::ZeroParameter("num_assertions"));
        }
        if self.num_queries > lde_domain_size {
            return Err(ParamsError::TooManyQueries(self.num_queries, lde_domain_size));
        }
        if self.num_draws < self.num_queries {
            return Err(ParamsError::TooFewDraws(self.num_draws, self.num_queries));
        }

        // every FRI layer must divide the degree bound exactly; a layer halves it at least, so
        // the layer count is bounded by log2(trace_length) before any power is taken
        let invalid_layer_count =
            ParamsError::InvalidFriLayerCount(self.trace_length, self.num_fri_layers);
        if self.num_fri_layers > log2(self.trace_length) as usize {
            return Err(invalid_layer_count);
        }
        let reduction = (self.folding_factor as u64)
            .checked_pow(self.num_fri_layers as u32)
            .filter(|&r| self.trace_length as u64 % r == 0)
            .ok_or(invalid_layer_count)?;
        let remainder_size = lde_domain_size / reduction as usize;
        if remainder_size < self.folding_factor {
            return Err(ParamsError::RemainderTooSmall(
                remainder_size,
                self.folding_factor,
            ));
        }

        if self.grinding_factor >= MAX_GRINDING_FACTOR {
            return Err(ParamsError::GrindingFactorTooLarge(self.grinding_factor));
        }
        let coin_seed_size = self
            .num_public_inputs
            .checked_add(NUM_CONTEXT_ELEMENTS)
            .ok_or(ParamsError::TooManyPublicInputs(self.num_public_inputs))?;
        if self.num_pub_coin_seed != coin_seed_size {
            return Err(ParamsError::InvalidCoinSeedSize(
                self.num_pub_coin_seed,
                coin_seed_size,
            ));
        }

        Ok(())
    }

    // DERIVED VALUES
    // --------------------------------------------------------------------------------------------

    /// Size of the low-degree extension domain.
    pub fn lde_domain_size(&self) -> usize {
        self.trace_length * self.lde_blowup_factor
    }

    /// Depth of the trace and constraint commitment trees.
    pub fn tree_depth(&self) -> usize {
        log2(self.lde_domain_size()) as usize
    }

    /// Depths of the trees committing to every FRI layer.
    pub fn fri_tree_depths(&self) -> Vec<usize> {
        let step = log2(self.folding_factor) as usize;
        (1..=self.num_fri_layers)
            .map(|k| self.tree_depth() - k * step)
            .collect()
    }

    /// Number of values in the FRI remainder.
    pub fn remainder_size(&self) -> usize {
        self.lde_domain_size() / self.folding_factor.pow(self.num_fri_layers as u32)
    }

    /// Number of coefficients the polynomial behind the FRI remainder may have.
    pub fn remainder_max_degree_plus_1(&self) -> usize {
        self.trace_length / self.folding_factor.pow(self.num_fri_layers as u32)
    }

    /// Number of low bits kept from every query draw.
    pub fn mask_size(&self) -> u32 {
        self.tree_depth() as u32
    }

    /// Offset of the LDE coset.
    pub fn domain_offset(&self) -> BaseElement {
        BaseElement::from(self.domain_offset)
    }

    /// Returns the FRI options implied by these parameters. The parameters must be valid.
    pub fn to_fri_options(&self) -> FriOptions {
        FriOptions::new(
            self.lde_blowup_factor,
            self.folding_factor,
            self.num_fri_layers,
        )
    }

    // PUBLIC COIN SEED
    // --------------------------------------------------------------------------------------------

    /// Serializes the protocol context into field elements.
    ///
    /// The first element packs the trace dimensions and the constraint evaluation blowup, the
    /// second one packs the query, LDE and FRI parameters.
    pub fn context_elements(&self) -> [BaseElement; NUM_CONTEXT_ELEMENTS] {
        let trace = (self.trace_length as u128) << 64
            | (self.trace_width as u128) << 32
            | self.ce_blowup_factor as u128;
        let queries = (self.num_queries as u128) << 64
            | (self.lde_blowup_factor as u128) << 32
            | (self.folding_factor as u128) << 16
            | (self.num_fri_layers as u128) << 8
            | self.grinding_factor as u128;
        [BaseElement::from(trace), BaseElement::from(queries)]
    }

    /// Returns the seed the public coin of a proof for `public_inputs` must be initialized with.
    pub fn coin_seed(&self, public_inputs: &[BaseElement]) -> Vec<BaseElement> {
        let mut seed = self.context_elements().to_vec();
        seed.extend_from_slice(public_inputs);
        seed
    }

    // NUMBER OF DRAWS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of uniform draws from a domain of `lde_domain_size` positions which
    /// collects `num_queries` distinct positions except with probability `2^-security_bits`.
    ///
    /// The result is one more than the smallest number of draws meeting the bound, which matches
    /// the parameter generator proofs are produced with.
    ///
    /// # Errors
    /// Returns an error if more than 2^14 draws would be needed.
    pub fn number_of_draws(
        num_queries: usize,
        lde_domain_size: usize,
        security_bits: u32,
    ) -> Result<usize, ParamsError> {
        if num_queries > lde_domain_size {
            return Err(ParamsError::TooManyQueries(num_queries, lde_domain_size));
        }
        if security_bits > MAX_SECURITY_BITS {
            return Err(ParamsError::SecurityLevelTooHigh(security_bits));
        }
        if num_queries > MAX_NUM_DRAWS {
            return Err(ParamsError::TooManyDrawsNeeded(num_queries, MAX_NUM_DRAWS));
        }

        // failure[x] is the probability of ending with fewer than num_queries distinct values
        // when x distinct values were seen and the current number of draws remain
        let domain_size = lde_domain_size as f64;
        let target = 2f64.powi(-(security_bits as i32));
        let mut failure = vec![1.0f64; num_queries + 1];
        failure[num_queries] = 0.0;

        let mut num_draws = 0;
        while failure[0] > target {
            if num_draws == MAX_NUM_DRAWS {
                return Err(ParamsError::TooManyDrawsNeeded(num_queries, MAX_NUM_DRAWS));
            }
            let previous = failure.clone();
            for x in 0..num_queries {
                let fresh = (domain_size - x as f64) / domain_size;
                let repeat = x as f64 / domain_size;
                failure[x] = fresh * previous[x + 1] + repeat * previous[x];
            }
            num_draws += 1;
        }

        Ok(num_draws + 1)
    }
}
