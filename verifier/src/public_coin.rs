use crate::VerifierError;
use air::{ProofParams, StarkProof};
use crypto::{ElementHasher, RandomCoin};
use log::trace;
use math::BaseElement;

// VERIFIER COIN
// ================================================================================================

/// All challenges of a proof, re-derived from its commitments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierCoin {
    /// Out-of-domain point.
    pub z: BaseElement,
    /// Linear combination coefficients for every transition constraint.
    pub transition_coeffs: Vec<(BaseElement, BaseElement)>,
    /// Linear combination coefficients for every assertion.
    pub boundary_coeffs: Vec<(BaseElement, BaseElement)>,
    pub deep: DeepCompositionCoefficients,
    /// Folding challenges of all FRI layers; the one drawn after the remainder commitment is
    /// never used.
    pub layer_alphas: Vec<BaseElement>,
    pub query_positions: Vec<usize>,
}

/// Coefficients of the DEEP composition polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepCompositionCoefficients {
    /// Coefficients for the quotients by `x - z` and `x - z * g` of every trace column; the third
    /// element is drawn to keep the transcript aligned and is not used.
    pub trace: Vec<(BaseElement, BaseElement, BaseElement)>,
    /// Coefficient for the quotient of every composition column.
    pub constraints: Vec<BaseElement>,
    /// Coefficients of the degree adjustment `lambda_0 + lambda_1 * x`.
    pub degree: (BaseElement, BaseElement),
}

impl VerifierCoin {
    /// Replays the transcript of `proof` and returns all challenges it implies.
    ///
    /// The proof must have the shape `params` call for.
    ///
    /// # Errors
    /// Returns an error if the proof-of-work attached to the proof is invalid, or if the query
    /// draws do not yield enough distinct positions.
    pub fn replay<H: ElementHasher>(
        params: &ProofParams,
        proof: &StarkProof,
    ) -> Result<Self, VerifierError> {
        let mut coin = RandomCoin::<H>::new(&proof.pub_coin_seed);

        // constraint composition coefficients
        coin.reseed(proof.trace_commitment);
        let transition_coeffs: Vec<_> = (0..params.num_transition_constraints)
            .map(|_| coin.draw_pair())
            .collect();
        let boundary_coeffs: Vec<_> = (0..params.num_assertions)
            .map(|_| coin.draw_pair())
            .collect();

        // out-of-domain point
        coin.reseed(proof.constraint_commitment);
        let z = coin.draw();
        trace!("Drew out-of-domain point {}", z);

        // DEEP composition coefficients
        for row in proof.ood_trace_frame.iter() {
            coin.reseed_with_elements(row);
        }
        coin.reseed_with_elements(&proof.ood_constraint_evaluations);
        let deep = DeepCompositionCoefficients {
            trace: (0..params.trace_width).map(|_| coin.draw_triple()).collect(),
            constraints: (0..params.ce_blowup_factor).map(|_| coin.draw()).collect(),
            degree: coin.draw_pair(),
        };

        // FRI folding challenges
        let layer_alphas = proof
            .fri_commitments
            .iter()
            .map(|&commitment| {
                coin.reseed(commitment);
                coin.draw()
            })
            .collect();

        // proof of work
        coin.reseed(proof.pow_nonce);
        if !coin.check_leading_zeros(params.grinding_factor) {
            return Err(VerifierError::ProofOfWorkFailure);
        }

        // query positions
        let query_positions =
            coin.draw_integers(params.num_queries, params.num_draws, params.mask_size())?;
        trace!("Drew query positions {:?}", query_positions);

        Ok(VerifierCoin {
            z,
            transition_coeffs,
            boundary_coeffs,
            deep,
            layer_alphas,
            query_positions,
        })
    }
}
