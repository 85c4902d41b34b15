//! STARK verifier over the BN254 scalar field.
//!
//! Every step of the verification is plain field arithmetic over the same field a Groth16 proof
//! over BN254 works with: commitments are Poseidon Merkle roots, the transcript is a Poseidon
//! hash chain, and the low-degree test is FRI with arbitrary power-of-two folding. This makes
//! the procedure directly expressible as an arithmetic circuit.
//!
//! A proof is checked by [verify()] against a set of [ProofParams], the public inputs of the
//! statement and an [Air] describing the computation.

use log::debug;
use math::log2;
use std::time::Instant;

pub use air::{
    Air, AirContext, AirError, Assertion, EvaluationFrame, ProofParams, StarkProof, TraceInfo,
};
pub use crypto::{ElementHasher, Poseidon};
pub use math::{BaseElement, FieldElement, StarkField};

mod channel;
use channel::VerifierChannel;

mod composition;
use composition::DeepComposer;

mod constraints;
use constraints::check_ood_consistency;

mod public_coin;
use public_coin::VerifierCoin;

mod errors;
pub use errors::VerifierError;

#[cfg(test)]
mod tests;

// VERIFIER
// ================================================================================================

/// Verifies that `proof` attests to the correct execution of the computation described by `A`
/// for the specified `public_inputs`.
///
/// Verification is a pure function of its inputs: the parameters and the proof layout are
/// checked first, then all challenges are re-derived from the commitments, and finally the
/// out-of-domain evaluations, the queried openings, and the FRI proof are checked in this order.
///
/// # Errors
/// Returns the error of the first check which fails.
pub fn verify<A: Air>(
    params: &ProofParams,
    public_inputs: &[BaseElement],
    proof: &StarkProof,
) -> Result<(), VerifierError> {
    perform_verification::<A, Poseidon>(params, public_inputs, proof)
}

fn perform_verification<A: Air, H: ElementHasher>(
    params: &ProofParams,
    public_inputs: &[BaseElement],
    proof: &StarkProof,
) -> Result<(), VerifierError> {
    // 0 ----- check the statement and the proof layout -------------------------------------------
    let now = Instant::now();
    params.validate()?;
    if public_inputs.len() != params.num_public_inputs {
        return Err(VerifierError::MalformedInput(format!(
            "expected {} public inputs, but received {}",
            params.num_public_inputs,
            public_inputs.len()
        )));
    }
    proof.check_shape(params)?;

    let air = A::new(
        TraceInfo::new(params.trace_width, params.trace_length),
        public_inputs,
    )?;
    check_air_context(air.context(), params)?;
    let assertions = air.get_validated_assertions()?;

    if proof.pub_coin_seed != params.coin_seed(public_inputs) {
        return Err(VerifierError::PublicCoinSeedMismatch);
    }
    debug!(
        "Checked proof layout for a trace of {} columns and {} steps in {} ms",
        params.trace_width,
        params.trace_length,
        now.elapsed().as_millis()
    );

    // 1 ----- build domains and replay the transcript --------------------------------------------
    let now = Instant::now();
    let (g_trace, g_lde) = get_domain_generators(params)?;
    debug_assert_eq!(g_trace, air.trace_domain_generator());

    let coin = VerifierCoin::replay::<H>(params, proof)?;
    let channel = VerifierChannel::<H>::new(params, proof, coin.layer_alphas.clone());
    debug!(
        "Replayed public coin and drew {} query positions in {} ms",
        coin.query_positions.len(),
        now.elapsed().as_millis()
    );

    // 2 ----- check constraint evaluations at the out-of-domain point ----------------------------
    let now = Instant::now();
    let ood_frame = channel.read_ood_frame();
    check_ood_consistency(
        &air,
        &assertions,
        &ood_frame,
        &proof.ood_frame_constraint_evaluation,
        &proof.ood_constraint_evaluations,
        &coin,
    )?;
    debug!(
        "Checked out-of-domain consistency of {} constraints in {} ms",
        air.num_transition_constraints() + assertions.len(),
        now.elapsed().as_millis()
    );

    // 3 ----- read queried trace rows and composition columns ------------------------------------
    let now = Instant::now();
    let trace_rows = channel.read_trace_evaluations(&coin.query_positions)?;
    let constraint_rows = channel.read_constraint_evaluations(&coin.query_positions)?;
    debug!(
        "Authenticated {} trace and constraint openings in {} ms",
        coin.query_positions.len(),
        now.elapsed().as_millis()
    );

    // 4 ----- compute DEEP composition polynomial evaluations ------------------------------------
    let now = Instant::now();
    let composer = DeepComposer::new(
        coin.z,
        g_trace,
        g_lde,
        params.domain_offset(),
        params.ce_blowup_factor,
        &ood_frame,
        &proof.ood_constraint_evaluations,
        &coin.deep,
    );
    let evaluations =
        composer.compose_queries(&coin.query_positions, trace_rows, constraint_rows)?;
    debug!(
        "Evaluated DEEP composition polynomial at {} positions in {} ms",
        evaluations.len(),
        now.elapsed().as_millis()
    );

    // 5 ----- verify low-degree proof -------------------------------------------------------------
    // make sure that evaluations we computed in the previous step are in fact evaluations
    // of a polynomial of degree smaller than the trace length
    let now = Instant::now();
    let fri_context = fri::VerifierContext::new(
        params.lde_domain_size(),
        params.domain_offset(),
        params.to_fri_options(),
    );
    fri::verify(&fri_context, &channel, &evaluations, &coin.query_positions)?;
    debug!(
        "Verified FRI proof with {} layers in {} ms",
        params.num_fri_layers,
        now.elapsed().as_millis()
    );

    Ok(())
}

// HELPER FUNCTIONS
// ================================================================================================

/// Makes sure the AIR implies the same sizes as the proof parameters.
fn check_air_context(context: &AirContext, params: &ProofParams) -> Result<(), VerifierError> {
    let checks = [
        (
            "constraint evaluation blowup factor",
            context.ce_blowup_factor(),
            params.ce_blowup_factor,
        ),
        (
            "number of transition constraints",
            context.num_transition_constraints(),
            params.num_transition_constraints,
        ),
        (
            "number of assertions",
            context.num_assertions(),
            params.num_assertions,
        ),
    ];
    for (name, actual, expected) in checks {
        if actual != expected {
            return Err(VerifierError::MalformedInput(format!(
                "AIR implies {} of {}, but parameters specify {}",
                name, actual, expected
            )));
        }
    }
    Ok(())
}

/// Returns generators of the trace and LDE domains as powers of the two-adic root of unity.
fn get_domain_generators(
    params: &ProofParams,
) -> Result<(BaseElement, BaseElement), VerifierError> {
    let root = BaseElement::TWO_ADIC_ROOT_OF_UNITY;
    if root.exp(1u64 << params.addicity) != BaseElement::ONE {
        return Err(VerifierError::MalformedInput(String::from(
            "two-adic root of unity has unexpected order",
        )));
    }

    let g_trace = root.exp(1u64 << (params.addicity - log2(params.trace_length)));
    let g_lde = root.exp(1u64 << (params.addicity - log2(params.lde_domain_size())));
    Ok((g_trace, g_lde))
}
