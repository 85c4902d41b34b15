use super::{verify, VerifierError};
use crate::{
    composition::{checked_quotient, DeepComposer},
    constraints::{compose_columns_at, evaluate_constraints_at},
    public_coin::VerifierCoin,
};
use air::{Air, EvaluationFrame, TraceInfo};
use crypto::Poseidon;
use math::{log2, BaseElement, FieldElement, StarkField};

use fixtures::{
    build_params, prove, prove_with, public_inputs, sum_public_inputs, SumAir, ToyAir,
    TRACE_LENGTH,
};

// ACCEPTANCE
// ================================================================================================

#[test]
fn verify_fold_by_two() {
    let params = build_params(2, 2, 4);
    let proof = prove(&params, &public_inputs());
    assert_eq!(Ok(()), verify::<ToyAir>(&params, &public_inputs(), &proof));
}

#[test]
fn verify_fold_by_four() {
    let params = build_params(4, 1, 4);
    let proof = prove(&params, &public_inputs());
    assert_eq!(Ok(()), verify::<ToyAir>(&params, &public_inputs(), &proof));
}

#[test]
fn verify_without_grinding() {
    let params = build_params(2, 1, 0);
    let proof = prove(&params, &public_inputs());
    assert_eq!(Ok(()), verify::<ToyAir>(&params, &public_inputs(), &proof));
}

#[test]
fn verify_single_composition_column() {
    // linear constraints need a constraint evaluation blowup of 1
    let mut params = build_params(2, 2, 4);
    params.ce_blowup_factor = 1;
    let proof = prove_with::<SumAir>(&params, &sum_public_inputs(), |_, _| {});
    assert_eq!(1, proof.ood_constraint_evaluations.len());
    assert_eq!(Ok(()), verify::<SumAir>(&params, &sum_public_inputs(), &proof));

    // the same proof does not satisfy an AIR with a different composition layout
    assert!(matches!(
        verify::<ToyAir>(&params, &sum_public_inputs(), &proof),
        Err(VerifierError::MalformedInput(_))
    ));
}

#[test]
fn verify_without_fri_layers() {
    let params = build_params(2, 0, 0);
    let proof = prove(&params, &public_inputs());
    assert_eq!(Ok(()), verify::<ToyAir>(&params, &public_inputs(), &proof));
}

// PUBLIC COIN
// ================================================================================================

#[test]
fn replay_is_deterministic() {
    let params = build_params(2, 2, 4);
    let proof = prove(&params, &public_inputs());

    let coin1 = VerifierCoin::replay::<Poseidon>(&params, &proof).unwrap();
    let coin2 = VerifierCoin::replay::<Poseidon>(&params, &proof).unwrap();
    assert_eq!(coin1, coin2);

    assert_eq!(params.num_transition_constraints, coin1.transition_coeffs.len());
    assert_eq!(params.num_assertions, coin1.boundary_coeffs.len());
    assert_eq!(params.trace_width, coin1.deep.trace.len());
    assert_eq!(params.ce_blowup_factor, coin1.deep.constraints.len());
    assert_eq!(params.num_fri_layers + 1, coin1.layer_alphas.len());
}

#[test]
fn query_positions_are_distinct() {
    let params = build_params(2, 2, 4);
    let proof = prove(&params, &public_inputs());
    let positions = VerifierCoin::replay::<Poseidon>(&params, &proof)
        .unwrap()
        .query_positions;

    assert_eq!(params.num_queries, positions.len());
    for (i, &position) in positions.iter().enumerate() {
        assert!(position < params.lde_domain_size());
        assert!(!positions[..i].contains(&position));
    }
}

// REJECTION
// ================================================================================================

#[test]
fn reject_tampered_trace_evaluation() {
    let params = build_params(2, 2, 4);
    let mut proof = prove(&params, &public_inputs());
    proof.trace_evaluations[0][1] += BaseElement::ONE;
    assert!(matches!(
        verify::<ToyAir>(&params, &public_inputs(), &proof),
        Err(VerifierError::CommitmentMismatch(_))
    ));
}

#[test]
fn reject_tampered_trace_path() {
    let params = build_params(2, 2, 4);
    let mut proof = prove(&params, &public_inputs());
    proof.trace_query_proofs[1][0] += BaseElement::ONE;
    assert!(matches!(
        verify::<ToyAir>(&params, &public_inputs(), &proof),
        Err(VerifierError::CommitmentMismatch(_))
    ));
}

#[test]
fn reject_tampered_constraint_evaluation() {
    let params = build_params(2, 2, 4);
    let mut proof = prove(&params, &public_inputs());
    proof.constraint_evaluations[2][0] += BaseElement::ONE;
    assert!(matches!(
        verify::<ToyAir>(&params, &public_inputs(), &proof),
        Err(VerifierError::CommitmentMismatch(_))
    ));
}

#[test]
fn reject_tampered_fri_layer() {
    let params = build_params(2, 2, 4);
    let mut proof = prove(&params, &public_inputs());
    proof.fri_layer_queries[0][1] += BaseElement::ONE;
    assert!(matches!(
        verify::<ToyAir>(&params, &public_inputs(), &proof),
        Err(VerifierError::CommitmentMismatch(_))
    ));
}

#[test]
fn reject_tampered_fri_remainder() {
    let params = build_params(2, 2, 4);
    let mut proof = prove(&params, &public_inputs());
    let last = proof.fri_remainder.len() - 1;
    proof.fri_remainder[last] += BaseElement::ONE;
    assert_eq!(
        Err(VerifierError::CommitmentMismatch(String::from("FRI remainder"))),
        verify::<ToyAir>(&params, &public_inputs(), &proof)
    );
}

#[test]
fn reject_invalid_pow_nonce() {
    // with 4 bits of grinding, most nonces are rejected
    let params = build_params(2, 2, 4);
    let proof = prove(&params, &public_inputs());
    let rejected = (1u8..=64).any(|i| {
        let mut proof = proof.clone();
        proof.pow_nonce += BaseElement::from(i);
        verify::<ToyAir>(&params, &public_inputs(), &proof)
            == Err(VerifierError::ProofOfWorkFailure)
    });
    assert!(rejected);
}

#[test]
fn reject_tampered_ood_constraint_evaluations() {
    // without grinding, the altered transcript cannot fail the proof-of-work check first
    let params = build_params(2, 2, 0);
    let mut proof = prove(&params, &public_inputs());
    proof.ood_constraint_evaluations[0] += BaseElement::ONE;
    assert_eq!(
        Err(VerifierError::OodInconsistency),
        verify::<ToyAir>(&params, &public_inputs(), &proof)
    );
}

#[test]
fn reject_tampered_ood_frame() {
    let params = build_params(2, 2, 0);
    let mut proof = prove(&params, &public_inputs());
    proof.ood_trace_frame[1][0] += BaseElement::ONE;
    assert_eq!(
        Err(VerifierError::OodInconsistency),
        verify::<ToyAir>(&params, &public_inputs(), &proof)
    );
}

#[test]
fn reject_tampered_ood_transition_evaluations() {
    let params = build_params(2, 2, 4);
    let mut proof = prove(&params, &public_inputs());
    proof.ood_frame_constraint_evaluation[1] += BaseElement::ONE;
    assert_eq!(
        Err(VerifierError::OodInconsistency),
        verify::<ToyAir>(&params, &public_inputs(), &proof)
    );
}

#[test]
fn reject_wrong_public_inputs() {
    let params = build_params(2, 2, 4);
    let proof = prove(&params, &public_inputs());
    let wrong_inputs = vec![BaseElement::from(442u16)];
    assert_eq!(
        Err(VerifierError::PublicCoinSeedMismatch),
        verify::<ToyAir>(&params, &wrong_inputs, &proof)
    );
}

#[test]
fn reject_false_statement() {
    // the trace ends with 441, so asserting 442 leaves a non-vanishing boundary constraint
    let params = build_params(2, 2, 4);
    let wrong_inputs = vec![BaseElement::from(442u16)];
    let proof = prove(&params, &wrong_inputs);
    assert_eq!(
        Err(VerifierError::OodInconsistency),
        verify::<ToyAir>(&params, &wrong_inputs, &proof)
    );
}

#[test]
fn reject_colliding_query_draws() {
    // 48 draws from 64 positions are all distinct only with negligible probability
    let mut params = build_params(2, 2, 0);
    params.num_queries = 48;
    params.num_draws = 48;
    let proof = prove(&params, &public_inputs());
    assert!(matches!(
        verify::<ToyAir>(&params, &public_inputs(), &proof),
        Err(VerifierError::InsufficientDistinctQueries(found, 48)) if found < 48
    ));
}

#[test]
fn reject_inconsistent_fri_layer() {
    // shifting a whole committed layer keeps it low degree, but the layer no longer folds from
    // the one before it
    let params = build_params(2, 2, 0);
    let proof = prove_with::<ToyAir>(&params, &public_inputs(), |layer, values| {
        if layer == 1 {
            values.iter_mut().for_each(|value| *value += BaseElement::ONE);
        }
    });
    assert!(matches!(
        verify::<ToyAir>(&params, &public_inputs(), &proof),
        Err(VerifierError::FriInconsistency(_))
    ));
}

#[test]
fn reject_high_degree_remainder() {
    // without FRI layers the remainder holds the DEEP evaluations over the whole domain; altering
    // a value which is not queried leaves every opening intact
    let params = build_params(2, 0, 0);
    let proof = (0..params.lde_domain_size())
        .find_map(|target| {
            let proof = prove_with::<ToyAir>(&params, &public_inputs(), |layer, values| {
                if layer == 0 {
                    values[target] += BaseElement::ONE;
                }
            });
            let positions = VerifierCoin::replay::<Poseidon>(&params, &proof)
                .unwrap()
                .query_positions;
            (!positions.contains(&target)).then(|| proof)
        })
        .unwrap();
    assert_eq!(
        Err(VerifierError::DegreeBoundViolation(TRACE_LENGTH - 1)),
        verify::<ToyAir>(&params, &public_inputs(), &proof)
    );
}

#[test]
fn reject_malformed_inputs() {
    let params = build_params(2, 2, 4);
    let proof = prove(&params, &public_inputs());
    let is_malformed = |result: Result<(), VerifierError>| {
        matches!(result, Err(VerifierError::MalformedInput(_)))
    };

    let mut bad_params = params.clone();
    bad_params.trace_length = 6;
    assert!(is_malformed(verify::<ToyAir>(&bad_params, &public_inputs(), &proof)));

    let mut bad_params = params.clone();
    bad_params.num_assertions = 2;
    assert!(is_malformed(verify::<ToyAir>(&bad_params, &public_inputs(), &proof)));

    assert!(is_malformed(verify::<ToyAir>(&params, &[], &proof)));

    let mut bad_proof = proof.clone();
    bad_proof.fri_remainder.pop();
    assert!(is_malformed(verify::<ToyAir>(&params, &public_inputs(), &bad_proof)));

    let mut bad_proof = proof;
    bad_proof.trace_query_proofs[0].pop();
    assert!(is_malformed(verify::<ToyAir>(&params, &public_inputs(), &bad_proof)));
}

// COMPONENTS
// ================================================================================================

#[test]
fn checked_quotient_rejects_zero_divisor() {
    let seven = BaseElement::from(7u8);
    assert_eq!(
        Ok(BaseElement::from(3u8)),
        checked_quotient(BaseElement::from(21u8), seven, 0)
    );
    assert_eq!(
        Err(VerifierError::DegenerateQueryPoint(3)),
        checked_quotient(seven, BaseElement::ZERO, 3)
    );
}

#[test]
fn reject_query_point_at_ood_point() {
    let params = build_params(2, 2, 4);
    let proof = prove(&params, &public_inputs());
    let coin = VerifierCoin::replay::<Poseidon>(&params, &proof).unwrap();
    let [current, next] = proof.ood_trace_frame.clone();
    let frame = EvaluationFrame::from_rows(current, next);

    let g_trace = BaseElement::get_root_of_unity(log2(TRACE_LENGTH));
    let g_lde = BaseElement::get_root_of_unity(log2(params.lde_domain_size()));
    let z = params.domain_offset() * g_lde.exp(5);
    let composer = DeepComposer::new(
        z,
        g_trace,
        g_lde,
        params.domain_offset(),
        params.ce_blowup_factor,
        &frame,
        &proof.ood_constraint_evaluations,
        &coin.deep,
    );

    let trace_rows = vec![proof.trace_evaluations[0].clone(); 2];
    let constraint_rows = vec![proof.constraint_evaluations[0].clone(); 2];
    assert_eq!(
        Err(VerifierError::DegenerateQueryPoint(5)),
        composer.compose(5, &trace_rows[0], &constraint_rows[0])
    );
    assert_eq!(
        Err(VerifierError::DegenerateQueryPoint(5)),
        composer.compose_queries(&[6, 5], &trace_rows, &constraint_rows)
    );
    assert!(composer.compose(6, &trace_rows[0], &constraint_rows[0]).is_ok());
}

#[test]
fn compose_columns() {
    // 1 + 2 * z + 3 * z^2 at z = 2
    let columns = [1u8, 2, 3].map(BaseElement::from);
    assert_eq!(
        BaseElement::from(17u8),
        compose_columns_at(&columns, BaseElement::from(2u8))
    );
    assert_eq!(BaseElement::ZERO, compose_columns_at(&[], BaseElement::ONE));
}

#[test]
fn reject_ood_point_in_trace_domain() {
    let params = build_params(2, 2, 4);
    let proof = prove(&params, &public_inputs());
    let air = ToyAir::new(TraceInfo::new(2, TRACE_LENGTH), &public_inputs()).unwrap();
    let assertions = air.get_validated_assertions().unwrap();
    let [current, next] = proof.ood_trace_frame.clone();
    let frame = EvaluationFrame::from_rows(current, next);

    let mut coin = VerifierCoin::replay::<Poseidon>(&params, &proof).unwrap();
    assert!(evaluate_constraints_at(
        &air,
        &assertions,
        &frame,
        &proof.ood_frame_constraint_evaluation,
        &coin
    )
    .is_ok());

    coin.z = air.trace_domain_generator().exp(3);
    assert_eq!(
        Err(VerifierError::DegenerateOodPoint),
        evaluate_constraints_at(
            &air,
            &assertions,
            &frame,
            &proof.ood_frame_constraint_evaluation,
            &coin
        )
    );
}
