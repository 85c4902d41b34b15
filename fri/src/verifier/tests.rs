use super::{verify, verify_remainder, DefaultVerifierChannel, VerifierContext};
use crate::{folding, utils, FriError, FriOptions};
use crypto::Poseidon;
use math::{polynom, BaseElement, FieldElement, StarkField};

const DOMAIN_SIZE: usize = 64;
const BLOWUP: usize = 4;
const POSITIONS: [usize; 4] = [1, 7, 22, 50];

// TESTS
// ================================================================================================

#[test]
fn verify_fold_by_two() {
    let options = FriOptions::new(BLOWUP, 2, 2);
    let (channel, evaluations) = build_proof(16, &options, &POSITIONS);
    let context = build_context(&options);
    assert_eq!(Ok(()), verify(&context, &channel, &evaluations, &POSITIONS));
}

#[test]
fn verify_fold_by_four() {
    let options = FriOptions::new(BLOWUP, 4, 1);
    let (channel, evaluations) = build_proof(16, &options, &POSITIONS);
    let context = build_context(&options);
    assert_eq!(Ok(()), verify(&context, &channel, &evaluations, &POSITIONS));
}

#[test]
fn verify_lower_degree() {
    let options = FriOptions::new(BLOWUP, 2, 2);
    let (channel, evaluations) = build_proof(5, &options, &POSITIONS);
    let context = build_context(&options);
    assert_eq!(Ok(()), verify(&context, &channel, &evaluations, &POSITIONS));
}

#[test]
fn reject_degree_too_high() {
    // 17 coefficients fold into 5 coefficients, one more than the remainder allows
    let options = FriOptions::new(BLOWUP, 2, 2);
    let (channel, evaluations) = build_proof(17, &options, &POSITIONS);
    let context = build_context(&options);
    assert_eq!(
        Err(FriError::RemainderDegreeMismatch(3)),
        verify(&context, &channel, &evaluations, &POSITIONS)
    );
}

#[test]
fn reject_wrong_evaluation() {
    let options = FriOptions::new(BLOWUP, 2, 2);
    let (channel, mut evaluations) = build_proof(16, &options, &POSITIONS);
    evaluations[2] += BaseElement::ONE;
    let context = build_context(&options);
    assert_eq!(
        Err(FriError::InvalidLayerFolding(0)),
        verify(&context, &channel, &evaluations, &POSITIONS)
    );
}

#[test]
fn reject_tampered_layer_value() {
    let options = FriOptions::new(BLOWUP, 2, 2);
    let (mut channel, evaluations) = build_proof(16, &options, &POSITIONS);
    channel.queries[1][3] += BaseElement::ONE;
    let context = build_context(&options);
    assert_eq!(
        Err(FriError::LayerCommitmentMismatch(1)),
        verify(&context, &channel, &evaluations, &POSITIONS)
    );
}

#[test]
fn reject_truncated_path() {
    let options = FriOptions::new(BLOWUP, 4, 1);
    let (mut channel, evaluations) = build_proof(16, &options, &POSITIONS);
    channel.proofs[0][0].pop();
    let context = build_context(&options);
    assert_eq!(
        Err(FriError::LayerCommitmentMismatch(0)),
        verify(&context, &channel, &evaluations, &POSITIONS)
    );
}

#[test]
fn reject_tampered_remainder() {
    let options = FriOptions::new(BLOWUP, 2, 2);
    let (mut channel, evaluations) = build_proof(16, &options, &POSITIONS);
    channel.remainder[0] += BaseElement::ONE;
    let context = build_context(&options);
    assert_eq!(
        Err(FriError::RemainderCommitmentMismatch),
        verify(&context, &channel, &evaluations, &POSITIONS)
    );
}

#[test]
fn reject_malformed_proof() {
    let options = FriOptions::new(BLOWUP, 2, 2);
    let context = build_context(&options);

    let (mut channel, evaluations) = build_proof(16, &options, &POSITIONS);
    channel.commitments.pop();
    assert!(matches!(
        verify(&context, &channel, &evaluations, &POSITIONS),
        Err(FriError::InvalidProofShape(_))
    ));

    let (mut channel, evaluations) = build_proof(16, &options, &POSITIONS);
    channel.queries[0].pop();
    assert!(matches!(
        verify(&context, &channel, &evaluations, &POSITIONS),
        Err(FriError::InvalidProofShape(_))
    ));

    let (channel, evaluations) = build_proof(16, &options, &POSITIONS);
    assert!(matches!(
        verify(&context, &channel, &evaluations[1..], &POSITIONS),
        Err(FriError::InvalidProofShape(_))
    ));
}

#[test]
fn context_degree_bound() {
    // 64 / 4 = 16 coefficients, folded twice by 2 and once by 4
    let context = build_context(&FriOptions::new(BLOWUP, 2, 2));
    assert_eq!(4, context.remainder_max_degree_plus_1());
    assert_eq!(16, context.remainder_size());
    let context = build_context(&FriOptions::new(BLOWUP, 4, 1));
    assert_eq!(4, context.remainder_max_degree_plus_1());

    let context = build_context(&FriOptions::new(1, 2, 2));
    assert_eq!(16, context.remainder_max_degree_plus_1());
}

#[test]
fn remainder_degree_bound() {
    let offset = BaseElement::GENERATOR;
    let root = BaseElement::get_root_of_unity(4);
    let domain = BaseElement::get_power_series_with_offset(root, offset, 16);

    // degree 3 polynomial passes with 4 coefficients but not with 3
    let poly: Vec<BaseElement> = (1u8..=4).map(BaseElement::from).collect();
    let remainder = polynom::eval_many(&poly, &domain);
    assert_eq!(Ok(()), verify_remainder(&remainder, 4, offset, root));
    assert_eq!(
        Err(FriError::RemainderDegreeMismatch(2)),
        verify_remainder(&remainder, 3, offset, root)
    );
    assert!(verify_remainder(&remainder, 17, offset, root).is_err());
}

// HELPER FUNCTIONS
// ================================================================================================

fn build_context(options: &FriOptions) -> VerifierContext {
    VerifierContext::new(DOMAIN_SIZE, BaseElement::GENERATOR, *options)
}

/// Commits to the evaluations of a polynomial with `num_coefficients` coefficients and opens all
/// layers at the specified positions.
fn build_proof(
    num_coefficients: usize,
    options: &FriOptions,
    positions: &[usize],
) -> (DefaultVerifierChannel<Poseidon>, Vec<BaseElement>) {
    let folding_factor = options.folding_factor();
    let poly: Vec<BaseElement> = (0..num_coefficients as u64)
        .map(|i| BaseElement::from(i * i + 3))
        .collect();
    let mut domain_offset = BaseElement::GENERATOR;
    let root = BaseElement::get_root_of_unity(DOMAIN_SIZE.trailing_zeros());
    let domain = BaseElement::get_power_series_with_offset(root, domain_offset, DOMAIN_SIZE);
    let evaluations = polynom::eval_many(&poly, &domain);

    let mut commitments = Vec::new();
    let mut alphas = Vec::new();
    let mut queries = Vec::new();
    let mut proofs = Vec::new();
    let mut positions = positions.to_vec();
    let queried_evaluations = positions.iter().map(|&p| evaluations[p]).collect();

    let mut values = evaluations;
    for depth in 0..options.num_layers() {
        let tree = utils::build_layer_tree::<Poseidon>(&values, folding_factor).unwrap();
        let rows = utils::transpose(&values, folding_factor);
        let mut layer_queries = Vec::new();
        let mut layer_proofs = Vec::new();
        for position in positions.iter_mut() {
            let (row, _) = utils::map_position(*position, values.len(), folding_factor);
            layer_queries.extend_from_slice(&rows[row]);
            layer_proofs.push(tree.prove(row).unwrap());
            *position = row;
        }

        let alpha = BaseElement::from(depth as u64 + 11);
        commitments.push(tree.root());
        alphas.push(alpha);
        queries.push(layer_queries);
        proofs.push(layer_proofs);

        values = folding::fold_layer(&values, domain_offset, folding_factor, alpha);
        domain_offset = domain_offset.exp(folding_factor as u64);
    }

    let remainder_tree = utils::build_layer_tree::<Poseidon>(&values, folding_factor).unwrap();
    commitments.push(remainder_tree.root());
    alphas.push(BaseElement::from(99u8));

    let channel = DefaultVerifierChannel::new(commitments, alphas, queries, proofs, values);
    (channel, queried_evaluations)
}
