use super::{read_json, summarize_params, DemoError, SumAir};
use std::path::{Path, PathBuf};
use verifier::{
    Air, AirError, BaseElement, EvaluationFrame, FieldElement, ProofParams, TraceInfo,
    VerifierError,
};

fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn sum_air_transitions() {
    let inputs = [3u8, 9].map(BaseElement::from);
    let air = SumAir::new(TraceInfo::new(2, 4), &inputs).unwrap();
    assert_eq!(1, air.ce_blowup_factor());

    let current = vec![BaseElement::from(5u8), BaseElement::from(2u8)];
    let next = vec![BaseElement::from(7u8), BaseElement::from(3u8)];
    let frame = EvaluationFrame::from_rows(current.clone(), next);
    assert_eq!(vec![BaseElement::ZERO; 2], air.transition_evaluations(&frame));

    let next = vec![BaseElement::from(8u8), BaseElement::from(3u8)];
    let frame = EvaluationFrame::from_rows(current, next);
    assert_eq!(
        vec![BaseElement::ONE, BaseElement::ZERO],
        air.transition_evaluations(&frame)
    );

    let assertions = air.get_validated_assertions().unwrap();
    assert_eq!(3, assertions.len());
    assert!(assertions
        .iter()
        .any(|a| a.column() == 0 && a.step() == 3 && a.value() == inputs[1]));
}

#[test]
fn sum_air_requires_two_inputs() {
    assert_eq!(
        Err(AirError::InvalidPublicInputs(1, 2)),
        SumAir::new(TraceInfo::new(2, 8), &[BaseElement::ONE]).map(|_| ())
    );
}

#[test]
fn bundled_inputs_match_computation() {
    let params: ProofParams = read_json(&data_file("sum_params.json")).unwrap();
    let inputs: Vec<BaseElement> = read_json(&data_file("sum_inputs.json")).unwrap();
    assert_eq!(params.num_public_inputs, inputs.len());

    // the counter runs through 0..n - 1, and the last step adds nothing
    let n = params.trace_length as u64;
    let expected = inputs[0] + BaseElement::from((n - 1) * (n - 2) / 2);
    assert_eq!(expected, inputs[1]);
}

#[test]
fn summarize_bundled_params() {
    let params: ProofParams = read_json(&data_file("sum_params.json")).unwrap();
    let summary = summarize_params(&params, 128).unwrap();

    assert_eq!(2048, summary.lde_domain_size);
    assert_eq!(11, summary.tree_depth);
    assert_eq!(vec![9, 7, 5], summary.fri_tree_depths);
    assert_eq!(32, summary.remainder_size);
    assert_eq!(4, summary.remainder_max_degree_plus_1);
    assert!(summary.recommended_num_draws >= params.num_queries);
}

#[test]
fn summarize_invalid_params() {
    let mut params: ProofParams = read_json(&data_file("sum_params.json")).unwrap();
    params.num_draws = params.num_queries - 1;
    assert!(matches!(
        summarize_params(&params, 128),
        Err(DemoError::Verifier(VerifierError::MalformedInput(_)))
    ));
}

#[test]
fn summarize_oversized_params() {
    let params: ProofParams = read_json(&data_file("sum_params.json")).unwrap();
    let is_malformed = |params: &ProofParams| {
        matches!(
            summarize_params(params, 128),
            Err(DemoError::Verifier(VerifierError::MalformedInput(_)))
        )
    };

    let mut bad_params = params.clone();
    bad_params.num_fri_layers = (u32::MAX as usize).wrapping_add(3);
    assert!(is_malformed(&bad_params));

    let mut bad_params = params;
    bad_params.num_public_inputs = usize::MAX;
    assert!(is_malformed(&bad_params));
}

#[test]
fn read_missing_file() {
    let result: Result<ProofParams, DemoError> = read_json(&data_file("missing.json"));
    assert!(matches!(result, Err(DemoError::Io(_, _))));
}
