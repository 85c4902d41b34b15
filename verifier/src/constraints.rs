use crate::{public_coin::VerifierCoin, VerifierError};
use air::{Air, Assertion, EvaluationFrame};
use math::{BaseElement, FieldElement};

// OUT-OF-DOMAIN CONSISTENCY
// ================================================================================================

/// Checks that the composition polynomial columns opened at `z^m` are consistent with the
/// constraints of `air` evaluated over the out-of-domain trace frame.
///
/// The transition evaluations sent by the prover must also match the ones computed from the frame.
pub fn check_ood_consistency<A: Air>(
    air: &A,
    assertions: &[Assertion],
    ood_frame: &EvaluationFrame<BaseElement>,
    ood_frame_constraint_evaluation: &[BaseElement],
    ood_constraint_evaluations: &[BaseElement],
    coin: &VerifierCoin,
) -> Result<(), VerifierError> {
    let transitions = air.transition_evaluations(ood_frame);
    if transitions != ood_frame_constraint_evaluation {
        return Err(VerifierError::OodInconsistency);
    }

    let expected = evaluate_constraints_at(air, assertions, ood_frame, &transitions, coin)?;
    if expected != compose_columns_at(ood_constraint_evaluations, coin.z) {
        return Err(VerifierError::OodInconsistency);
    }
    Ok(())
}

/// Evaluates the composition polynomial at `coin.z` from the trace frame at `z`.
///
/// Every constraint is divided by its divisor, lifted to the composition degree, and combined
/// with the coefficients drawn for it. Transition constraints are divided by
/// `(x^n - 1) / (x - g^(n - 1))`; the assertion at `step` is divided by `x - g^step`.
pub fn evaluate_constraints_at<A: Air>(
    air: &A,
    assertions: &[Assertion],
    frame: &EvaluationFrame<BaseElement>,
    transitions: &[BaseElement],
    coin: &VerifierCoin,
) -> Result<BaseElement, VerifierError> {
    let context = air.context();
    let z = coin.z;
    let g = context.trace_domain_generator();
    let trace_length = context.trace_length() as u64;

    // 1 ----- transition constraints -------------------------------------------------------------
    let z_n_minus_one = z.exp(trace_length) - BaseElement::ONE;
    if z_n_minus_one == BaseElement::ZERO {
        return Err(VerifierError::DegenerateOodPoint);
    }
    let last_step = z - g.exp(trace_length - 1);

    let mut transition_sum = BaseElement::ZERO;
    for (i, (&evaluation, &(alpha, beta))) in
        transitions.iter().zip(&coin.transition_coeffs).enumerate()
    {
        let z_adjusted = z.exp(context.transition_degree_adjustment(i) as u64);
        transition_sum += evaluation * (alpha + beta * z_adjusted);
    }
    let mut result = transition_sum * last_step / z_n_minus_one;

    // 2 ----- boundary constraints ---------------------------------------------------------------
    let z_adjusted = z.exp(context.boundary_degree_adjustment() as u64);
    for (assertion, &(alpha, beta)) in assertions.iter().zip(&coin.boundary_coeffs) {
        let divisor = z - g.exp(assertion.step() as u64);
        if divisor == BaseElement::ZERO {
            return Err(VerifierError::DegenerateOodPoint);
        }
        let numerator = frame.current[assertion.column()] - assertion.value();
        result += numerator * (alpha + beta * z_adjusted) / divisor;
    }

    Ok(result)
}

/// Recombines composition polynomial columns `H_i(z^m)` into `C(z) = sum_i z^i * H_i(z^m)`.
pub fn compose_columns_at(columns: &[BaseElement], z: BaseElement) -> BaseElement {
    columns
        .iter()
        .rev()
        .fold(BaseElement::ZERO, |acc, &value| acc * z + value)
}
