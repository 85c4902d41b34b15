use crate::{public_coin::DeepCompositionCoefficients, VerifierError};
use air::EvaluationFrame;
use math::{BaseElement, FieldElement};

#[cfg(feature = "concurrent")]
use rayon::prelude::*;

// DEEP COMPOSER
// ================================================================================================

/// Evaluates the DEEP composition polynomial at queried positions of the LDE domain.
///
/// For a query at `x`, every trace column `T_j` contributes
/// `c_j0 * (T_j(x) - T_j(z)) / (x - z) + c_j1 * (T_j(x) - T_j(z * g)) / (x - z * g)` and every
/// composition column `H_i` contributes `gamma_i * (H_i(x) - H_i(z^m)) / (x - z^m)`. The sum is
/// multiplied by `lambda_0 + lambda_1 * x` to reach the degree of the trace polynomials.
pub struct DeepComposer<'a> {
    z: BaseElement,
    next_z: BaseElement,
    z_m: BaseElement,
    domain_offset: BaseElement,
    lde_domain_generator: BaseElement,
    ood_frame: &'a EvaluationFrame<BaseElement>,
    ood_constraint_evaluations: &'a [BaseElement],
    coefficients: &'a DeepCompositionCoefficients,
}

impl<'a> DeepComposer<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        z: BaseElement,
        trace_domain_generator: BaseElement,
        lde_domain_generator: BaseElement,
        domain_offset: BaseElement,
        ce_blowup_factor: usize,
        ood_frame: &'a EvaluationFrame<BaseElement>,
        ood_constraint_evaluations: &'a [BaseElement],
        coefficients: &'a DeepCompositionCoefficients,
    ) -> Self {
        DeepComposer {
            z,
            next_z: z * trace_domain_generator,
            z_m: z.exp(ce_blowup_factor as u64),
            domain_offset,
            lde_domain_generator,
            ood_frame,
            ood_constraint_evaluations,
            coefficients,
        }
    }

    /// Evaluates the DEEP composition polynomial at every queried position.
    ///
    /// When `concurrent` feature is enabled, queries are processed in multiple threads.
    pub fn compose_queries(
        &self,
        positions: &[usize],
        trace_rows: &[Vec<BaseElement>],
        constraint_rows: &[Vec<BaseElement>],
    ) -> Result<Vec<BaseElement>, VerifierError> {
        let compose = |i: usize| self.compose(positions[i], &trace_rows[i], &constraint_rows[i]);

        #[cfg(not(feature = "concurrent"))]
        let results: Vec<Result<BaseElement, VerifierError>> =
            (0..positions.len()).map(compose).collect();

        #[cfg(feature = "concurrent")]
        let results: Vec<Result<BaseElement, VerifierError>> =
            (0..positions.len()).into_par_iter().map(compose).collect();

        results.into_iter().collect()
    }

    /// Evaluates the DEEP composition polynomial at `offset * g_lde^position` from the trace and
    /// composition rows opened at this position.
    pub fn compose(
        &self,
        position: usize,
        trace_row: &[BaseElement],
        constraint_row: &[BaseElement],
    ) -> Result<BaseElement, VerifierError> {
        let x = self.domain_offset * self.lde_domain_generator.exp(position as u64);

        let mut result = BaseElement::ZERO;
        for (j, &value) in trace_row.iter().enumerate() {
            let (c0, c1, _) = self.coefficients.trace[j];
            let t1 = checked_quotient(value - self.ood_frame.current[j], x - self.z, position)?;
            let t2 = checked_quotient(value - self.ood_frame.next[j], x - self.next_z, position)?;
            result += t1 * c0 + t2 * c1;
        }

        for (i, &value) in constraint_row.iter().enumerate() {
            let numerator = value - self.ood_constraint_evaluations[i];
            let h = checked_quotient(numerator, x - self.z_m, position)?;
            result += h * self.coefficients.constraints[i];
        }

        // raise the degree to match the degree of the trace polynomials
        let (lambda0, lambda1) = self.coefficients.degree;
        Ok(result * (lambda0 + lambda1 * x))
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Returns `numerator / divisor`, or an error when the divisor vanishes at query `position`.
pub fn checked_quotient(
    numerator: BaseElement,
    divisor: BaseElement,
    position: usize,
) -> Result<BaseElement, VerifierError> {
    if divisor == BaseElement::ZERO {
        return Err(VerifierError::DegenerateQueryPoint(position));
    }
    let quotient = numerator / divisor;
    debug_assert_eq!(numerator, quotient * divisor, "inexact quotient");
    Ok(quotient)
}
