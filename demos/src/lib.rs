//! Computations and file helpers used by the `stark-verify` runner.

use displaydoc::Display;
use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use thiserror::Error;
use verifier::{
    Air, AirContext, AirError, Assertion, BaseElement, EvaluationFrame, FieldElement, ProofParams,
    TraceInfo, VerifierError,
};

#[cfg(test)]
mod tests;

// SUM COMPUTATION
// ================================================================================================

/// Running sum of a step counter.
///
/// Column 0 holds the sum and column 1 the counter; at every step the counter is added to the
/// sum and then incremented. The public inputs are the initial sum and the sum at the last step.
pub struct SumAir {
    context: AirContext,
    start: BaseElement,
    result: BaseElement,
}

impl Air for SumAir {
    fn new(trace_info: TraceInfo, public_inputs: &[BaseElement]) -> Result<Self, AirError> {
        if public_inputs.len() != 2 {
            return Err(AirError::InvalidPublicInputs(public_inputs.len(), 2));
        }
        Ok(SumAir {
            context: AirContext::new(trace_info, vec![1, 1], 3)?,
            start: public_inputs[0],
            result: public_inputs[1],
        })
    }

    fn context(&self) -> &AirContext {
        &self.context
    }

    fn evaluate_transition<E: FieldElement + From<BaseElement>>(
        &self,
        frame: &EvaluationFrame<E>,
        result: &mut [E],
    ) {
        let current = &frame.current;
        let next = &frame.next;
        result[0] = next[0] - current[0] - current[1];
        result[1] = next[1] - current[1] - E::ONE;
    }

    fn get_assertions(&self) -> Vec<Assertion> {
        let last_step = self.trace_length() - 1;
        vec![
            Assertion::single(0, 0, self.start),
            Assertion::single(1, 0, BaseElement::ZERO),
            Assertion::single(0, last_step, self.result),
        ]
    }
}

// PARAMETER SUMMARY
// ================================================================================================

/// Sizes implied by a set of proof parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsSummary {
    pub lde_domain_size: usize,
    pub tree_depth: usize,
    pub fri_tree_depths: Vec<usize>,
    pub remainder_size: usize,
    pub remainder_max_degree_plus_1: usize,
    /// Number of query draws which yields enough distinct positions except with probability
    /// `2^-security_bits`.
    pub recommended_num_draws: usize,
}

/// Validates `params` and returns the sizes derived from them.
pub fn summarize_params(
    params: &ProofParams,
    security_bits: u32,
) -> Result<ParamsSummary, DemoError> {
    params.validate().map_err(VerifierError::from)?;
    let lde_domain_size = params.lde_domain_size();
    let recommended_num_draws =
        ProofParams::number_of_draws(params.num_queries, lde_domain_size, security_bits)
            .map_err(VerifierError::from)?;

    Ok(ParamsSummary {
        lde_domain_size,
        tree_depth: params.tree_depth(),
        fri_tree_depths: params.fri_tree_depths(),
        remainder_size: params.remainder_size(),
        remainder_max_degree_plus_1: params.remainder_max_degree_plus_1(),
        recommended_num_draws,
    })
}

// FILE HELPERS
// ================================================================================================

/// Reads a JSON document from `path`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DemoError> {
    let name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| DemoError::Io(name.clone(), e))?;
    serde_json::from_str(&contents).map_err(|e| DemoError::Json(name, e))
}

// ERRORS
// ================================================================================================

#[derive(Debug, Display, Error)]
pub enum DemoError {
    /// could not read {0}: {1}
    Io(String, std::io::Error),
    /// could not parse {0}: {1}
    Json(String, serde_json::Error),
    /// {0}
    Verifier(#[from] VerifierError),
}
