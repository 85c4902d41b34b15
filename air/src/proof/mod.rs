use crate::{errors::ProofShapeError, ProofParams};
use math::BaseElement;
use serde::{Deserialize, Serialize};


// STARK PROOF
// ================================================================================================

/// A STARK proof as emitted by the prover.
///
/// All vectors have sizes fixed by [ProofParams]; [StarkProof::check_shape()] must succeed before
/// a proof is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarkProof {
    /// Root of the tree committing to the trace LDE.
    pub trace_commitment: BaseElement,
    /// Root of the tree committing to the composition polynomial columns.
    pub constraint_commitment: BaseElement,
    /// Roots of all FRI layer trees; the last one commits to the remainder.
    pub fri_commitments: Vec<BaseElement>,

    /// Authentication paths of the queried trace rows.
    pub trace_query_proofs: Vec<Vec<BaseElement>>,
    /// Authentication paths of the queried composition rows.
    pub constraint_query_proofs: Vec<Vec<BaseElement>>,
    /// Authentication paths of the queried FRI rows, indexed as `[layer][query]`.
    pub fri_layer_proofs: Vec<Vec<Vec<BaseElement>>>,

    /// Queried trace rows.
    pub trace_evaluations: Vec<Vec<BaseElement>>,
    /// Queried composition rows.
    pub constraint_evaluations: Vec<Vec<BaseElement>>,
    /// Queried FRI rows; the rows of all queries of a layer are concatenated.
    pub fri_layer_queries: Vec<Vec<BaseElement>>,
    pub fri_remainder: Vec<BaseElement>,

    /// Trace rows at the out-of-domain point `z` and at `z * g`.
    pub ood_trace_frame: [Vec<BaseElement>; 2],
    /// Composition columns at `z^m`.
    pub ood_constraint_evaluations: Vec<BaseElement>,
    /// Transition constraints evaluated over the out-of-domain frame.
    pub ood_frame_constraint_evaluation: Vec<BaseElement>,

    pub pow_nonce: BaseElement,
    pub pub_coin_seed: Vec<BaseElement>,
}

impl StarkProof {
    /// Checks that every component has the size the parameters call for, and reports the first
    /// one that does not.
    pub fn check_shape(&self, params: &ProofParams) -> Result<(), ProofShapeError> {
        let num_queries = params.num_queries;
        let tree_depth = params.tree_depth();
        let num_fri_layers = params.num_fri_layers;

        check_len("fri_commitments", &self.fri_commitments, num_fri_layers + 1)?;

        check_matrix("trace_query_proofs", &self.trace_query_proofs, num_queries, tree_depth)?;
        check_matrix(
            "constraint_query_proofs",
            &self.constraint_query_proofs,
            num_queries,
            tree_depth,
        )?;
        check_len("fri_layer_proofs", &self.fri_layer_proofs, num_fri_layers)?;
        for (k, (proofs, depth)) in self
            .fri_layer_proofs
            .iter()
            .zip(params.fri_tree_depths())
            .enumerate()
        {
            check_matrix(&format!("fri_layer_proofs[{}]", k), proofs, num_queries, depth)?;
        }

        check_matrix(
            "trace_evaluations",
            &self.trace_evaluations,
            num_queries,
            params.trace_width,
        )?;
        check_matrix(
            "constraint_evaluations",
            &self.constraint_evaluations,
            num_queries,
            params.ce_blowup_factor,
        )?;
        check_matrix(
            "fri_layer_queries",
            &self.fri_layer_queries,
            num_fri_layers,
            num_queries * params.folding_factor,
        )?;
        check_len("fri_remainder", &self.fri_remainder, params.remainder_size())?;

        for (i, row) in self.ood_trace_frame.iter().enumerate() {
            check_len(&format!("ood_trace_frame[{}]", i), row, params.trace_width)?;
        }
        check_len(
            "ood_constraint_evaluations",
            &self.ood_constraint_evaluations,
            params.ce_blowup_factor,
        )?;
        check_len(
            "ood_frame_constraint_evaluation",
            &self.ood_frame_constraint_evaluation,
            params.num_transition_constraints,
        )?;
        check_len("pub_coin_seed", &self.pub_coin_seed, params.num_pub_coin_seed)?;

        Ok(())
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn check_len<T>(name: &str, values: &[T], expected: usize) -> Result<(), ProofShapeError> {
    if values.len() != expected {
        return Err(ProofShapeError(name.to_string(), values.len(), expected));
    }
    Ok(())
}

fn check_matrix<T>(
    name: &str,
    rows: &[Vec<T>],
    num_rows: usize,
    row_len: usize,
) -> Result<(), ProofShapeError> {
    check_len(name, rows, num_rows)?;
    for (i, row) in rows.iter().enumerate() {
        check_len(&format!("{}[{}]", name, i), row, row_len)?;
    }
    Ok(())
}
