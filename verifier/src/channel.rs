use crate::VerifierError;
use air::{EvaluationFrame, ProofParams, StarkProof};
use core::marker::PhantomData;
use crypto::{ElementHasher, MerkleTree};
use math::BaseElement;

// VERIFIER CHANNEL
// ================================================================================================

/// Gives the verifier access to the values of a proof; queried values are authenticated against
/// their commitments when they are read.
pub struct VerifierChannel<'a, H: ElementHasher> {
    params: &'a ProofParams,
    proof: &'a StarkProof,
    layer_alphas: Vec<BaseElement>,
    _hasher: PhantomData<H>,
}

impl<'a, H: ElementHasher> VerifierChannel<'a, H> {
    /// Creates a new channel for a proof whose shape has already been checked against `params`.
    pub fn new(
        params: &'a ProofParams,
        proof: &'a StarkProof,
        layer_alphas: Vec<BaseElement>,
    ) -> Self {
        VerifierChannel {
            params,
            proof,
            layer_alphas,
            _hasher: PhantomData,
        }
    }

    /// Returns trace rows at the out-of-domain points `z` and `z * g`.
    pub fn read_ood_frame(&self) -> EvaluationFrame<BaseElement> {
        let [current, next] = self.proof.ood_trace_frame.clone();
        EvaluationFrame::from_rows(current, next)
    }

    /// Returns trace rows at the specified positions. This also checks that the rows are valid
    /// against the trace commitment sent by the prover.
    pub fn read_trace_evaluations(
        &self,
        positions: &[usize],
    ) -> Result<&[Vec<BaseElement>], VerifierError> {
        self.authenticate(
            self.proof.trace_commitment,
            positions,
            &self.proof.trace_evaluations,
            &self.proof.trace_query_proofs,
        )
        .map_err(|msg| VerifierError::CommitmentMismatch(format!("trace {}", msg)))?;
        Ok(&self.proof.trace_evaluations)
    }

    /// Returns composition column values at the specified positions. This also checks that the
    /// values are valid against the constraint commitment sent by the prover.
    pub fn read_constraint_evaluations(
        &self,
        positions: &[usize],
    ) -> Result<&[Vec<BaseElement>], VerifierError> {
        self.authenticate(
            self.proof.constraint_commitment,
            positions,
            &self.proof.constraint_evaluations,
            &self.proof.constraint_query_proofs,
        )
        .map_err(|msg| VerifierError::CommitmentMismatch(format!("constraint {}", msg)))?;
        Ok(&self.proof.constraint_evaluations)
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    fn authenticate(
        &self,
        root: BaseElement,
        positions: &[usize],
        rows: &[Vec<BaseElement>],
        paths: &[Vec<BaseElement>],
    ) -> Result<(), String> {
        let leaves: Vec<BaseElement> = rows.iter().map(|row| H::hash_leaf(row)).collect();
        MerkleTree::<H>::verify_batch(root, self.params.tree_depth(), positions, &leaves, paths)
            .map_err(|err| err.to_string())
    }
}

// FRI VERIFIER CHANNEL IMPLEMENTATION
// ================================================================================================

impl<'a, H: ElementHasher> fri::VerifierChannel for VerifierChannel<'a, H> {
    type Hasher = H;

    fn layer_commitments(&self) -> &[BaseElement] {
        &self.proof.fri_commitments
    }

    fn layer_alphas(&self) -> &[BaseElement] {
        &self.layer_alphas
    }

    fn layer_queries(&self) -> &[Vec<BaseElement>] {
        &self.proof.fri_layer_queries
    }

    fn layer_proofs(&self) -> &[Vec<Vec<BaseElement>>] {
        &self.proof.fri_layer_proofs
    }

    fn remainder(&self) -> &[BaseElement] {
        &self.proof.fri_remainder
    }
}
