use crate::{utils, FriError};
use crypto::ElementHasher;
use core::marker::PhantomData;
use math::BaseElement;

// VERIFIER CHANNEL TRAIT
// ================================================================================================

/// Provides the verifier with the FRI part of a proof and the transcript values derived from it.
pub trait VerifierChannel: Sync {
    type Hasher: ElementHasher;

    /// Returns commitments to all FRI layers followed by the commitment to the remainder.
    fn layer_commitments(&self) -> &[BaseElement];

    /// Returns the folding challenge of every layer.
    fn layer_alphas(&self) -> &[BaseElement];

    /// Returns the queried rows of every layer; the rows of all queries are concatenated.
    fn layer_queries(&self) -> &[Vec<BaseElement>];

    /// Returns Merkle paths of every queried row, indexed as `[layer][query]`.
    fn layer_proofs(&self) -> &[Vec<Vec<BaseElement>>];

    /// Returns the values of the last FRI layer.
    fn remainder(&self) -> &[BaseElement];

    /// Returns the row opened by the specified query at the specified layer.
    fn read_layer_row(&self, layer: usize, query: usize, folding_factor: usize) -> &[BaseElement] {
        let start = query * folding_factor;
        &self.layer_queries()[layer][start..start + folding_factor]
    }

    /// Reads FRI remainder values (last FRI layer). This also checks that the remainder is
    /// valid against the commitment sent by the prover.
    fn read_remainder(&self, folding_factor: usize) -> Result<&[BaseElement], FriError> {
        let remainder = self.remainder();

        // build remainder Merkle tree
        let remainder_tree = utils::build_layer_tree::<Self::Hasher>(remainder, folding_factor)
            .map_err(|err| FriError::InvalidProofShape(err.to_string()))?;

        // make sure the root of the tree matches the committed root of the last layer
        match self.layer_commitments().last() {
            Some(&root) if root == remainder_tree.root() => Ok(remainder),
            _ => Err(FriError::RemainderCommitmentMismatch),
        }
    }
}

// DEFAULT VERIFIER CHANNEL IMPLEMENTATION
// ================================================================================================

pub struct DefaultVerifierChannel<H: ElementHasher> {
    pub(super) commitments: Vec<BaseElement>,
    pub(super) alphas: Vec<BaseElement>,
    pub(super) queries: Vec<Vec<BaseElement>>,
    pub(super) proofs: Vec<Vec<Vec<BaseElement>>>,
    pub(super) remainder: Vec<BaseElement>,
    _hasher: PhantomData<H>,
}

impl<H: ElementHasher> DefaultVerifierChannel<H> {
    /// Builds a new verifier channel from the specified parameters.
    pub fn new(
        commitments: Vec<BaseElement>,
        alphas: Vec<BaseElement>,
        queries: Vec<Vec<BaseElement>>,
        proofs: Vec<Vec<Vec<BaseElement>>>,
        remainder: Vec<BaseElement>,
    ) -> Self {
        DefaultVerifierChannel {
            commitments,
            alphas,
            queries,
            proofs,
            remainder,
            _hasher: PhantomData,
        }
    }
}

impl<H: ElementHasher> VerifierChannel for DefaultVerifierChannel<H> {
    type Hasher = H;

    fn layer_commitments(&self) -> &[BaseElement] {
        &self.commitments
    }

    fn layer_alphas(&self) -> &[BaseElement] {
        &self.alphas
    }

    fn layer_queries(&self) -> &[Vec<BaseElement>] {
        &self.queries
    }

    fn layer_proofs(&self) -> &[Vec<Vec<BaseElement>>] {
        &self.proofs
    }

    fn remainder(&self) -> &[BaseElement] {
        &self.remainder
    }
}
