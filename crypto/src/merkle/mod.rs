use crate::{errors::MerkleError, hash::ElementHasher};
use core::marker::PhantomData;
use math::BaseElement;

#[cfg(feature = "concurrent")]
use rayon::prelude::*;

#[cfg(feature = "concurrent")]
pub mod concurrent;


// MERKLE TREE
// ================================================================================================

/// A binary Merkle tree whose leaves and nodes are field elements.
///
/// A node is `H::merge([left, right])`. Leaves are expected to be already reduced to a single
/// element (see [ElementHasher::hash_leaf()]). A tree with a single leaf is valid: its root is the
/// leaf itself and all paths into it are empty.
#[derive(Debug, Clone)]
pub struct MerkleTree<H: ElementHasher> {
    nodes: Vec<BaseElement>,
    _hasher: PhantomData<H>,
}

impl<H: ElementHasher> MerkleTree<H> {
    /// Creates a new merkle tree from the provided leaves.
    ///
    /// When `concurrent` feature is enabled, the tree is built using multiple threads.
    ///
    /// # Errors
    /// Returns an error if the number of leaves is not a power of two.
    pub fn new(leaves: Vec<BaseElement>) -> Result<Self, MerkleError> {
        if !leaves.len().is_power_of_two() {
            return Err(MerkleError::NumberOfLeavesNotPowerOfTwo(leaves.len()));
        }
        #[cfg(not(feature = "concurrent"))]
        let nodes = build_merkle_nodes::<H>(&leaves);

        #[cfg(feature = "concurrent")]
        let nodes = concurrent::build_merkle_nodes::<H>(&leaves);

        Ok(MerkleTree {
            nodes,
            _hasher: PhantomData,
        })
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> BaseElement {
        self.nodes[1]
    }

    /// Returns depth of the tree.
    pub fn depth(&self) -> usize {
        self.num_leaves().trailing_zeros() as usize
    }

    /// Returns the authentication path for the leaf at the specified index; the sibling of the
    /// leaf comes first and the child of the root comes last.
    pub fn prove(&self, index: usize) -> Result<Vec<BaseElement>, MerkleError> {
        let num_leaves = self.num_leaves();
        if index >= num_leaves {
            return Err(MerkleError::LeafIndexOutOfBounds(index, num_leaves));
        }

        let mut path = Vec::with_capacity(self.depth());
        let mut index = index + num_leaves;
        while index > 1 {
            path.push(self.nodes[index ^ 1]);
            index >>= 1;
        }
        Ok(path)
    }

    /// Checks whether `path` authenticates `leaf` at position `index` against `root`.
    ///
    /// At every level, bit `k` of `index` decides whether the running node is the left (bit is
    /// 0) or the right (bit is 1) input of the merge. The index must be addressable with
    /// `path.len()` bits.
    pub fn verify(
        root: BaseElement,
        index: usize,
        leaf: BaseElement,
        path: &[BaseElement],
    ) -> bool {
        if path.len() < usize::BITS as usize && index >> path.len() != 0 {
            return false;
        }

        let mut node = leaf;
        let mut index = index;
        for &sibling in path {
            node = if index & 1 == 0 {
                H::merge(&[node, sibling])
            } else {
                H::merge(&[sibling, node])
            };
            index >>= 1;
        }

        node == root
    }

    /// Checks a batch of independent openings against the same root. Every path must have
    /// exactly `depth` nodes.
    ///
    /// When `concurrent` feature is enabled, the paths are checked in multiple threads.
    ///
    /// # Errors
    /// Returns the error for the first opening (in the order provided) which fails to verify.
    pub fn verify_batch(
        root: BaseElement,
        depth: usize,
        indexes: &[usize],
        leaves: &[BaseElement],
        paths: &[Vec<BaseElement>],
    ) -> Result<(), MerkleError> {
        if indexes.len() != leaves.len() || indexes.len() != paths.len() {
            return Err(MerkleError::MismatchedOpeningCount(leaves.len(), paths.len()));
        }

        let check = |(i, &index): (usize, &usize)| -> Result<(), MerkleError> {
            let path = &paths[i];
            if path.len() != depth {
                return Err(MerkleError::InvalidPathLength(index, path.len(), depth));
            }
            if !Self::verify(root, index, leaves[i], path) {
                return Err(MerkleError::RootMismatch(index));
            }
            Ok(())
        };

        #[cfg(not(feature = "concurrent"))]
        let results: Vec<Result<(), MerkleError>> = indexes.iter().enumerate().map(check).collect();

        #[cfg(feature = "concurrent")]
        let results: Vec<Result<(), MerkleError>> =
            indexes.par_iter().enumerate().map(check).collect();

        results.into_iter().collect()
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    fn num_leaves(&self) -> usize {
        self.nodes.len() / 2
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Builds all internal nodes of a Merkle tree. The result has 2 * leaves.len() entries: position 0
/// is unused, position 1 is the root, and the children of node `i` are at `2i` and `2i + 1`; the
/// leaves occupy the second half.
pub fn build_merkle_nodes<H: ElementHasher>(leaves: &[BaseElement]) -> Vec<BaseElement> {
    let n = leaves.len();
    let mut nodes = vec![BaseElement::default(); 2 * n];
    nodes[n..].copy_from_slice(leaves);
    for i in (1..n).rev() {
        nodes[i] = H::merge(&[nodes[2 * i], nodes[2 * i + 1]]);
    }
    nodes
}
