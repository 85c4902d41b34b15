use crate::hash::ElementHasher;
use math::BaseElement;
use rayon::prelude::*;

// CONCURRENT NODE CONSTRUCTION
// ================================================================================================

/// Builds the same node layout as [super::build_merkle_nodes()], hashing every level of the
/// tree in multiple threads. A level is finished before the one above it is started.
pub fn build_merkle_nodes<H: ElementHasher>(leaves: &[BaseElement]) -> Vec<BaseElement> {
    let n = leaves.len();
    let mut nodes = vec![BaseElement::default(); 2 * n];
    nodes[n..].copy_from_slice(leaves);

    // parents of a level occupy [level_start, 2 * level_start), their children come right after
    let mut level_start = n / 2;
    while level_start > 0 {
        let (parents, children) = nodes.split_at_mut(2 * level_start);
        parents[level_start..]
            .par_iter_mut()
            .zip(children[..2 * level_start].par_chunks(2))
            .for_each(|(parent, pair)| *parent = H::merge(&[pair[0], pair[1]]));
        level_start /= 2;
    }
    nodes
}
