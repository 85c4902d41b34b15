use crypto::{ElementHasher, MerkleError, MerkleTree};
use math::BaseElement;

/// Splits `values` into `values.len() / folding_factor` rows; row `j` contains the values at
/// positions `j, j + num_rows, j + 2 * num_rows, ...`.
pub fn transpose<E: Copy>(values: &[E], folding_factor: usize) -> Vec<Vec<E>> {
    let num_rows = values.len() / folding_factor;
    (0..num_rows)
        .map(|row| {
            (0..folding_factor)
                .map(|column| values[row + column * num_rows])
                .collect()
        })
        .collect()
}

/// Reduces every row into a single Merkle leaf.
pub fn hash_rows<H: ElementHasher>(rows: &[Vec<BaseElement>]) -> Vec<BaseElement> {
    rows.iter().map(|row| H::hash_leaf(row)).collect()
}

/// Commits to a FRI layer: the layer is transposed into rows of `folding_factor` values and a
/// Merkle tree is built over the hashed rows.
pub fn build_layer_tree<H: ElementHasher>(
    values: &[BaseElement],
    folding_factor: usize,
) -> Result<MerkleTree<H>, MerkleError> {
    let rows = transpose(values, folding_factor);
    MerkleTree::new(hash_rows::<H>(&rows))
}

/// Maps a position in a layer of `domain_size` values to its (row, column) in the transposed
/// layer.
pub fn map_position(position: usize, domain_size: usize, folding_factor: usize) -> (usize, usize) {
    let num_rows = domain_size / folding_factor;
    (position % num_rows, position / num_rows)
}
