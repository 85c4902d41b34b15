use math::BaseElement;

mod poseidon;
pub use poseidon::Poseidon;

// ELEMENT HASHER
// ================================================================================================

/// Defines a hash function which maps field elements into a single field element.
///
/// Every commitment the verifier checks (Merkle nodes, leaves, public coin seeds) is produced by
/// one of these three functions, so a hasher fully determines the commitment scheme.
pub trait ElementHasher: Send + Sync + 'static {
    /// Returns a hash of two elements; used to merge Merkle tree nodes and to advance the public
    /// coin.
    fn merge(values: &[BaseElement; 2]) -> BaseElement;

    /// Returns a hash of an arbitrary sequence of elements.
    fn hash_elements(values: &[BaseElement]) -> BaseElement;

    /// Reduces a row of values into a single element: a single value is used as is, longer rows
    /// are hashed with [hash_elements()](ElementHasher::hash_elements).
    fn hash_leaf(values: &[BaseElement]) -> BaseElement {
        if values.len() == 1 {
            values[0]
        } else {
            Self::hash_elements(values)
        }
    }
}
