use crate::{folding, utils, FriError};
use crypto::{ElementHasher, MerkleTree};
use math::{polynom, BaseElement, FieldElement};

#[cfg(feature = "concurrent")]
use rayon::prelude::*;

mod context;
pub use context::VerifierContext;

mod channel;
pub use channel::{DefaultVerifierChannel, VerifierChannel};

#[cfg(test)]
mod tests;

// VERIFICATION PROCEDURE
// ================================================================================================

/// Returns Ok(()) if values in the `evaluations` slice represent evaluations of a polynomial
/// with degree smaller than `domain_size / blowup_factor` against x coordinates specified by
/// the `positions` slice.
///
/// Every query is walked through all FRI layers independently: at each layer the row containing
/// the query is authenticated against the layer commitment, the value carried over from the
/// previous layer is located in the row, and the row is folded into the value for the next
/// layer. The value reaching the end must match the remainder, and the remainder itself must be
/// a polynomial of the reduced degree.
///
/// When `concurrent` feature is enabled, queries are checked in multiple threads.
pub fn verify<C: VerifierChannel>(
    context: &VerifierContext,
    channel: &C,
    evaluations: &[BaseElement],
    positions: &[usize],
) -> Result<(), FriError> {
    check_shape(context, channel, evaluations, positions)?;

    // 1 ----- verify the recursive components of the FRI proof -----------------------------------
    let check = |(query, (&position, &evaluation)): (usize, (&usize, &BaseElement))| {
        verify_query(context, channel, query, position, evaluation)
    };

    #[cfg(not(feature = "concurrent"))]
    let results: Vec<Result<(usize, BaseElement), FriError>> = positions
        .iter()
        .zip(evaluations)
        .enumerate()
        .map(check)
        .collect();

    #[cfg(feature = "concurrent")]
    let results: Vec<Result<(usize, BaseElement), FriError>> = positions
        .par_iter()
        .zip(evaluations)
        .enumerate()
        .map(check)
        .collect();

    let folded = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    // 2 ----- verify the remainder of the FRI proof ----------------------------------------------

    // read the remainder from the channel and make sure it matches with the values folded
    // from the previous layer
    let remainder = channel.read_remainder(context.folding_factor())?;
    for (query, &(position, value)) in folded.iter().enumerate() {
        if remainder[position] != value {
            return Err(FriError::InvalidRemainderFolding(query));
        }
    }

    // make sure the remainder values satisfy the degree
    let reduction = (context.folding_factor() as u64).pow(context.num_fri_layers() as u32);
    verify_remainder(
        remainder,
        context.remainder_max_degree_plus_1(),
        context.domain_offset().exp(reduction),
        context.domain_root().exp(reduction),
    )
}

/// Returns Ok(()) if values in the `remainder` slice represent evaluations of a polynomial
/// with fewer than `max_degree_plus_1` coefficients over the domain `offset * <root>`.
pub fn verify_remainder(
    remainder: &[BaseElement],
    max_degree_plus_1: usize,
    domain_offset: BaseElement,
    domain_root: BaseElement,
) -> Result<(), FriError> {
    if max_degree_plus_1 > remainder.len() {
        return Err(FriError::InvalidProofShape(format!(
            "remainder has {} values but must describe {} coefficients",
            remainder.len(),
            max_degree_plus_1
        )));
    }

    // interpolate the first max_degree_plus_1 points into a polynomial
    let domain =
        BaseElement::get_power_series_with_offset(domain_root, domain_offset, remainder.len());
    let poly = polynom::interpolate(
        &domain[..max_degree_plus_1],
        &remainder[..max_degree_plus_1],
    );

    // check that polynomial evaluates correctly for all other points in the remainder
    for (&x, &y) in domain.iter().zip(remainder).skip(max_degree_plus_1) {
        if polynom::eval(&poly, x) != y {
            return Err(FriError::RemainderDegreeMismatch(
                max_degree_plus_1.saturating_sub(1),
            ));
        }
    }

    Ok(())
}

// HELPER FUNCTIONS
// ================================================================================================

/// Walks a single query through all FRI layers and returns its position and value in the
/// remainder.
fn verify_query<C: VerifierChannel>(
    context: &VerifierContext,
    channel: &C,
    query: usize,
    position: usize,
    evaluation: BaseElement,
) -> Result<(usize, BaseElement), FriError> {
    let folding_factor = context.folding_factor();
    let commitments = channel.layer_commitments();
    let alphas = channel.layer_alphas();

    let mut domain_size = context.domain_size();
    let mut domain_offset = context.domain_offset();
    let mut domain_root = context.domain_root();
    let mut position = position;
    let mut value = evaluation;

    for depth in 0..context.num_fri_layers() {
        let num_rows = domain_size / folding_factor;
        let (row, column) = utils::map_position(position, domain_size, folding_factor);
        let row_values = channel.read_layer_row(depth, query, folding_factor);

        // authenticate the row against the layer commitment
        let path = &channel.layer_proofs()[depth][query];
        if path.len() != context.layer_depth(depth) {
            return Err(FriError::LayerCommitmentMismatch(depth));
        }
        let leaf = C::Hasher::hash_leaf(row_values);
        if !MerkleTree::<C::Hasher>::verify(commitments[depth], row, leaf, path) {
            return Err(FriError::LayerCommitmentMismatch(depth));
        }

        // the value carried from the previous layer must sit in the opened row
        if row_values[column] != value {
            return Err(FriError::InvalidLayerFolding(depth));
        }

        let xs = folding::row_x_coordinates(
            domain_offset,
            domain_root,
            row,
            num_rows,
            folding_factor,
        );
        value = folding::fold_row(&xs, row_values, alphas[depth]);

        // update variables for the next iteration of the loop
        domain_offset = domain_offset.exp(folding_factor as u64);
        domain_root = domain_root.exp(folding_factor as u64);
        domain_size = num_rows;
        position = row;
    }

    Ok((position, value))
}

/// Makes sure the channel holds exactly the data the context calls for, so that the query loop
/// can index into it freely.
fn check_shape<C: VerifierChannel>(
    context: &VerifierContext,
    channel: &C,
    evaluations: &[BaseElement],
    positions: &[usize],
) -> Result<(), FriError> {
    let num_layers = context.num_fri_layers();
    let num_queries = positions.len();
    let folding_factor = context.folding_factor();

    if evaluations.len() != num_queries {
        return Err(FriError::InvalidProofShape(format!(
            "expected {} evaluations, but received {}",
            num_queries,
            evaluations.len()
        )));
    }
    if let Some(&position) = positions.iter().find(|&&p| p >= context.domain_size()) {
        return Err(FriError::InvalidProofShape(format!(
            "query position {} is outside of the domain of size {}",
            position,
            context.domain_size()
        )));
    }
    if channel.layer_commitments().len() != num_layers + 1 {
        return Err(FriError::InvalidProofShape(format!(
            "expected {} layer commitments, but received {}",
            num_layers + 1,
            channel.layer_commitments().len()
        )));
    }
    if channel.layer_alphas().len() < num_layers {
        return Err(FriError::InvalidProofShape(format!(
            "expected at least {} folding challenges, but received {}",
            num_layers,
            channel.layer_alphas().len()
        )));
    }
    if channel.layer_queries().len() != num_layers || channel.layer_proofs().len() != num_layers {
        return Err(FriError::InvalidProofShape(format!(
            "expected openings for {} layers",
            num_layers
        )));
    }
    for (depth, (queries, proofs)) in channel
        .layer_queries()
        .iter()
        .zip(channel.layer_proofs())
        .enumerate()
    {
        if queries.len() != num_queries * folding_factor || proofs.len() != num_queries {
            return Err(FriError::InvalidProofShape(format!(
                "layer {} must open {} rows of {} values",
                depth, num_queries, folding_factor
            )));
        }
    }
    if channel.remainder().len() != context.remainder_size() {
        return Err(FriError::InvalidProofShape(format!(
            "expected remainder of {} values, but received {}",
            context.remainder_size(),
            channel.remainder().len()
        )));
    }

    Ok(())
}
