//! Degree-respecting projection of a layer onto a domain `folding_factor` times smaller.
//!
//! A layer of `n` evaluations over `offset * <root>` is viewed as `n / folding_factor` rows; row
//! `j` holds the evaluations at `offset * root^(j + c * n / folding_factor)` for every column `c`.
//! These x coordinates all map to the same point `(offset * root^j)^folding_factor` of the next
//! domain, and interpolating the row then evaluating the interpolant at `alpha` yields the next
//! layer's value at that point.

use math::{log2, polynom, StarkField};

// FOLDING
// ================================================================================================

/// Returns the x coordinates of all values in row `row` of a layer with `num_rows` rows over the
/// domain `offset * <root>`.
pub fn row_x_coordinates<E: StarkField>(
    domain_offset: E,
    domain_root: E,
    row: usize,
    num_rows: usize,
    folding_factor: usize,
) -> Vec<E> {
    let start = domain_offset * domain_root.exp(row as u64);
    let step = domain_root.exp(num_rows as u64);
    E::get_power_series_with_offset(step, start, folding_factor)
}

/// Interpolates a row of values over `xs` and evaluates the result at `alpha`.
pub fn fold_row<E: StarkField>(xs: &[E], ys: &[E], alpha: E) -> E {
    debug_assert_eq!(xs.len(), ys.len(), "row length mismatch");
    let poly = polynom::interpolate(xs, ys);
    polynom::eval(&poly, alpha)
}

/// Folds all evaluations of a layer over `offset * <root>` (where `root` generates a subgroup of
/// size `values.len()`) into the evaluations of the next layer over `offset^ff * <root^ff>`.
pub fn fold_layer<E: StarkField>(
    values: &[E],
    domain_offset: E,
    folding_factor: usize,
    alpha: E,
) -> Vec<E> {
    let domain_root = E::get_root_of_unity(log2(values.len()));
    let num_rows = values.len() / folding_factor;

    (0..num_rows)
        .map(|row| {
            let xs = row_x_coordinates(domain_offset, domain_root, row, num_rows, folding_factor);
            let ys: Vec<E> = (0..folding_factor)
                .map(|column| values[row + column * num_rows])
                .collect();
            fold_row(&xs, &ys, alpha)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use math::{polynom, BaseElement, FieldElement, StarkField};

    #[test]
    fn fold_layer_halves_degree() {
        // p(x) = 1 + 2x + 3x^2 + 4x^3 over a coset of size 16
        let poly: Vec<BaseElement> = (1u8..=4).map(BaseElement::from).collect();
        let offset = BaseElement::GENERATOR;
        let root = BaseElement::get_root_of_unity(4);
        let domain = BaseElement::get_power_series_with_offset(root, offset, 16);
        let values = polynom::eval_many(&poly, &domain);

        // p(x) = p_even(x^2) + x * p_odd(x^2); folding computes p_even(y) + alpha * p_odd(y)
        let alpha = BaseElement::from(5u8);
        let folded = super::fold_layer(&values, offset, 2, alpha);
        assert_eq!(8, folded.len());

        let expected_poly = vec![
            poly[0] + alpha * poly[1],
            poly[2] + alpha * poly[3],
        ];
        let next_domain = BaseElement::get_power_series_with_offset(root.exp(2), offset.exp(2), 8);
        assert_eq!(polynom::eval_many(&expected_poly, &next_domain), folded);
    }

    #[test]
    fn fold_layer_by_four() {
        let poly: Vec<BaseElement> = (1u8..=8).map(BaseElement::from).collect();
        let offset = BaseElement::GENERATOR;
        let root = BaseElement::get_root_of_unity(5);
        let domain = BaseElement::get_power_series_with_offset(root, offset, 32);
        let values = polynom::eval_many(&poly, &domain);

        let alpha = BaseElement::from(3u8);
        let folded = super::fold_layer(&values, offset, 4, alpha);

        // p(x) = sum_i x^i * p_i(x^4); folding computes sum_i alpha^i * p_i(y)
        let a = [BaseElement::ONE, alpha, alpha.exp(2), alpha.exp(3)];
        let expected_poly = vec![
            poly[0] * a[0] + poly[1] * a[1] + poly[2] * a[2] + poly[3] * a[3],
            poly[4] * a[0] + poly[5] * a[1] + poly[6] * a[2] + poly[7] * a[3],
        ];
        let next_domain = BaseElement::get_power_series_with_offset(root.exp(4), offset.exp(4), 8);
        assert_eq!(polynom::eval_many(&expected_poly, &next_domain), folded);
    }

    #[test]
    fn row_x_coordinates() {
        let offset = BaseElement::GENERATOR;
        let root = BaseElement::get_root_of_unity(3);
        let xs = super::row_x_coordinates(offset, root, 1, 4, 2);
        assert_eq!(vec![offset * root, offset * root.exp(5)], xs);
        // both coordinates square to the same point
        assert_eq!(xs[0].exp(2), xs[1].exp(2));
    }
}
