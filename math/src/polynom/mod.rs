//! Basic polynomial operations.
//!
//! Polynomials are represented as slices of coefficients in the order of increasing degree, so
//! `p[0]` is the constant term. All operations are naive quadratic-time algorithms: the verifier
//! only ever interpolates polynomials with a handful of coefficients (folding rows, FRI
//! remainders).

use crate::field::FieldElement;


// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` at coordinate `x`
pub fn eval<E: FieldElement>(p: &[E], x: E) -> E {
    // Horner evaluation
    p.iter().rev().fold(E::ZERO, |acc, &coeff| acc * x + coeff)
}

/// Evaluates polynomial `p` at all coordinates in `xs` slice.
pub fn eval_many<E: FieldElement>(p: &[E], xs: &[E]) -> Vec<E> {
    xs.iter().map(|&x| eval(p, x)).collect()
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

/// Uses Lagrange interpolation to build a polynomial from X and Y coordinates. All X coordinates
/// must be distinct.
pub fn interpolate<E: FieldElement>(xs: &[E], ys: &[E]) -> Vec<E> {
    debug_assert!(
        xs.len() == ys.len(),
        "Number of X and Y coordinates must be the same"
    );

    let roots = get_zero_roots(xs);
    let mut divisor = [E::ZERO, E::ONE];
    let mut numerators: Vec<Vec<E>> = Vec::with_capacity(xs.len());
    for &xcoord in xs {
        divisor[0] = -xcoord;
        numerators.push(div(&roots, &divisor));
    }

    let mut denominators: Vec<E> = Vec::with_capacity(xs.len());
    for i in 0..xs.len() {
        denominators.push(eval(&numerators[i], xs[i]));
    }
    let denominators = E::inv_many(&denominators);

    let mut result = vec![E::ZERO; xs.len()];
    for i in 0..xs.len() {
        let y_slice = ys[i] * denominators[i];
        if ys[i] != E::ZERO {
            for (j, res) in result.iter_mut().enumerate() {
                if numerators[i][j] != E::ZERO {
                    *res += numerators[i][j] * y_slice;
                }
            }
        }
    }

    result
}

// POLYNOMIAL DIVISION
// ================================================================================================

/// Divides polynomial `a` by polynomial `b`; if the polynomials don't divide evenly,
/// the remainder is ignored.
pub fn div<E: FieldElement>(a: &[E], b: &[E]) -> Vec<E> {
    let mut apos = degree_of(a);
    let mut a = a.to_vec();

    let bpos = degree_of(b);
    assert!(apos >= bpos, "cannot divide by polynomial of higher degree");
    if bpos == 0 {
        assert!(b[0] != E::ZERO, "cannot divide polynomial by zero");
    }

    let mut result = vec![E::ZERO; apos - bpos + 1];
    for i in (0..result.len()).rev() {
        let quot = a[apos] / b[bpos];
        result[i] = quot;
        for j in (0..bpos).rev() {
            a[i + j] -= b[j] * quot;
        }
        apos = apos.wrapping_sub(1);
    }

    result
}

// DEGREE INFERENCE
// ================================================================================================

/// Returns degree of the polynomial `poly`
pub fn degree_of<E: FieldElement>(poly: &[E]) -> usize {
    for i in (0..poly.len()).rev() {
        if poly[i] != E::ZERO {
            return i;
        }
    }
    0
}

// HELPER FUNCTIONS
// ================================================================================================

/// Returns coefficients of the polynomial (x - xs[0]) * (x - xs[1]) * ... * (x - xs[n - 1]).
fn get_zero_roots<E: FieldElement>(xs: &[E]) -> Vec<E> {
    let mut n = xs.len() + 1;
    let mut result = vec![E::ZERO; n];

    n -= 1;
    result[n] = E::ONE;

    for &x in xs {
        n -= 1;
        result[n] = E::ZERO;
        for j in n..xs.len() {
            let t = result[j + 1] * x;
            result[j] -= t;
        }
    }

    result
}
