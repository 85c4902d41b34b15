//! Bit decomposition of field elements.
//!
//! These mirror the two gadgets an arithmetic circuit uses to move between field elements and
//! integers: decomposing a value into a fixed number of bits (which fails when the value does not
//! fit) and recomposing bits into a value.

use crate::{errors::BitDecompositionError, field::StarkField};


// DECOMPOSITION
// ================================================================================================

/// Decomposes `value` into exactly `num_bits` bits, least significant bit first.
///
/// Returns an error if the canonical value of `value` is not smaller than 2^`num_bits`.
pub fn to_bits<E: StarkField>(
    value: E,
    num_bits: usize,
) -> Result<Vec<bool>, BitDecompositionError> {
    let mut bits = value.to_bits_le();
    if bits.iter().skip(num_bits).any(|&bit| bit) {
        return Err(BitDecompositionError::ValueTooWide(num_bits));
    }
    bits.resize(num_bits, false);
    Ok(bits)
}

/// Recomposes bits (least significant bit first) into a field element.
pub fn from_bits<E: StarkField>(bits: &[bool]) -> Result<E, BitDecompositionError> {
    if bits.len() >= E::MODULUS_BITS as usize {
        return Err(BitDecompositionError::TooManyBits(bits.len()));
    }
    let two = E::from(2u8);
    Ok(bits
        .iter()
        .rev()
        .fold(E::ZERO, |acc, &bit| if bit { acc * two + E::ONE } else { acc * two }))
}

// INTEGER VIEWS
// ================================================================================================

/// Decomposes `value` over the full field width and returns the integer formed by its lowest
/// `num_bits` bits.
///
/// # Errors
/// Returns an error if `num_bits` bits do not fit into a `usize`.
pub fn low_bits<E: StarkField>(value: E, num_bits: u32) -> Result<usize, BitDecompositionError> {
    let num_bits = num_bits as usize;
    if num_bits >= usize::BITS as usize {
        return Err(BitDecompositionError::TooManyBits(num_bits));
    }
    let bits = to_bits(value, E::MODULUS_BITS as usize)?;
    Ok(bits
        .iter()
        .take(num_bits)
        .rev()
        .fold(0, |acc, &bit| (acc << 1) | bit as usize))
}

/// Returns true if the lowest `num_bits` bits of `value` are all zero.
///
/// The low bits are split off the full decomposition and recomposed; the check passes when they
/// recompose into zero.
pub fn has_zero_low_bits<E: StarkField>(value: E, num_bits: u32) -> bool {
    to_bits(value, E::MODULUS_BITS as usize)
        .and_then(|bits| from_bits::<E>(&bits[..bits.len().min(num_bits as usize)]))
        .map_or(false, |low| low == E::ZERO)
}
