use core::{
    convert::TryFrom,
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

// FIELD ELEMENT
// ================================================================================================

pub trait FieldElement:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + PartialEq
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + Neg<Output = Self>
    + From<u128>
    + From<u64>
    + From<u32>
    + From<u16>
    + From<u8>
    + for<'a> TryFrom<&'a [u8]>
{
    /// Number of bytes needed to encode an element
    const ELEMENT_BYTES: usize;

    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Exponentiates this element by `power` parameter.
    fn exp(self, power: u64) -> Self {
        let mut r = Self::ONE;
        let mut b = self;
        let mut p = power;

        if p == 0 {
            return Self::ONE;
        } else if b == Self::ZERO {
            return Self::ZERO;
        }

        while p > 0 {
            if p & 1 == 1 {
                r *= b;
            }
            p >>= 1;
            b = b * b;
        }

        r
    }

    /// Returns this element multiplied by itself.
    fn square(self) -> Self {
        self * self
    }

    /// Generates a vector with values [1, b, b^2, b^3, b^4, ..., b^(n-1)].
    fn get_power_series(b: Self, n: usize) -> Vec<Self> {
        Self::get_power_series_with_offset(b, Self::ONE, n)
    }

    /// Generates a vector with values [s, s * b, s * b^2, s * b^3, s * b^4, ..., s * b^(n-1)].
    fn get_power_series_with_offset(b: Self, s: Self, n: usize) -> Vec<Self> {
        let mut result = Vec::with_capacity(n);
        let mut current = s;
        for _ in 0..n {
            result.push(current);
            current *= b;
        }
        result
    }

    /// Computes a multiplicative inverse of this element. If this element is ZERO, ZERO is
    /// returned.
    fn inv(self) -> Self;

    /// Computes a multiplicative inverse of a sequence of elements using batch inversion method.
    /// Any ZEROs in the provided sequence are ignored.
    fn inv_many(values: &[Self]) -> Vec<Self> {
        let mut result = Vec::with_capacity(values.len());
        let mut last = Self::ONE;
        for &value in values {
            result.push(last);
            if value != Self::ZERO {
                last *= value;
            }
        }

        last = last.inv();

        for i in (0..values.len()).rev() {
            if values[i] == Self::ZERO {
                result[i] = Self::ZERO;
            } else {
                result[i] = last * result[i];
                last *= values[i];
            }
        }
        result
    }

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    /// Returns a field element if the set of bytes forms a valid field element, otherwise returns
    /// None. This function is primarily intended for sampling random field elements from a hash
    /// function output.
    fn from_random_bytes(bytes: &[u8]) -> Option<Self>;

    // SERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Returns the canonical little-endian encoding of this element.
    fn to_bytes(&self) -> Vec<u8>;
}

// STARK FIELD
// ================================================================================================

pub trait StarkField: FieldElement {
    /// Number of bits needed to represent the field modulus.
    const MODULUS_BITS: u32;

    /// A multiplicative generator of the field.
    const GENERATOR: Self;

    /// Let Self::MODULUS = 2^TWO_ADICITY * `k` + 1 for some odd `k`.
    const TWO_ADICITY: u32;

    /// A root of unity of order exactly 2^TWO_ADICITY.
    const TWO_ADIC_ROOT_OF_UNITY: Self;

    /// Returns the root of unity of order 2^`n`.
    fn get_root_of_unity(n: u32) -> Self {
        assert!(n != 0, "cannot get root of unity for n = 0");
        assert!(
            n <= Self::TWO_ADICITY,
            "order cannot exceed 2^{}",
            Self::TWO_ADICITY
        );
        let power = 1u64 << (Self::TWO_ADICITY - n);
        Self::TWO_ADIC_ROOT_OF_UNITY.exp(power)
    }

    /// Returns the bits of the canonical representation of this element, least significant
    /// bit first; the result always contains MODULUS_BITS entries.
    fn to_bits_le(&self) -> Vec<bool> {
        let bytes = self.to_bytes();
        (0..Self::MODULUS_BITS as usize)
            .map(|i| (bytes[i / 8] >> (i % 8)) & 1 == 1)
            .collect()
    }
}
