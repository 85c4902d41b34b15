//! Scalar field of the BN254 curve.
//!
//! Elements are kept in Montgomery form as four little-endian 64-bit limbs. The canonical form is
//! recovered only at the edges: serialization, bit decomposition and display.

use super::traits::{FieldElement, StarkField};
use crate::errors::ElementDecodingError;
use core::{
    convert::TryFrom,
    fmt::{Debug, Display, Formatter},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};


// CONSTANTS
// ================================================================================================

/// Field modulus
/// p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
const M: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// p - 2, the exponent used for inversion
const M_MINUS_TWO: [u64; 4] = [
    0x43e1f593efffffff,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// R = 2^256 mod p
const R: [u64; 4] = [
    0xac96341c4ffffffb,
    0x36fc76959f60cd29,
    0x666ea36f7879462e,
    0x0e0a77c19a07df2f,
];

/// R^2 = 2^512 mod p
const R2: [u64; 4] = [
    0x1bb8e645ae216da7,
    0x53fe3ab1e35c59e3,
    0x8c49833d53bb8085,
    0x0216d0b17f4e44a5,
];

/// -p^{-1} mod 2^64
const U: u64 = 0xc2e1f593efffffff;

/// 7 in Montgomery form
const G: [u64; 4] = [
    0x3057819e4fffffdb,
    0x307f6d866832bb01,
    0x5c65ec9f484e3a89,
    0x0180a96573d3d9f8,
];

/// 7^((p - 1) / 2^28) in Montgomery form
const ROOT: [u64; 4] = [
    0x9632c7c5b639feb8,
    0x985ce3400d0ff299,
    0xb2dd880001b0ecd8,
    0x1d69070d6d98ce29,
];

/// Number of bytes needed to represent field element
const ELEMENT_BYTES: usize = 32;

// FIELD ELEMENT
// ================================================================================================

/// Represents a BN254 scalar field element.
///
/// Internal values are stored in Montgomery form; since every stored value is fully reduced,
/// comparing the internal representations is the same as comparing the canonical values.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct BaseElement([u64; 4]);

impl BaseElement {
    /// Creates a new field element from the canonical little-endian limbs of `value`; values
    /// greater than or equal to the modulus are reduced.
    pub fn new(value: [u64; 4]) -> Self {
        let mut value = value;
        while !lt(&value, &M) {
            value = sbb_limbs(&value, &M).0;
        }
        BaseElement(mont_mul(&value, &R2))
    }

    /// Returns the canonical little-endian limbs of this element.
    pub fn as_canonical(&self) -> [u64; 4] {
        mont_mul(&self.0, &[1, 0, 0, 0])
    }

    /// Returns the canonical value of this element as a big unsigned integer.
    pub fn to_big_uint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_bytes())
    }

    /// Converts a big unsigned integer into a field element; the integer must be smaller than
    /// the field modulus.
    pub fn from_big_uint(value: &BigUint) -> Result<Self, ElementDecodingError> {
        let bytes = value.to_bytes_le();
        if bytes.len() > ELEMENT_BYTES {
            return Err(ElementDecodingError::ValueTooLarge(value.to_string()));
        }
        let mut buf = [0u8; ELEMENT_BYTES];
        buf[..bytes.len()].copy_from_slice(&bytes);
        BaseElement::try_from(&buf[..])
    }

    /// Returns the field modulus as a big unsigned integer.
    pub fn modulus() -> BigUint {
        BigUint::from_bytes_le(&limbs_to_bytes(&M))
    }

    fn pow_limbs(self, power: &[u64; 4]) -> Self {
        let mut result = Self::ONE;
        for limb in power.iter().rev() {
            for i in (0..64).rev() {
                result = result.square();
                if (limb >> i) & 1 == 1 {
                    result *= self;
                }
            }
        }
        result
    }
}

impl FieldElement for BaseElement {
    const ELEMENT_BYTES: usize = ELEMENT_BYTES;
    const ZERO: Self = BaseElement([0, 0, 0, 0]);
    const ONE: Self = BaseElement(R);

    fn inv(self) -> Self {
        if self == Self::ZERO {
            return Self::ZERO;
        }
        self.pow_limbs(&M_MINUS_TWO)
    }

    fn from_random_bytes(bytes: &[u8]) -> Option<Self> {
        Self::try_from(bytes).ok()
    }

    fn to_bytes(&self) -> Vec<u8> {
        limbs_to_bytes(&self.as_canonical()).to_vec()
    }
}

impl StarkField for BaseElement {
    /// sage: MODULUS = 0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001
    /// sage: GF(MODULUS).is_prime_field()
    /// True
    /// sage: MODULUS.nbits()
    /// 254
    const MODULUS_BITS: u32 = 254;

    /// sage: GF(MODULUS).primitive_element()
    /// 7
    const GENERATOR: Self = BaseElement(G);

    /// sage: is_odd((MODULUS - 1) / 2^28)
    /// True
    const TWO_ADICITY: u32 = 28;

    /// sage: k = (MODULUS - 1) / 2^28
    /// sage: GF(MODULUS).primitive_element()^k
    /// 1748695177688661943023146337482803886740723238769601073607632802312037301404
    const TWO_ADIC_ROOT_OF_UNITY: Self = BaseElement(ROOT);
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "{}", self.to_big_uint())
    }
}

impl Debug for BaseElement {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for BaseElement {
    type Output = BaseElement;

    fn add(self, rhs: BaseElement) -> BaseElement {
        BaseElement(add(&self.0, &rhs.0))
    }
}

impl AddAssign for BaseElement {
    fn add_assign(&mut self, rhs: BaseElement) {
        *self = *self + rhs
    }
}

impl Sub for BaseElement {
    type Output = BaseElement;

    fn sub(self, rhs: BaseElement) -> BaseElement {
        BaseElement(sub(&self.0, &rhs.0))
    }
}

impl SubAssign for BaseElement {
    fn sub_assign(&mut self, rhs: BaseElement) {
        *self = *self - rhs;
    }
}

impl Mul for BaseElement {
    type Output = BaseElement;

    fn mul(self, rhs: BaseElement) -> BaseElement {
        BaseElement(mont_mul(&self.0, &rhs.0))
    }
}

impl MulAssign for BaseElement {
    fn mul_assign(&mut self, rhs: BaseElement) {
        *self = *self * rhs
    }
}

impl Div for BaseElement {
    type Output = BaseElement;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: BaseElement) -> BaseElement {
        self * rhs.inv()
    }
}

impl DivAssign for BaseElement {
    fn div_assign(&mut self, rhs: BaseElement) {
        *self = *self / rhs
    }
}

impl Neg for BaseElement {
    type Output = BaseElement;

    fn neg(self) -> BaseElement {
        BaseElement(sub(&[0, 0, 0, 0], &self.0))
    }
}

impl Sum for BaseElement {
    fn sum<I: Iterator<Item = BaseElement>>(iter: I) -> BaseElement {
        iter.fold(Self::ZERO, |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a Self> for BaseElement {
    fn sum<I: Iterator<Item = &'a BaseElement>>(iter: I) -> BaseElement {
        iter.fold(Self::ZERO, |acc, &value| acc + value)
    }
}

impl Product for BaseElement {
    fn product<I: Iterator<Item = BaseElement>>(iter: I) -> BaseElement {
        iter.fold(Self::ONE, |acc, value| acc * value)
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u128> for BaseElement {
    fn from(value: u128) -> Self {
        BaseElement::new([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl From<u64> for BaseElement {
    fn from(value: u64) -> Self {
        BaseElement::new([value, 0, 0, 0])
    }
}

impl From<u32> for BaseElement {
    fn from(value: u32) -> Self {
        BaseElement::from(value as u64)
    }
}

impl From<u16> for BaseElement {
    fn from(value: u16) -> Self {
        BaseElement::from(value as u64)
    }
}

impl From<u8> for BaseElement {
    fn from(value: u8) -> Self {
        BaseElement::from(value as u64)
    }
}

impl<'a> TryFrom<&'a [u8]> for BaseElement {
    type Error = ElementDecodingError;

    /// Converts a 32-byte little-endian encoding into a field element.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != ELEMENT_BYTES {
            return Err(ElementDecodingError::InvalidLength(
                ELEMENT_BYTES,
                bytes.len(),
            ));
        }
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(buf);
        }
        if !lt(&limbs, &M) {
            return Err(ElementDecodingError::ValueTooLarge(
                BigUint::from_bytes_le(bytes).to_string(),
            ));
        }
        Ok(BaseElement::new(limbs))
    }
}

impl FromStr for BaseElement {
    type Err = ElementDecodingError;

    /// Parses a decimal string into a field element.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<BigUint>()
            .map_err(|_| ElementDecodingError::InvalidDecimal(s.to_string()))?;
        BaseElement::from_big_uint(&value)
    }
}

// SERIALIZATION
// ================================================================================================

/// Elements are serialized as decimal strings, the format circuit witness files use.
impl Serialize for BaseElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BaseElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

// FINITE FIELD ARITHMETIC
// ================================================================================================

#[inline(always)]
fn add(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (result, carry) = adc_limbs(a, b);
    if carry != 0 || !lt(&result, &M) {
        sbb_limbs(&result, &M).0
    } else {
        result
    }
}

#[inline(always)]
fn sub(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (result, borrow) = sbb_limbs(a, b);
    if borrow != 0 {
        adc_limbs(&result, &M).0
    } else {
        result
    }
}

/// Montgomery multiplication (coarsely integrated operand scanning); returns a * b / R mod p.
#[inline(always)]
fn mont_mul(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let mut t = [0u64; 6];
    for &bi in b.iter() {
        let mut carry = 0;
        for j in 0..4 {
            let (lo, hi) = mac(t[j], a[j], bi, carry);
            t[j] = lo;
            carry = hi;
        }
        let (lo, hi) = adc(t[4], carry, 0);
        t[4] = lo;
        t[5] = hi;

        let m = t[0].wrapping_mul(U);
        let (_, mut carry) = mac(t[0], m, M[0], 0);
        for j in 1..4 {
            let (lo, hi) = mac(t[j], m, M[j], carry);
            t[j - 1] = lo;
            carry = hi;
        }
        let (lo, hi) = adc(t[4], carry, 0);
        t[3] = lo;
        t[4] = t[5] + hi;
    }

    let result = [t[0], t[1], t[2], t[3]];
    if t[4] != 0 || !lt(&result, &M) {
        sbb_limbs(&result, &M).0
    } else {
        result
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Computes a + b * c + carry, returning the low and high 64 bits of the result.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let r = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (r as u64, (r >> 64) as u64)
}

/// Computes a + b + carry, returning the low and high 64 bits of the result.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let r = (a as u128) + (b as u128) + (carry as u128);
    (r as u64, (r >> 64) as u64)
}

#[inline(always)]
fn adc_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut result = [0u64; 4];
    let mut carry = 0;
    for i in 0..4 {
        let (lo, hi) = adc(a[i], b[i], carry);
        result[i] = lo;
        carry = hi;
    }
    (result, carry)
}

#[inline(always)]
fn sbb_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut result = [0u64; 4];
    let mut borrow = 0;
    for i in 0..4 {
        let (diff, b1) = a[i].overflowing_sub(b[i]);
        let (diff, b2) = diff.overflowing_sub(borrow);
        result[i] = diff;
        borrow = (b1 | b2) as u64;
    }
    (result, borrow)
}

/// Returns true if a < b, comparing limbs from the most significant one.
#[inline(always)]
fn lt(a: &[u64; 4], b: &[u64; 4]) -> bool {
    for i in (0..4).rev() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
    }
    false
}

fn limbs_to_bytes(limbs: &[u64; 4]) -> [u8; ELEMENT_BYTES] {
    let mut result = [0u8; ELEMENT_BYTES];
    for (chunk, limb) in result.chunks_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    result
}
