// MATH FUNCTIONS
// ================================================================================================

/// Returns base 2 logarithm of `n`, where `n` is a power of two.
pub fn log2(n: usize) -> u32 {
    assert!(n.is_power_of_two(), "n must be a power of two");
    n.trailing_zeros()
}

#[cfg(test)]
mod tests {
    #[test]
    fn log2() {
        assert_eq!(0, super::log2(1));
        assert_eq!(3, super::log2(8));
        assert_eq!(28, super::log2(1 << 28));
    }

    #[test]
    #[should_panic]
    fn log2_not_power_of_two() {
        super::log2(6);
    }
}
