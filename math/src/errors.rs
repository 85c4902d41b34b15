use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ElementDecodingError {
    #[error("expected {0} bytes for a field element, but received {1}")]
    InvalidLength(usize, usize),

    #[error("value {0} is not smaller than the field modulus")]
    ValueTooLarge(String),

    #[error("failed to parse '{0}' as a decimal integer")]
    InvalidDecimal(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BitDecompositionError {
    #[error("value does not fit into {0} bits")]
    ValueTooWide(usize),

    #[error("cannot recompose {0} bits into a field element")]
    TooManyBits(usize),
}
