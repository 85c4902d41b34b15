mod traits;
pub use traits::{FieldElement, StarkField};

pub mod f256;
pub use f256::BaseElement;
