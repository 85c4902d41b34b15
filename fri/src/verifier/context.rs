use crate::FriOptions;
use math::{log2, BaseElement, StarkField};

pub struct VerifierContext {
    max_degree: usize,
    domain_size: usize,
    domain_offset: BaseElement,
    domain_root: BaseElement,
    options: FriOptions,
}

impl VerifierContext {
    /// Builds a context for checking evaluations over the coset `domain_offset * <root>`, where
    /// `root` generates the subgroup of size `domain_size`. The evaluations must come from a
    /// polynomial of degree smaller than `domain_size / blowup_factor`.
    pub fn new(domain_size: usize, domain_offset: BaseElement, options: FriOptions) -> Self {
        let domain_root = BaseElement::get_root_of_unity(log2(domain_size));
        VerifierContext {
            max_degree: domain_size / options.blowup_factor() - 1,
            domain_size,
            domain_offset,
            domain_root,
            options,
        }
    }

    pub fn domain_size(&self) -> usize {
        self.domain_size
    }

    pub fn domain_offset(&self) -> BaseElement {
        self.domain_offset
    }

    pub fn domain_root(&self) -> BaseElement {
        self.domain_root
    }

    pub fn folding_factor(&self) -> usize {
        self.options.folding_factor()
    }

    pub fn num_fri_layers(&self) -> usize {
        self.options.num_layers()
    }

    pub fn remainder_size(&self) -> usize {
        self.options.remainder_size(self.domain_size)
    }

    /// Returns the number of coefficients a polynomial interpolating the remainder may have.
    pub fn remainder_max_degree_plus_1(&self) -> usize {
        (self.max_degree + 1) / self.folding_factor().pow(self.num_fri_layers() as u32)
    }

    /// Returns the depth of the Merkle tree committing to the specified layer.
    pub fn layer_depth(&self, layer: usize) -> usize {
        let num_rows = self.domain_size / self.folding_factor().pow(layer as u32 + 1);
        log2(num_rows) as usize
    }
}
