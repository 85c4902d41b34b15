// TRACE INFO
// ================================================================================================

/// Dimensions of an execution trace.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TraceInfo {
    width: usize,
    length: usize,
}

impl TraceInfo {
    pub fn new(width: usize, length: usize) -> Self {
        TraceInfo { width, length }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }
}
