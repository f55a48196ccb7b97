use thiserror::Error;

/// Error type returned by sparse pattern format checks.
#[derive(Error, Debug)]
pub enum SparseFormatError {
    /// Pattern dimension fields and/or array lengths are incompatible
    #[error("Pattern dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    /// Row value exceeds the pattern row dimension
    #[error("Row value exceeds the pattern row dimension")]
    BadRowval,
    /// Bad column pointer values
    #[error("Bad column pointer values")]
    BadColptr,
}
