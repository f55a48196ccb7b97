use crate::algebra::SparseFormatError;

/// Sparsity pattern of a matrix in Compressed Sparse Column (CSC) format.
///
/// Only the structure is stored; the ordering engine never looks at
/// numerical values.
///
/// __Example usage__ : To construct the pattern of the 3 x 3 matrix
/// ```text
/// A = [x  x  x]
///     [x  .  x]
///     [.  x  x]
/// ```
///
/// ```
/// use ccolamd::algebra::CscPattern;
///
/// let pattern = CscPattern::new(
///    3,                          // m
///    3,                          // n
///    vec![0, 2, 4, 7],           // colptr
///    vec![0, 1, 0, 2, 0, 1, 2],  // rowval
/// );
///
/// // optional correctness check
/// assert!(pattern.check_format().is_ok());
/// ```
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CscPattern {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// This field should have length `n+1`.  The last entry corresponds
    /// to the number of nonzeros and should agree with the length of the
    /// `rowval` field.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
}

impl CscPattern {
    /// `CscPattern` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.  This constructor does __not__ ensure that row indices
    /// are all in bounds or that entries within each column appear in
    /// order of increasing row index; the ordering engine tolerates (and
    /// canonicalizes) such inputs, see
    /// [`OrderingStats::jumbled`](crate::ordering::OrderingStats).
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>) -> Self {
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscPattern { m, n, colptr, rowval }
    }

    /// Pattern of the identity matrix of size `n`.
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        CscPattern::new(n, n, colptr, rowval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// true if the pattern is square
    pub fn is_square(&self) -> bool {
        self.m == self.n
    }

    /// Check that the pattern is cleanly formatted: monotone column
    /// pointers, row indices in bounds and strictly increasing within
    /// each column.
    ///
    /// A pattern failing the row ordering or bounds checks is still
    /// accepted by the ordering engine, which canonicalizes it and
    /// reports the offending location in its statistics.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowOrdering);
            }
        }
        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }
}
