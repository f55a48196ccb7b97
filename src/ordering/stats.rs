use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Location of the first defective entry found in a jumbled input matrix.
///
/// A matrix is *jumbled* when some column contains duplicate, out-of-range
/// or out-of-order row indices.  Jumbled input is canonicalized, not
/// rejected: ordering proceeds on the cleaned structure and this record is
/// attached to the run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JumbledInfo {
    /// column in which the first defective entry was found (0-based)
    pub col: usize,
    /// row value of the first defective entry.  Signed, since the
    /// low-level interface can be handed arbitrary workspace contents.
    pub row: isize,
    /// total number of duplicate and out-of-range entries dropped
    pub dropped: usize,
}

/// Summary statistics for one ordering run.
///
/// Implements [`Display`](fmt::Display) as the diagnostics reporter; the
/// rendered text uses 1-based row/column locations while the structured
/// fields stay 0-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderingStats {
    /// number of dense rows removed before ordering
    pub dense_rows: usize,
    /// number of dense columns removed and placed at the end of their
    /// constraint set
    pub dense_cols: usize,
    /// number of empty rows removed, including rows emptied by dense
    /// column removal
    pub empty_rows: usize,
    /// number of empty columns removed, including columns emptied by
    /// dense row removal
    pub empty_cols: usize,
    /// number of workspace compactions performed during elimination
    pub defrag_count: usize,
    /// present when the input matrix was jumbled
    pub jumbled: Option<JumbledInfo>,
}

impl fmt::Display for OrderingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ccolamd v{}: ordering statistics", crate::VERSION)?;
        match self.jumbled {
            None => writeln!(f, "  input matrix was clean")?,
            Some(info) => writeln!(
                f,
                "  input matrix was jumbled: first duplicate or out-of-range \
                 row index {} in column {} ({} entries dropped)",
                info.row + 1,
                info.col + 1,
                info.dropped,
            )?,
        }
        writeln!(f, "  dense rows removed            {}", self.dense_rows)?;
        writeln!(f, "  dense columns removed         {}", self.dense_cols)?;
        writeln!(f, "  empty rows removed            {}", self.empty_rows)?;
        writeln!(f, "  empty columns removed         {}", self.empty_cols)?;
        writeln!(f, "  workspace compactions         {}", self.defrag_count)
    }
}

/// A completed ordering: the permutation plus its run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ordering {
    /// fill-reducing column permutation; `perm[k]` is the original index
    /// of the column placed at position `k`
    pub perm: Vec<usize>,
    /// run statistics, including any jumbled-matrix diagnostic
    pub stats: OrderingStats,
}

/// Fatal conditions.  Everything here leaves the caller's column pointer
/// array free of any partial result; jumbled matrices are deliberately
/// absent (they are recovered from, see [`JumbledInfo`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// problem dimensions overflow the workspace index type
    #[error("problem dimensions are too large to size a workspace")]
    ProblemTooLarge,
    /// the supplied workspace is smaller than the required minimum
    #[error("workspace of length {have} is too small (need at least {need})")]
    WorkspaceTooSmall { have: usize, need: usize },
    /// column pointers are negative or decreasing at the given column
    #[error("column pointer array is malformed at column {col}")]
    InvalidColumnPointers { col: usize },
    /// column pointer array has the wrong length
    #[error("column pointer array has length {len}, expected {expected}")]
    ColumnPointerLength { len: usize, expected: usize },
    /// constraint vector length does not match the column count
    #[error("constraint vector has length {len} but the matrix has {n_col} columns")]
    ConstraintLengthMismatch { len: usize, n_col: usize },
    /// a constraint set id lies outside `0..n_col`
    #[error("constraint set id {id} is outside the valid range 0..{n_col}")]
    ConstraintOutOfRange { id: isize, n_col: usize },
    /// symmetric ordering requires a square pattern
    #[error("symmetric ordering requires a square pattern, got {m} x {n}")]
    NotSquare { m: usize, n: usize },
}
