use itertools::izip;

use super::{order, Ordering, OrderingError, OrderingSettings};
use crate::algebra::CscPattern;

/// Order a symmetric matrix given the strictly upper triangle of its
/// pattern.
///
/// The permutation is computed by building an auxiliary pattern `M` with
/// one row per strictly upper off-diagonal entry `(i, j)` — that row has
/// entries in columns `i` and `j` — and running the column engine on `M`
/// with the caller's constraint vector.  Ordering the columns of `M` for
/// a Cholesky factorization of `MᵀM` orders the rows and columns of the
/// symmetric matrix itself.
///
/// Entries on or below the diagonal are ignored, so either a symmetric
/// pattern or just its upper triangle may be supplied.  Statistics pass
/// through from the inner run and refer to `M`.
pub fn order_symmetric(
    pattern: &CscPattern,
    settings: &OrderingSettings,
    cmember: Option<&[usize]>,
) -> Result<Ordering, OrderingError> {
    if !pattern.is_square() {
        return Err(OrderingError::NotSquare { m: pattern.m, n: pattern.n });
    }
    let n = pattern.n;
    if pattern.colptr.len() != n + 1 {
        return Err(OrderingError::ColumnPointerLength {
            len: pattern.colptr.len(),
            expected: n + 1,
        });
    }
    if pattern.colptr[n] != pattern.rowval.len() {
        return Err(OrderingError::InvalidColumnPointers { col: n });
    }
    for c in 0..n {
        if pattern.colptr[c + 1] < pattern.colptr[c] {
            return Err(OrderingError::InvalidColumnPointers { col: c });
        }
    }

    // count the entries each column of the auxiliary pattern will have
    let mut colptr = vec![0usize; n + 1];
    let mut n_pairs = 0usize;
    for (j, &lo, &hi) in izip!(0..n, &pattern.colptr[..n], &pattern.colptr[1..]) {
        for &i in &pattern.rowval[lo..hi] {
            if i < j {
                colptr[i + 1] += 1;
                colptr[j + 1] += 1;
                n_pairs += 1;
            }
        }
    }
    for c in 0..n {
        colptr[c + 1] += colptr[c];
    }

    // fill: pair rows are numbered in column-scan order, so every column
    // of the auxiliary pattern comes out sorted
    let mut cursor = colptr.clone();
    let mut rowval = vec![0usize; 2 * n_pairs];
    let mut pair = 0usize;
    for (j, &lo, &hi) in izip!(0..n, &pattern.colptr[..n], &pattern.colptr[1..]) {
        for &i in &pattern.rowval[lo..hi] {
            if i < j {
                rowval[cursor[i]] = pair;
                cursor[i] += 1;
                rowval[cursor[j]] = pair;
                cursor[j] += 1;
                pair += 1;
            }
        }
    }

    let aux = CscPattern::new(n_pairs, n, colptr, rowval);
    order(&aux, settings, cmember)
}
