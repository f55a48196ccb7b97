use ccolamd::algebra::CscPattern;
use ccolamd::ordering::*;

fn assert_permutation(perm: &[usize], n: usize) {
    assert_eq!(perm.len(), n);
    let mut seen = vec![false; n];
    for &c in perm {
        assert!(c < n, "index {c} out of range in {perm:?}");
        assert!(!seen[c], "duplicate index {c} in {perm:?}");
        seen[c] = true;
    }
}

// arrowhead pattern: a full first row and column plus the diagonal
fn arrowhead(n: usize) -> CscPattern {
    let mut colptr = Vec::with_capacity(n + 1);
    let mut rowval = Vec::new();
    colptr.push(0);
    for c in 0..n {
        if c == 0 {
            rowval.extend(0..n);
        } else {
            rowval.push(0);
            rowval.push(c);
        }
        colptr.push(rowval.len());
    }
    CscPattern::new(n, n, colptr, rowval)
}

// bidiagonal pattern: each column holds its diagonal and subdiagonal
fn bidiagonal(n: usize) -> CscPattern {
    let mut colptr = Vec::with_capacity(n + 1);
    let mut rowval = Vec::new();
    colptr.push(0);
    for c in 0..n {
        rowval.push(c);
        if c + 1 < n {
            rowval.push(c + 1);
        }
        colptr.push(rowval.len());
    }
    CscPattern::new(n, n, colptr, rowval)
}

#[test]
fn test_identity_pattern() {
    // a 4 x 4 identity pattern orders to the identity permutation with
    // nothing suppressed
    let result = order(&CscPattern::identity(4), &OrderingSettings::default(), None).unwrap();
    assert_eq!(result.perm, vec![0, 1, 2, 3]);
    assert_eq!(result.stats.dense_rows, 0);
    assert_eq!(result.stats.dense_cols, 0);
    assert_eq!(result.stats.empty_rows, 0);
    assert_eq!(result.stats.empty_cols, 0);
    assert_eq!(result.stats.jumbled, None);
}

#[test]
fn test_arrowhead_pattern() {
    let result = order(&arrowhead(12), &OrderingSettings::default(), None).unwrap();
    assert_permutation(&result.perm, 12);
    assert_eq!(result.stats.jumbled, None);
}

#[test]
fn test_bidiagonal_pattern() {
    let result = order(&bidiagonal(16), &OrderingSettings::default(), None).unwrap();
    assert_permutation(&result.perm, 16);
}

#[test]
fn test_rectangular_patterns() {
    // tall: 6 x 3
    let tall = CscPattern::new(6, 3, vec![0, 2, 4, 6], vec![0, 3, 1, 4, 2, 5]);
    let result = order(&tall, &OrderingSettings::default(), None).unwrap();
    assert_permutation(&result.perm, 3);

    // wide: 2 x 5
    let wide = CscPattern::new(2, 5, vec![0, 1, 2, 3, 4, 6], vec![0, 1, 0, 1, 0, 1]);
    let result = order(&wide, &OrderingSettings::default(), None).unwrap();
    assert_permutation(&result.perm, 5);
}

#[test]
fn test_determinism_across_runs() {
    let settings = OrderingSettings::default();
    let first = order(&arrowhead(10), &settings, None).unwrap();
    for _ in 0..3 {
        let again = order(&arrowhead(10), &settings, None).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_empty_matrix() {
    let pattern = CscPattern::new(0, 0, vec![0], vec![]);
    let result = order(&pattern, &OrderingSettings::default(), None).unwrap();
    assert!(result.perm.is_empty());
    assert_eq!(result.stats, OrderingStats::default());
}

#[test]
fn test_no_rows() {
    let pattern = CscPattern::new(0, 5, vec![0; 6], vec![]);
    let result = order(&pattern, &OrderingSettings::default(), None).unwrap();
    // every column is empty; natural order, reported as empty
    assert_eq!(result.perm, vec![0, 1, 2, 3, 4]);
    assert_eq!(result.stats.empty_cols, 5);
}

#[test]
fn test_lu_mode() {
    let settings = OrderingSettingsBuilder::default().for_lu(true).build().unwrap();
    let result = order(&arrowhead(12), &settings, None).unwrap();
    assert_permutation(&result.perm, 12);
}

#[test]
fn test_dense_suppression_disabled() {
    // negative thresholds keep even a full column alive
    let settings = OrderingSettingsBuilder::default()
        .dense_row(-1.0)
        .dense_col(-1.0)
        .build()
        .unwrap();
    let result = order(&arrowhead(40), &settings, None).unwrap();
    assert_permutation(&result.perm, 40);
    assert_eq!(result.stats.dense_rows, 0);
    assert_eq!(result.stats.dense_cols, 0);
}

#[test]
fn test_dense_column_goes_last() {
    // column 0 of the arrowhead is full; with a tight threshold it is
    // suppressed and must follow every other column
    let settings = OrderingSettingsBuilder::default().dense_col(0.1).build().unwrap();
    let n = 24;
    let result = order(&arrowhead(n), &settings, None).unwrap();
    assert_permutation(&result.perm, n);
    assert!(result.stats.dense_cols >= 1);
    assert_eq!(result.perm[n - 1], 0);
}

#[test]
fn test_workspace_sizing() {
    // recommended is monotone and covers the low-level run
    let a = recommended(100, 50, 50).unwrap();
    let b = recommended(101, 50, 50).unwrap();
    let c = recommended(100, 51, 50).unwrap();
    let d = recommended(100, 50, 51).unwrap();
    assert!(b >= a && c >= a && d >= a);
    assert!(recommended(usize::MAX / 2, 2, 2).is_none());
}

#[test]
fn test_order_in_place_destroys_input() {
    let pattern = bidiagonal(6);
    let nnz = pattern.nnz();
    let alen = recommended(nnz, 6, 6).unwrap();
    let mut a = vec![0 as Int; alen];
    for (i, &r) in pattern.rowval.iter().enumerate() {
        a[i] = r as Int;
    }
    let mut p: Vec<Int> = pattern.colptr.iter().map(|&x| x as Int).collect();

    order_in_place(6, 6, &mut a, &mut p, &OrderingSettings::default(), None).unwrap();

    // the permutation arrives in the column pointer array
    let perm: Vec<usize> = p[..6].iter().map(|&x| x as usize).collect();
    assert_permutation(&perm, 6);
}
