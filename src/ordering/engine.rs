//! The constrained approximate minimum degree elimination engine.
//!
//! The engine works on the column intersection graph of the input matrix.
//! Columns hold lists of the rows (and, later, pivot elements) they touch;
//! rows hold lists of the columns touching them.  Eliminating a pivot
//! column merges all of its rows into a single new element, and the
//! approximate degree of every column sharing a row with the pivot is
//! refreshed from cheap set-difference bounds rather than recomputed
//! exactly.
//!
//! Constraint sets partition the columns.  Sets are activated one at a
//! time in increasing id order; the degree lists only ever contain columns
//! of the active set, which pins each set's columns to a contiguous block
//! of the output permutation.

use super::settings::OrderingSettings;
use super::stats::{JumbledInfo, OrderingError, OrderingStats};
use super::workspace::{Int, Workspace, EMPTY};

/// Run all phases over a carved workspace.  The caller has validated the
/// column pointers, the constraint vector and the workspace length.
pub(crate) fn run(
    n_row: usize,
    n_col: usize,
    ws: &mut Workspace,
    p: &mut [Int],
    settings: &OrderingSettings,
    cmember: Option<&[Int]>,
    stats: &mut OrderingStats,
) -> Result<(), OrderingError> {
    let pfree = init_rows_cols(n_row, n_col, ws, p, cmember, stats);
    let (n_sets, max_deg) = init_scoring(n_row, n_col, ws, settings, stats);
    find_ordering(n_row, n_col, ws, settings, stats, pfree, max_deg, n_sets)?;
    order_children(n_col, ws, p);
    Ok(())
}

/// Build the column and row forms of the matrix inside the arena.
///
/// Detects jumbled input (duplicate, out-of-range or out-of-order row
/// indices).  A jumbled matrix is canonicalized: defective entries are
/// dropped, each column is sorted by rebuilding it from the row form, and
/// the first offending location is recorded in the statistics.  Returns
/// the arena free pointer.
fn init_rows_cols(
    n_row: usize,
    n_col: usize,
    ws: &mut Workspace,
    p: &[Int],
    cmember: Option<&[Int]>,
    stats: &mut OrderingStats,
) -> usize {
    let nnz = p[n_col] as usize;

    for c in 0..n_col {
        ws.col.start[c] = p[c];
        ws.col.length[c] = p[c + 1] - p[c];
        ws.col.thickness[c] = 1;
        ws.col.score[c] = 0;
        ws.col.prev[c] = EMPTY;
        ws.col.next[c] = EMPTY;
        ws.col.set[c] = match cmember {
            Some(cm) => cm[c],
            None => 0,
        };
    }

    // the mark field holds the last column seen per row while scanning
    // for duplicates
    for r in 0..n_row {
        ws.row.start[r] = 0;
        ws.row.length[r] = 0;
        ws.row.degree[r] = 0;
        ws.row.mark[r] = EMPTY;
    }

    let mut jumbled = false;
    let mut first: Option<(usize, Int)> = None;
    let mut dropped = 0usize;

    for c in 0..n_col {
        let mut last_row = EMPTY;
        for idx in p[c] as usize..p[c + 1] as usize {
            let r = ws.arena[idx];
            if r < 0 || r >= n_row as Int {
                jumbled = true;
                dropped += 1;
                first.get_or_insert((c, r));
                continue;
            }
            if r <= last_row {
                // out of order, possibly a duplicate
                jumbled = true;
                first.get_or_insert((c, r));
            }
            last_row = last_row.max(r);
            let ru = r as usize;
            if ws.row.mark[ru] == c as Int {
                dropped += 1;
            } else {
                ws.row.mark[ru] = c as Int;
                ws.row.length[ru] += 1;
            }
        }
    }

    // row list offsets; the degree field is the fill cursor
    let mut ofs = nnz as Int;
    for r in 0..n_row {
        ws.row.start[r] = ofs;
        ws.row.degree[r] = ofs;
        ofs += ws.row.length[r];
    }
    let pfree = ofs as usize;

    if !jumbled {
        for c in 0..n_col {
            for idx in p[c] as usize..p[c + 1] as usize {
                let ru = ws.arena[idx] as usize;
                let dst = ws.row.degree[ru] as usize;
                ws.arena[dst] = c as Int;
                ws.row.degree[ru] += 1;
            }
        }
    } else {
        // rebuild the row form, dropping the defective entries
        for r in 0..n_row {
            ws.row.mark[r] = EMPTY;
        }
        for c in 0..n_col {
            for idx in p[c] as usize..p[c + 1] as usize {
                let r = ws.arena[idx];
                if r < 0 || r >= n_row as Int {
                    continue;
                }
                let ru = r as usize;
                if ws.row.mark[ru] == c as Int {
                    continue;
                }
                ws.row.mark[ru] = c as Int;
                let dst = ws.row.degree[ru] as usize;
                ws.arena[dst] = c as Int;
                ws.row.degree[ru] += 1;
            }
        }

        // and the column form back from the row form, which both sorts
        // each column and drops its defective entries
        for c in 0..n_col {
            ws.col.length[c] = 0;
        }
        for r in 0..n_row {
            for idx in ws.row.start[r] as usize..ws.row.degree[r] as usize {
                let cu = ws.arena[idx] as usize;
                ws.col.length[cu] += 1;
            }
        }
        let mut acc: Int = 0;
        for c in 0..n_col {
            ws.col.start[c] = acc;
            ws.col.prev[c] = acc; // fill cursor
            acc += ws.col.length[c];
        }
        for r in 0..n_row {
            for idx in ws.row.start[r] as usize..ws.row.degree[r] as usize {
                let cu = ws.arena[idx] as usize;
                let dst = ws.col.prev[cu] as usize;
                ws.arena[dst] = r as Int;
                ws.col.prev[cu] += 1;
            }
        }
        for c in 0..n_col {
            ws.col.prev[c] = EMPTY;
        }
        // scrub the stale tail of the column region so a later
        // compaction sweep cannot misread it
        for slot in acc as usize..nnz {
            ws.arena[slot] = 0;
        }

        let (col, row) = first.unwrap();
        stats.jumbled = Some(JumbledInfo { col, row, dropped });
    }

    // true row degrees; marks reset ahead of elimination
    for r in 0..n_row {
        ws.row.degree[r] = ws.row.length[r];
        ws.row.mark[r] = 0;
    }

    pfree
}

/// Group the columns by constraint set, suppress dense and empty rows and
/// columns, and compute the initial approximate column scores.
///
/// Suppressed columns are assigned output positions from the tail of
/// their own constraint set, so they always follow every eliminated
/// column of that set.  Returns the number of constraint sets and the
/// largest surviving row degree.
fn init_scoring(
    n_row: usize,
    n_col: usize,
    ws: &mut Workspace,
    settings: &OrderingSettings,
    stats: &mut OrderingStats,
) -> (usize, Int) {
    // stable counting sort of the columns by set id
    let mut n_sets = 1usize;
    for c in 0..n_col {
        n_sets = n_sets.max(ws.col.set[c] as usize + 1);
    }
    for s in 0..=n_sets {
        ws.cset_start[s] = 0;
    }
    for c in 0..n_col {
        ws.cset_start[ws.col.set[c] as usize + 1] += 1;
    }
    for s in 0..n_sets {
        ws.cset_start[s + 1] += ws.cset_start[s];
    }
    for s in 0..n_sets {
        ws.set_tail[s] = ws.cset_start[s];
    }
    for c in 0..n_col {
        let s = ws.col.set[c] as usize;
        ws.csorted[ws.set_tail[s] as usize] = c as Int;
        ws.set_tail[s] += 1;
    }
    // the fill cursors have landed on each set's end position, which is
    // exactly the initial tail for suppressed-column placement

    let dense_row_count: Int = if settings.dense_row < 0.0 {
        Int::MAX - n_col as Int
    } else {
        f64::max(16.0, settings.dense_row * (n_col as f64).sqrt()) as Int
    };
    let col_basis = if settings.for_lu { n_col } else { n_row.min(n_col) };
    let dense_col_count: Int = if settings.dense_col < 0.0 {
        Int::MAX - n_col as Int
    } else {
        f64::max(16.0, settings.dense_col * (col_basis as f64).sqrt()) as Int
    };

    // empty columns go to the tail of their set, in natural order
    for c in (0..n_col).rev() {
        if ws.col.length[c] == 0 {
            let s = ws.col.set[c] as usize;
            ws.set_tail[s] -= 1;
            ws.col.score[c] = ws.set_tail[s];
            ws.kill_principal_col(c);
            stats.empty_cols += 1;
        }
    }

    // dense columns likewise; their rows shed a degree each
    for c in (0..n_col).rev() {
        if !ws.col_is_alive(c) {
            continue;
        }
        if ws.col.length[c] > dense_col_count {
            let s = ws.col.set[c] as usize;
            ws.set_tail[s] -= 1;
            ws.col.score[c] = ws.set_tail[s];
            let start = ws.col.start[c] as usize;
            for idx in start..start + ws.col.length[c] as usize {
                let ru = ws.arena[idx] as usize;
                ws.row.degree[ru] -= 1;
            }
            ws.kill_principal_col(c);
            stats.dense_cols += 1;
        }
    }

    // dense rows, and rows left empty by the column removals
    let mut max_deg: Int = 0;
    for r in 0..n_row {
        let deg = ws.row.degree[r];
        debug_assert!((0..=n_col as Int).contains(&deg));
        if deg > dense_row_count {
            ws.kill_row(r);
            stats.dense_rows += 1;
        } else if deg == 0 {
            ws.kill_row(r);
            stats.empty_rows += 1;
        } else {
            max_deg = max_deg.max(deg);
        }
    }

    // initial scores: the sum of external degrees of each column's rows.
    // Columns emptied by the row removals join their set's tail.
    for c in (0..n_col).rev() {
        if !ws.col_is_alive(c) {
            continue;
        }
        let start = ws.col.start[c] as usize;
        let len = ws.col.length[c] as usize;
        let mut score: Int = 0;
        let mut new_len = 0usize;
        for idx in start..start + len {
            let r = ws.arena[idx];
            let ru = r as usize;
            if !ws.row_is_alive(ru) {
                continue;
            }
            ws.arena[start + new_len] = r;
            new_len += 1;
            score += ws.row.degree[ru] - 1;
            score = score.min(n_col as Int);
        }
        if new_len == 0 {
            let s = ws.col.set[c] as usize;
            ws.set_tail[s] -= 1;
            ws.col.score[c] = ws.set_tail[s];
            ws.kill_principal_col(c);
            stats.empty_cols += 1;
        } else {
            debug_assert!((0..=n_col as Int).contains(&score));
            ws.col.length[c] = new_len as Int;
            ws.col.score[c] = score;
        }
    }

    (n_sets, max_deg)
}

/// The elimination loop.
#[allow(clippy::too_many_arguments)]
fn find_ordering(
    n_row: usize,
    n_col: usize,
    ws: &mut Workspace,
    settings: &OrderingSettings,
    stats: &mut OrderingStats,
    mut pfree: usize,
    mut max_deg: Int,
    n_sets: usize,
) -> Result<(), OrderingError> {
    let arena_len = ws.arena.len();
    let max_mark = Int::MAX - n_col as Int;
    let mut tag_mark = clear_mark(n_row, ws);
    let aggressive = settings.aggressive;

    for i in 0..=n_col {
        ws.head[i] = EMPTY;
        ws.hash_head[i] = EMPTY;
    }

    for s in 0..n_sets {
        // activate the set: its live columns enter the degree lists in
        // reverse index order, so the lowest original index is popped
        // first among equal scores
        let mut min_score = n_col;
        for idx in (ws.cset_start[s] as usize..ws.cset_start[s + 1] as usize).rev() {
            let c = ws.csorted[idx] as usize;
            if !ws.col_is_alive(c) {
                continue;
            }
            let score = ws.col.score[c] as usize;
            debug_assert!(score <= n_col);
            let next = ws.head[score];
            ws.col.next[c] = next;
            ws.col.prev[c] = EMPTY;
            if next != EMPTY {
                ws.col.prev[next as usize] = c as Int;
            }
            ws.head[score] = c as Int;
            min_score = min_score.min(score);
        }

        let mut k = ws.cset_start[s] as usize;
        let k_end = ws.set_tail[s] as usize;

        while k < k_end {
            // pivot: minimum score within the active set
            debug_assert!(min_score <= n_col);
            while ws.head[min_score] == EMPTY {
                min_score += 1;
                debug_assert!(min_score <= n_col);
            }
            let pivot_col = ws.head[min_score] as usize;
            let next = ws.col.next[pivot_col];
            ws.head[min_score] = next;
            if next != EMPTY {
                ws.col.prev[next as usize] = EMPTY;
            }

            let pivot_col_score = ws.col.score[pivot_col];
            let pivot_col_thickness = ws.col.thickness[pivot_col];
            let pivot_col_start = ws.col.start[pivot_col] as usize;
            let pivot_col_length = ws.col.length[pivot_col] as usize;

            ws.col.score[pivot_col] = k as Int;
            k += pivot_col_thickness as usize;

            // make room for the pivot element; the score bounds the
            // number of columns it can contain
            let needed = pivot_col_score.min((n_col - k) as Int).max(0) as usize;
            if pfree + needed >= arena_len {
                pfree = garbage_collection(n_row, n_col, ws, pfree);
                stats.defrag_count += 1;
                if pfree + needed >= arena_len {
                    let meta = ws.total_len - arena_len;
                    return Err(OrderingError::WorkspaceTooSmall {
                        have: ws.total_len,
                        need: meta + pfree + needed + 1,
                    });
                }
                tag_mark = clear_mark(n_row, ws);
            }

            // gather the element: the union of the pivot column's live
            // rows.  Columns are tagged by negating their thickness; the
            // pivot column is tagged up front so it never joins its own
            // element.
            ws.col.thickness[pivot_col] = -pivot_col_thickness;
            let pivot_row_start = pfree;
            let mut pivot_row_degree: Int = 0;
            let mut pivot_row = EMPTY;

            for idx in pivot_col_start..pivot_col_start + pivot_col_length {
                let r = ws.arena[idx];
                let ru = r as usize;
                if !ws.row_is_alive(ru) {
                    continue;
                }
                if pivot_row == EMPTY {
                    // the element reuses the first live row's index
                    pivot_row = r;
                }
                let rs = ws.row.start[ru] as usize;
                for j in rs..rs + ws.row.length[ru] as usize {
                    let c2 = ws.arena[j];
                    let cu = c2 as usize;
                    let t = ws.col.thickness[cu];
                    if t > 0 && ws.col_is_alive(cu) {
                        ws.col.thickness[cu] = -t;
                        ws.arena[pfree] = c2;
                        pfree += 1;
                        pivot_row_degree += t;
                        if ws.col.set[cu] == s as Int {
                            // active-set columns sit in a degree list
                            let prev = ws.col.prev[cu];
                            let nxt = ws.col.next[cu];
                            if prev == EMPTY {
                                ws.head[ws.col.score[cu] as usize] = nxt;
                            } else {
                                ws.col.next[prev as usize] = nxt;
                            }
                            if nxt != EMPTY {
                                ws.col.prev[nxt as usize] = prev;
                            }
                        }
                    }
                }
            }

            ws.col.thickness[pivot_col] = pivot_col_thickness;
            max_deg = max_deg.max(pivot_row_degree);

            // the gathered rows are absorbed into the element
            for idx in pivot_col_start..pivot_col_start + pivot_col_length {
                let ru = ws.arena[idx] as usize;
                if ws.row_is_alive(ru) {
                    ws.kill_row(ru);
                }
            }
            ws.kill_principal_col(pivot_col);

            if pivot_row_degree == 0 {
                // isolated pivot: no element to create
                pfree = pivot_row_start;
                continue;
            }

            // set differences: refresh each touched row's external
            // degree with respect to the growing element
            for idx in pivot_row_start..pfree {
                let cu = ws.arena[idx] as usize;
                debug_assert!(ws.col_is_alive(cu));
                let ct = -ws.col.thickness[cu];
                debug_assert!(ct > 0);
                ws.col.thickness[cu] = ct; // untag
                let cs = ws.col.start[cu] as usize;
                for j in cs..cs + ws.col.length[cu] as usize {
                    let ru = ws.arena[j] as usize;
                    if !ws.row_is_alive(ru) {
                        continue;
                    }
                    let mark = ws.row.mark[ru];
                    let mut sd = mark - tag_mark;
                    if sd < 0 {
                        // first touch this step
                        sd = ws.row.degree[ru];
                    }
                    sd -= ct;
                    if sd == 0 && aggressive {
                        // the row pattern is a subset of the element
                        ws.kill_row(ru);
                    } else {
                        debug_assert!(sd >= 0);
                        ws.row.mark[ru] = sd + tag_mark;
                    }
                }
            }

            // approximate degrees and supercolumn hashes.  A column with
            // no remaining rows is structurally identical to the element
            // and is ordered on the spot, provided its set is active.
            for idx in pivot_row_start..pfree {
                let cu = ws.arena[idx] as usize;
                debug_assert!(ws.col_is_alive(cu));
                let cs = ws.col.start[cu] as usize;
                let cl = ws.col.length[cu] as usize;
                let mut hash = 0usize;
                let mut cur_score: Int = 0;
                let mut new_len = 0usize;
                for j in cs..cs + cl {
                    let r = ws.arena[j];
                    let ru = r as usize;
                    if !ws.row_is_alive(ru) {
                        continue;
                    }
                    let sd = ws.row.mark[ru] - tag_mark;
                    debug_assert!(sd >= 0);
                    ws.arena[cs + new_len] = r;
                    new_len += 1;
                    hash += ru;
                    cur_score += sd;
                    cur_score = cur_score.min(n_col as Int);
                }
                ws.col.length[cu] = new_len as Int;

                if new_len == 0 && ws.col.set[cu] == s as Int {
                    let t = ws.col.thickness[cu];
                    pivot_row_degree -= t;
                    ws.col.score[cu] = k as Int;
                    k += t as usize;
                    ws.kill_principal_col(cu);
                } else {
                    // stash the external-degree sum; enter the hash
                    // bucket for supercolumn detection
                    ws.col.score[cu] = cur_score;
                    let bucket = hash % (n_col + 1);
                    ws.col.next[cu] = ws.hash_head[bucket];
                    ws.hash_head[bucket] = cu as Int;
                    ws.col.prev[cu] = bucket as Int;
                }
            }

            // marks for this step are spent
            tag_mark += max_deg + 1;
            if tag_mark >= max_mark {
                tag_mark = clear_mark(n_row, ws);
            }

            detect_super_cols(ws, pivot_row_start, pfree);

            // finalize the element: compact it, hand it to each
            // surviving column, and fold its degree into their scores
            let mut new_end = pivot_row_start;
            for idx in pivot_row_start..pfree {
                let c2 = ws.arena[idx];
                let cu = c2 as usize;
                if !ws.col_is_alive(cu) {
                    continue;
                }
                ws.arena[new_end] = c2;
                new_end += 1;

                // at least one of this column's rows died with the
                // pivot, so the freed slot holds the element
                let slot = (ws.col.start[cu] + ws.col.length[cu]) as usize;
                ws.arena[slot] = pivot_row;
                ws.col.length[cu] += 1;

                let score = (ws.col.score[cu] + pivot_row_degree - ws.col.thickness[cu])
                    .min(n_col as Int);
                debug_assert!(score >= 0);
                ws.col.score[cu] = score;

                if ws.col.set[cu] == s as Int {
                    let scoreu = score as usize;
                    let nxt = ws.head[scoreu];
                    ws.col.next[cu] = nxt;
                    ws.col.prev[cu] = EMPTY;
                    if nxt != EMPTY {
                        ws.col.prev[nxt as usize] = cu as Int;
                    }
                    ws.head[scoreu] = cu as Int;
                    min_score = min_score.min(scoreu);
                }
            }

            // resurrect the element as a row
            let el_len = new_end - pivot_row_start;
            if el_len > 0 {
                let ru = pivot_row as usize;
                ws.row.start[ru] = pivot_row_start as Int;
                ws.row.length[ru] = el_len as Int;
                ws.row.degree[ru] = pivot_row_degree;
                ws.row.mark[ru] = 0;
                pfree = new_end;
            } else {
                pfree = pivot_row_start;
            }
        }
        debug_assert_eq!(k, k_end);
    }

    Ok(())
}

/// Merge columns with identical row lists into supercolumns.
///
/// Candidates were bucketed by hash while their scores were refreshed.
/// Two columns merge only if their lengths, scores and constraint sets
/// agree and their compacted row lists compare equal entrywise, so a
/// merge can never move a column out of its set's output block.  The
/// absorbed column becomes non-principal; its `thickness` field now names
/// its parent.
fn detect_super_cols(ws: &mut Workspace, row_start: usize, row_end: usize) {
    fn lists_match(ws: &Workspace, c1: usize, c2: usize, len: usize) -> bool {
        let s1 = ws.col.start[c1] as usize;
        let s2 = ws.col.start[c2] as usize;
        ws.arena[s1..s1 + len] == ws.arena[s2..s2 + len]
    }

    for idx in row_start..row_end {
        let cu = ws.arena[idx] as usize;
        if !ws.col_is_alive(cu) {
            continue;
        }
        let bucket = ws.col.prev[cu] as usize;
        let mut super_c = ws.hash_head[bucket];
        while super_c != EMPTY {
            let sc = super_c as usize;
            let length = ws.col.length[sc];
            let score = ws.col.score[sc];
            let mut prev_c = sc;
            let mut c2 = ws.col.next[sc];
            while c2 != EMPTY {
                let c2u = c2 as usize;
                let nxt = ws.col.next[c2u];
                if ws.col.length[c2u] == length
                    && ws.col.score[c2u] == score
                    && ws.col.set[c2u] == ws.col.set[sc]
                    && lists_match(ws, sc, c2u, length as usize)
                {
                    ws.col.thickness[sc] += ws.col.thickness[c2u];
                    ws.col.thickness[c2u] = sc as Int; // parent
                    ws.kill_nonprincipal_col(c2u);
                    ws.col.score[c2u] = EMPTY; // position assigned later
                    ws.col.next[prev_c] = nxt;
                } else {
                    prev_c = c2u;
                }
                c2 = nxt;
            }
            super_c = ws.col.next[sc];
        }
        ws.hash_head[bucket] = EMPTY;
    }
}

/// Compact the arena, dropping dead rows from column lists and dead
/// columns from row lists.  Returns the new free pointer.
///
/// Column blocks always precede row blocks in the arena, so the columns
/// are compacted front-to-back first.  Live row blocks are then found by
/// a single sweep: each has its first entry replaced by the complemented
/// row index (the original entry is stashed in the row's mark, which the
/// caller resets afterwards).
fn garbage_collection(n_row: usize, n_col: usize, ws: &mut Workspace, pfree: usize) -> usize {
    let mut pdest = 0usize;

    for c in 0..n_col {
        if !ws.col_is_alive(c) {
            continue;
        }
        let psrc = ws.col.start[c] as usize;
        let len = ws.col.length[c] as usize;
        ws.col.start[c] = pdest as Int;
        for j in 0..len {
            let r = ws.arena[psrc + j];
            if ws.row_is_alive(r as usize) {
                ws.arena[pdest] = r;
                pdest += 1;
            }
        }
        ws.col.length[c] = pdest as Int - ws.col.start[c];
    }

    for r in 0..n_row {
        if !ws.row_is_alive(r) {
            continue;
        }
        if ws.row.length[r] == 0 {
            ws.kill_row(r);
            continue;
        }
        let st = ws.row.start[r] as usize;
        ws.row.mark[r] = ws.arena[st];
        ws.arena[st] = !(r as Int);
    }

    let mut psrc = pdest;
    while psrc < pfree {
        let x = ws.arena[psrc];
        psrc += 1;
        if x >= 0 {
            continue;
        }
        let r = (!x) as usize;
        let len = ws.row.length[r] as usize;
        let first = ws.row.mark[r];
        ws.row.start[r] = pdest as Int;
        let mut new_len = 0usize;
        for j in 0..len {
            let cval = if j == 0 { first } else { ws.arena[psrc - 1 + j] };
            if ws.col_is_alive(cval as usize) {
                ws.arena[pdest] = cval;
                pdest += 1;
                new_len += 1;
            }
        }
        ws.row.length[r] = new_len as Int;
        psrc += len - 1;
    }

    pdest
}

/// Reset the marks of all live rows and restart the tag counter.
fn clear_mark(n_row: usize, ws: &mut Workspace) -> Int {
    for r in 0..n_row {
        if ws.row_is_alive(r) {
            ws.row.mark[r] = 0;
        }
    }
    1
}

/// Assign output positions to the non-principal columns and write the
/// permutation.
///
/// A principal column ordered at position `k` with thickness `t` owns the
/// block `k..k + t`; its absorbed descendants fill `k + 1..k + t` in
/// ascending column order.
fn order_children(n_col: usize, ws: &mut Workspace, p: &mut [Int]) {
    for c in 0..n_col {
        if ws.col_is_dead_principal(c) {
            ws.col.length[c] = ws.col.score[c] + 1;
        }
    }

    for c in 0..n_col {
        if !ws.col_is_nonprincipal(c) {
            continue;
        }
        // find the principal root, compressing the path behind us
        let mut root = ws.col.thickness[c] as usize;
        while !ws.col_is_dead_principal(root) {
            root = ws.col.thickness[root] as usize;
        }
        let mut walk = ws.col.thickness[c] as usize;
        ws.col.thickness[c] = root as Int;
        while !ws.col_is_dead_principal(walk) {
            let up = ws.col.thickness[walk] as usize;
            ws.col.thickness[walk] = root as Int;
            walk = up;
        }
        ws.col.score[c] = ws.col.length[root];
        ws.col.length[root] += 1;
    }

    for c in 0..n_col {
        p[ws.col.score[c] as usize] = c as Int;
    }
}
