//! __ccolamd__ computes a fill-reducing column permutation for a sparse
//! matrix ahead of a sparse LU, QR or Cholesky factorization, optionally
//! subject to column *constraint sets*: caller-defined groups of columns
//! that must remain contiguous, and mutually ordered, in the output
//! permutation.
//!
//! The ordering is produced by a constrained approximate minimum degree
//! algorithm on the column intersection graph.  The engine operates in
//! place over a single caller-supplied integer workspace, suppresses dense
//! rows and columns before ordering, absorbs structurally redundant rows
//! aggressively, and merges columns that become indistinguishable during
//! elimination.
//!
//! # Example
//!
//! ```
//! use ccolamd::algebra::CscPattern;
//! use ccolamd::ordering::{order, OrderingSettings};
//!
//! // the 4 x 4 pattern
//! // [ x  .  .  x ]
//! // [ x  x  .  . ]
//! // [ .  x  x  . ]
//! // [ .  .  x  x ]
//! let pattern = CscPattern::new(
//!     4,                            // m
//!     4,                            // n
//!     vec![0, 2, 4, 6, 8],          // colptr
//!     vec![0, 1, 1, 2, 2, 3, 0, 3], // rowval
//! );
//!
//! let result = order(&pattern, &OrderingSettings::default(), None).unwrap();
//!
//! // a permutation of 0..4
//! let mut sorted = result.perm.clone();
//! sorted.sort();
//! assert_eq!(sorted, vec![0, 1, 2, 3]);
//! ```
//!
//! Constraint sets are passed as an optional slice mapping each column to a
//! set id in `0..n`.  All columns sharing an id appear contiguously in the
//! output, and sets appear in increasing id order:
//!
//! ```
//! use ccolamd::algebra::CscPattern;
//! use ccolamd::ordering::{order, OrderingSettings};
//!
//! let pattern = CscPattern::identity(4);
//! let cmember = vec![1, 1, 0, 0];
//! let result = order(&pattern, &OrderingSettings::default(), Some(&cmember)).unwrap();
//!
//! // columns 2 and 3 (set 0) come before columns 0 and 1 (set 1)
//! assert!(result.perm[..2].iter().all(|&c| c >= 2));
//! ```
//!
//! The input matrix need not be clean: columns containing duplicate or
//! out-of-range row indices are canonicalized rather than rejected, and the
//! offending location is reported in the run statistics.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod ordering;
