//! Structural sparse matrix types consumed by the ordering engine.
//!
//! The ordering algorithm is purely symbolic, so matrices are represented
//! by their sparsity pattern alone.

mod csc;
mod error_types;

pub use csc::*;
pub use error_types::*;
