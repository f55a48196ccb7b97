use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs controlling the ordering engine.
///
/// The default values are compatibility-bearing constants; construct with
/// [`OrderingSettings::default`] or through [`OrderingSettingsBuilder`] and
/// override individual fields.
///
/// ```
/// use ccolamd::ordering::OrderingSettingsBuilder;
///
/// let settings = OrderingSettingsBuilder::default()
///     .dense_row(20.0)
///     .aggressive(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.dense_col, 10.0);
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderingSettings {
    /// order for an LU factorization of A when true, for a Cholesky
    /// factorization of AᵀA when false.  Affects the size basis of the
    /// dense column threshold.
    #[builder(default = "false")]
    pub for_lu: bool,

    /// rows with more than `max(16, dense_row * sqrt(n_col))` entries are
    /// removed before ordering.  Negative disables dense row removal.
    #[builder(default = "10.0")]
    pub dense_row: f64,

    /// columns with more than `max(16, dense_col * sqrt(b))` entries are
    /// removed before ordering and placed at the end of their constraint
    /// set, where `b = n_col` when ordering for LU and
    /// `b = min(n_row, n_col)` otherwise.  Negative disables dense
    /// column removal.
    #[builder(default = "10.0")]
    pub dense_col: f64,

    /// enable aggressive absorption of rows whose pattern becomes a
    /// subset of the current pivot element
    #[builder(default = "true")]
    pub aggressive: bool,
}

impl Default for OrderingSettings {
    fn default() -> OrderingSettings {
        OrderingSettingsBuilder::default().build().unwrap()
    }
}

impl OrderingSettingsBuilder {
    fn validate(&self) -> Result<(), String> {
        for (name, v) in [("dense_row", self.dense_row), ("dense_col", self.dense_col)] {
            if v.is_some_and(f64::is_nan) {
                return Err(format!("{name} threshold must not be NaN"));
            }
        }
        Ok(())
    }
}
