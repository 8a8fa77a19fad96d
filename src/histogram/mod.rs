//! Histogram tables of nearest-point distances and the accumulators filling them.
//!
//! All the accumulators share the same binning: a table with `n` thresholds
//! spanning `[t0, t1]` has the thresholds `t_j = t0 + j * width` with
//! `width = (t1 - t0) / (n - 1)`.

pub use self::censored::accumulate_censored;
pub use self::censored_table::CensoredTable;
pub use self::histogram_table::HistogramTable;
pub use self::histogram_table_error::HistogramTableError;
pub use self::minus_sampling::accumulate_minus_sampling;
pub use self::naive::accumulate_naive;
pub use self::thresholds::Thresholds;

mod censored;
mod censored_table;
mod histogram_table;
mod histogram_table_error;
mod minus_sampling;
mod naive;
mod thresholds;
