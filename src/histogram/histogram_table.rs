use super::{HistogramTableError, Thresholds};
use crate::math::Real;

/// Cumulative counts of voxels per distance threshold.
///
/// This is the table filled by [`accumulate_naive`](super::accumulate_naive)
/// and [`accumulate_minus_sampling`](super::accumulate_minus_sampling). For
/// each threshold `t_j`, `num[j]` counts the voxels lying within `t_j` of the
/// closest point and `denom[j]` counts the voxels that were eligible at that
/// threshold. The ratio `num[j] / denom[j]` is left to the caller.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramTable {
    thresholds: Thresholds,
    num: Vec<u64>,
    denom: Vec<u64>,
}

impl HistogramTable {
    /// Creates a zeroed table with `n` thresholds spanning `[t0, t1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f64")] {
    /// use nndist3d::histogram::HistogramTable;
    ///
    /// let table = HistogramTable::new(11, 0.0, 1.0).unwrap();
    /// assert_eq!(table.n(), 11);
    /// assert_eq!(table.thresholds().width(), 0.1);
    /// assert!(table.num().iter().all(|c| *c == 0));
    /// assert!(HistogramTable::new(1, 0.0, 1.0).is_err());
    /// # }
    /// ```
    pub fn new(n: usize, t0: Real, t1: Real) -> Result<Self, HistogramTableError> {
        let thresholds = Thresholds::new(n, t0, t1)?;
        Ok(Self {
            thresholds,
            num: vec![0; n],
            denom: vec![0; n],
        })
    }

    /// The thresholds of this table.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// The number of thresholds.
    pub fn n(&self) -> usize {
        self.thresholds.len()
    }

    /// The first threshold.
    pub fn t0(&self) -> Real {
        self.thresholds.t0()
    }

    /// The last threshold.
    pub fn t1(&self) -> Real {
        self.thresholds.t1()
    }

    /// The distance between two consecutive thresholds.
    pub fn interval_width(&self) -> Real {
        self.thresholds.width()
    }

    /// The numerator counts, one per threshold.
    pub fn num(&self) -> &[u64] {
        &self.num
    }

    /// The denominator counts, one per threshold.
    pub fn denom(&self) -> &[u64] {
        &self.denom
    }

    /// Mutable access to both the numerator and denominator counts.
    pub fn counts_mut(&mut self) -> (&mut [u64], &mut [u64]) {
        (&mut self.num, &mut self.denom)
    }

    /// Sets all the counts back to zero.
    pub fn reset(&mut self) {
        self.num.fill(0);
        self.denom.fill(0);
    }
}
