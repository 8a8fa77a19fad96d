use super::HistogramTableError;
use crate::math::Real;

/// `n` evenly spaced distance thresholds spanning `[t0, t1]`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Thresholds {
    n: usize,
    t0: Real,
    t1: Real,
    width: Real,
}

impl Thresholds {
    /// Creates `n >= 2` thresholds from `t0` to `t1 > t0`.
    pub fn new(n: usize, t0: Real, t1: Real) -> Result<Self, HistogramTableError> {
        if n < 2 {
            return Err(HistogramTableError::TooFewThresholds(n));
        }

        if !(t0.is_finite() && t1.is_finite() && t0 < t1) {
            return Err(HistogramTableError::InvalidRange { t0, t1 });
        }

        Ok(Self {
            n,
            t0,
            t1,
            width: (t1 - t0) / (n - 1) as Real,
        })
    }

    /// The number of thresholds.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: there are at least two thresholds.
    ///
    /// Provided alongside [`Self::len`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first threshold.
    #[inline]
    pub fn t0(&self) -> Real {
        self.t0
    }

    /// The last threshold.
    #[inline]
    pub fn t1(&self) -> Real {
        self.t1
    }

    /// The distance between two consecutive thresholds.
    #[inline]
    pub fn width(&self) -> Real {
        self.width
    }

    /// The `j`-th threshold `t0 + j * width`.
    #[inline]
    pub fn threshold(&self, j: usize) -> Real {
        self.t0 + j as Real * self.width
    }

    /// All the thresholds, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = Real> + '_ {
        (0..self.n).map(|j| self.threshold(j))
    }

    /// The index of the first threshold `t_j >= value` (unclamped, may be
    /// negative or `>= n`).
    #[inline]
    pub fn ceil_bin(&self, value: Real) -> i64 {
        // `as` saturates, and maps NaN to 0.
        ((value - self.t0) / self.width).ceil() as i64
    }

    /// The index of the last threshold `t_j <= value` (unclamped, may be
    /// negative or `>= n`).
    #[inline]
    pub fn floor_bin(&self, value: Real) -> i64 {
        ((value - self.t0) / self.width).floor() as i64
    }
}
