use super::{HistogramTableError, Thresholds};
use crate::math::Real;

/// Four histograms of nearest-point distances censored by the box boundary.
///
/// This is the table filled by [`accumulate_censored`](super::accumulate_censored).
/// Each voxel contributes one observation (the smaller of its nearest-point
/// distance and its border distance) and one censoring distance (its border
/// distance):
/// - `obs[k]` counts observations in bin `k`, `nco[k]` the uncensored ones.
/// - `cen[k]` counts censoring distances in bin `k`, `ncc[k]` those of
///   uncensored voxels.
/// - `upper_obs` and `upper_cen` count values beyond the last threshold.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CensoredTable {
    thresholds: Thresholds,
    pub(crate) obs: Vec<u64>,
    pub(crate) nco: Vec<u64>,
    pub(crate) cen: Vec<u64>,
    pub(crate) ncc: Vec<u64>,
    pub(crate) upper_obs: u64,
    pub(crate) upper_cen: u64,
}

impl CensoredTable {
    /// Creates a zeroed table with `n` thresholds spanning `[t0, t1]`.
    pub fn new(n: usize, t0: Real, t1: Real) -> Result<Self, HistogramTableError> {
        let thresholds = Thresholds::new(n, t0, t1)?;
        Ok(Self {
            thresholds,
            obs: vec![0; n],
            nco: vec![0; n],
            cen: vec![0; n],
            ncc: vec![0; n],
            upper_obs: 0,
            upper_cen: 0,
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

    /// Observed distances (censored or not) per bin.
    pub fn obs(&self) -> &[u64] {
        &self.obs
    }

    /// Uncensored observed distances per bin.
    pub fn nco(&self) -> &[u64] {
        &self.nco
    }

    /// Censoring (border) distances per bin.
    pub fn cen(&self) -> &[u64] {
        &self.cen
    }

    /// Censoring distances of uncensored observations per bin.
    pub fn ncc(&self) -> &[u64] {
        &self.ncc
    }

    /// Observed distances beyond the last threshold.
    pub fn upper_obs(&self) -> u64 {
        self.upper_obs
    }

    /// Censoring distances beyond the last threshold.
    pub fn upper_cen(&self) -> u64 {
        self.upper_cen
    }

    /// Total number of observations recorded, tail included.
    pub fn total_obs(&self) -> u64 {
        self.upper_obs + self.obs.iter().sum::<u64>()
    }

    /// Total number of censoring distances recorded, tail included.
    pub fn total_cen(&self) -> u64 {
        self.upper_cen + self.cen.iter().sum::<u64>()
    }

    /// Sets all the counts back to zero.
    pub fn reset(&mut self) {
        self.obs.fill(0);
        self.nco.fill(0);
        self.cen.fill(0);
        self.ncc.fill(0);
        self.upper_obs = 0;
        self.upper_cen = 0;
    }
}
