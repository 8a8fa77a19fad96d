//! The three nearest-point distance estimators.
//!
//! Each estimator rasterizes a point pattern, computes the chamfer distance
//! transform of the resulting grid, and accumulates one kind of histogram
//! table:
//! - [`naive`]: no edge correction, see [`accumulate_naive`].
//! - [`minus_sampling`]: border correction, see [`accumulate_minus_sampling`].
//! - [`censored`]: censoring by the border, see [`accumulate_censored`].
//!
//! The voxel grids only live for the duration of one call.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f64")] {
//! use nndist3d::bounding_volume::Aabb;
//! use nndist3d::estimators;
//! use nndist3d::histogram::HistogramTable;
//! use nalgebra::Point3;
//!
//! let points = [Point3::new(0.25, 0.25, 0.25), Point3::new(0.75, 0.6, 0.4)];
//! let mut table = HistogramTable::new(21, 0.0, 0.5).unwrap();
//!
//! estimators::minus_sampling(&points, &Aabb::unit(), 0.05, &mut table).unwrap();
//!
//! for (j, t) in table.thresholds().iter().enumerate() {
//!     assert!(table.num()[j] <= table.denom()[j], "at r = {t}");
//! }
//! # }
//! ```
//!
//! [`accumulate_naive`]: crate::histogram::accumulate_naive
//! [`accumulate_minus_sampling`]: crate::histogram::accumulate_minus_sampling
//! [`accumulate_censored`]: crate::histogram::accumulate_censored

pub use self::estimator_error::EstimatorError;

use crate::bounding_volume::Aabb;
use crate::histogram::{self, CensoredTable, HistogramTable};
use crate::math::{Point, Real};
use crate::utils::{Interrupt, NoInterrupt};
use crate::voxels::{DistanceField, OccupancyGrid};

mod estimator_error;

/// Computes the naive (uncorrected) histogram of nearest-point distances.
///
/// `table` is overwritten. See [`naive_with_interrupt`].
pub fn naive(
    points: &[Point<Real>],
    aabb: &Aabb,
    voxel_side: Real,
    table: &mut HistogramTable,
) -> Result<(), EstimatorError> {
    naive_with_interrupt(points, aabb, voxel_side, table, &NoInterrupt)
}

/// Computes the naive (uncorrected) histogram of nearest-point distances,
/// allowing the distance transform to be aborted.
pub fn naive_with_interrupt(
    points: &[Point<Real>],
    aabb: &Aabb,
    voxel_side: Real,
    table: &mut HistogramTable,
    interrupt: &(impl Interrupt + ?Sized),
) -> Result<(), EstimatorError> {
    let field = distance_field(points, aabb, voxel_side, interrupt)?;
    log::debug!("Accumulating the naive histogram.");
    histogram::accumulate_naive(&field, table);
    Ok(())
}

/// Accumulates the border-corrected ("minus sampling") histogram of
/// nearest-point distances into `table`.
///
/// The counts are added to the current content of `table`.
pub fn minus_sampling(
    points: &[Point<Real>],
    aabb: &Aabb,
    voxel_side: Real,
    table: &mut HistogramTable,
) -> Result<(), EstimatorError> {
    minus_sampling_with_interrupt(points, aabb, voxel_side, table, &NoInterrupt)
}

/// Same as [`minus_sampling`], allowing the distance transform to be aborted.
pub fn minus_sampling_with_interrupt(
    points: &[Point<Real>],
    aabb: &Aabb,
    voxel_side: Real,
    table: &mut HistogramTable,
    interrupt: &(impl Interrupt + ?Sized),
) -> Result<(), EstimatorError> {
    let field = distance_field(points, aabb, voxel_side, interrupt)?;
    log::debug!("Accumulating the minus-sampling histogram.");
    histogram::accumulate_minus_sampling(&field, table);
    Ok(())
}

/// Accumulates the four censoring histograms of nearest-point distances into `table`.
///
/// The counts are added to the current content of `table`.
pub fn censored(
    points: &[Point<Real>],
    aabb: &Aabb,
    voxel_side: Real,
    table: &mut CensoredTable,
) -> Result<(), EstimatorError> {
    censored_with_interrupt(points, aabb, voxel_side, table, &NoInterrupt)
}

/// Same as [`censored`], allowing the distance transform to be aborted.
pub fn censored_with_interrupt(
    points: &[Point<Real>],
    aabb: &Aabb,
    voxel_side: Real,
    table: &mut CensoredTable,
    interrupt: &(impl Interrupt + ?Sized),
) -> Result<(), EstimatorError> {
    let field = distance_field(points, aabb, voxel_side, interrupt)?;
    log::debug!("Accumulating the censored histograms.");
    histogram::accumulate_censored(&field, table);
    Ok(())
}

fn distance_field(
    points: &[Point<Real>],
    aabb: &Aabb,
    voxel_side: Real,
    interrupt: &(impl Interrupt + ?Sized),
) -> Result<DistanceField, EstimatorError> {
    let occupancy = OccupancyGrid::rasterize(points, aabb, voxel_side)?;
    // The occupancy grid is dropped as soon as the field is computed.
    let field = DistanceField::chamfer_with_interrupt(&occupancy, interrupt)?;
    Ok(field)
}
