use crate::uniform_points;
use na::Point3;
use nndist3d::bounding_volume::Aabb;
use nndist3d::estimators::{self, EstimatorError};
use nndist3d::histogram::{self, CensoredTable, HistogramTable};
use nndist3d::voxels::{
    DistanceField, DistanceTransformError, OccupancyGrid, TransformPass, VoxelGridError,
};
use oorandom::Rand64;
use std::cell::Cell;
use std::sync::atomic::AtomicBool;

#[test]
fn estimators_run_every_stage() {
    let mut rng = Rand64::new(7);
    let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 0.5));
    let points = uniform_points(&mut rng, &aabb, 30);
    let voxel_side = 0.04;

    let occupancy = OccupancyGrid::rasterize(&points, &aabb, voxel_side).unwrap();
    let field = DistanceField::chamfer(&occupancy).unwrap();

    let mut expected = HistogramTable::new(10, 0.0, 0.3).unwrap();
    let mut table = expected.clone();
    histogram::accumulate_naive(&field, &mut expected);
    estimators::naive(&points, &aabb, voxel_side, &mut table).unwrap();
    assert_eq!(table, expected);

    let mut expected = HistogramTable::new(10, 0.0, 0.3).unwrap();
    let mut table = expected.clone();
    histogram::accumulate_minus_sampling(&field, &mut expected);
    estimators::minus_sampling(&points, &aabb, voxel_side, &mut table).unwrap();
    assert_eq!(table, expected);

    let mut expected = CensoredTable::new(10, 0.0, 0.3).unwrap();
    let mut table = expected.clone();
    histogram::accumulate_censored(&field, &mut expected);
    estimators::censored(&points, &aabb, voxel_side, &mut table).unwrap();
    assert_eq!(table, expected);
}

#[test]
fn estimators_reject_invalid_voxel_sides() {
    let mut table = HistogramTable::new(4, 0.0, 1.0).unwrap();

    assert_eq!(
        estimators::naive(&[], &Aabb::unit(), 0.0, &mut table),
        Err(EstimatorError::Rasterization(
            VoxelGridError::InvalidVoxelSide(0.0)
        ))
    );
    assert!(matches!(
        estimators::minus_sampling(&[], &Aabb::unit(), -0.5, &mut table),
        Err(EstimatorError::Rasterization(
            VoxelGridError::InvalidVoxelSide(_)
        ))
    ));
}

#[test]
fn estimators_can_be_interrupted() {
    let points = [Point3::new(0.5, 0.5, 0.5)];
    let interrupt = AtomicBool::new(true);
    let mut table = CensoredTable::new(4, 0.0, 1.0).unwrap();

    assert_eq!(
        estimators::censored_with_interrupt(&points, &Aabb::unit(), 0.1, &mut table, &interrupt),
        Err(EstimatorError::DistanceTransform(
            DistanceTransformError::Interrupted {
                pass: TransformPass::Forward,
                slice: 0,
            }
        ))
    );

    // Abort as soon as the backward pass starts.
    let polls = Cell::new(0);
    let num_slices = OccupancyGrid::grid_dims(&Aabb::unit(), 0.1).unwrap().z;
    let mut table = HistogramTable::new(4, 0.0, 1.0).unwrap();
    let result = estimators::naive_with_interrupt(
        &points,
        &Aabb::unit(),
        0.1,
        &mut table,
        &|| {
            polls.set(polls.get() + 1);
            polls.get() > num_slices
        },
    );
    assert_eq!(
        result,
        Err(EstimatorError::DistanceTransform(
            DistanceTransformError::Interrupted {
                pass: TransformPass::Backward,
                slice: num_slices - 1,
            }
        ))
    );
}
