use na::{Point3, Vector3};
use nndist3d::bounding_volume::Aabb;
use nndist3d::histogram::{self, HistogramTable};
use nndist3d::voxels::{DistanceField, DistanceTransformError, OccupancyGrid, TransformPass};
use std::sync::atomic::AtomicBool;

#[test]
fn single_point_in_the_unit_box() {
    let occupancy =
        OccupancyGrid::rasterize(&[Point3::new(0.5, 0.5, 0.5)], &Aabb::unit(), 0.5).unwrap();

    assert_eq!(occupancy.dims(), Vector3::new(3, 3, 3));
    assert_eq!(occupancy.num_occupied(), 1);
    assert!(occupancy.is_occupied(0, 0, 0));

    let field = DistanceField::chamfer(&occupancy).unwrap();
    assert_eq!(field.value(0, 0, 0), 0);
    assert_eq!(field.value(2, 2, 2), 142);
    assert_relative_eq!(field.distance(2, 2, 2), 142.0 * 0.5 / 41.0);
}

#[test]
fn empty_pattern() {
    let occupancy = OccupancyGrid::rasterize(&[], &Aabb::unit(), 0.5).unwrap();
    let field = DistanceField::chamfer(&occupancy).unwrap();

    assert_eq!(field.infinity(), 369);
    assert!(field.values().iter().all(|v| *v == 369));

    let mut table = HistogramTable::new(5, 0.0, 1.0).unwrap();
    histogram::accumulate_naive(&field, &mut table);
    assert_eq!(table.num(), &[0; 5]);
    assert_eq!(table.denom(), &[27; 5]);
}

#[test]
fn fully_occupied_grid() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 0.5, 0.75));
    let voxel_side = 0.25;
    let dims = OccupancyGrid::grid_dims(&aabb, voxel_side).unwrap();

    // One point per voxel, at the upper corner of each voxel.
    let mut points = vec![];
    for z in 0..dims.z {
        for y in 0..dims.y {
            for x in 0..dims.x {
                points.push(Point3::new(
                    (x as f64 + 0.9) * voxel_side,
                    (y as f64 + 0.9) * voxel_side,
                    (z as f64 + 0.9) * voxel_side,
                ));
            }
        }
    }

    let occupancy = OccupancyGrid::rasterize(&points, &aabb, voxel_side).unwrap();
    assert_eq!(occupancy.num_occupied(), occupancy.len());

    let field = DistanceField::chamfer(&occupancy).unwrap();
    let mut table = HistogramTable::new(6, 0.0, 1.0).unwrap();
    histogram::accumulate_naive(&field, &mut table);

    assert_eq!(table.num(), table.denom());
    assert_eq!(table.denom()[0], (5 * 3 * 4) as u64);
}

#[test]
fn interrupt_before_the_first_slice() {
    let occupancy =
        OccupancyGrid::rasterize(&[Point3::new(0.3, 0.3, 0.3)], &Aabb::unit(), 0.1).unwrap();
    let interrupt = AtomicBool::new(true);

    assert_eq!(
        DistanceField::chamfer_with_interrupt(&occupancy, &interrupt),
        Err(DistanceTransformError::Interrupted {
            pass: TransformPass::Forward,
            slice: 0,
        })
    );

    let interrupt = AtomicBool::new(false);
    assert!(DistanceField::chamfer_with_interrupt(&occupancy, &interrupt).is_ok());
}
