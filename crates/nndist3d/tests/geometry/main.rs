#[macro_use]
extern crate approx;
extern crate nalgebra as na;

use na::Point3;
use nndist3d::bounding_volume::Aabb;
use oorandom::Rand64;

mod chamfer_transform;
mod estimators;
mod scenarios;
mod sphere_aabb_volume;

/// `num_points` points drawn uniformly inside of `aabb`.
pub fn uniform_points(rng: &mut Rand64, aabb: &Aabb, num_points: usize) -> Vec<Point3<f64>> {
    let extents = aabb.extents();

    (0..num_points)
        .map(|_| {
            Point3::new(
                aabb.mins.x + rng.rand_float() * extents.x,
                aabb.mins.y + rng.rand_float() * extents.y,
                aabb.mins.z + rng.rand_float() * extents.z,
            )
        })
        .collect()
}
