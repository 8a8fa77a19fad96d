extern crate nalgebra as na;

use na::Point3;
use nndist3d::bounding_volume::Aabb;
use nndist3d::estimators;
use nndist3d::histogram::{CensoredTable, HistogramTable};
use oorandom::Rand64;
use std::f64::consts::PI;

/// Estimates the empty-space function of a uniform (Poisson) point pattern
/// and compares it with its theoretical value `1 - exp(-λ 4/3 π r³)`.
fn main() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 2.0));
    let num_points = 200;
    let intensity = num_points as f64 / aabb.volume();

    let mut rng = Rand64::new(0xdecaf);
    let extents = aabb.extents();
    let points: Vec<_> = (0..num_points)
        .map(|_| {
            Point3::new(
                aabb.mins.x + rng.rand_float() * extents.x,
                aabb.mins.y + rng.rand_float() * extents.y,
                aabb.mins.z + rng.rand_float() * extents.z,
            )
        })
        .collect();

    let voxel_side = 0.02;
    let mut naive = HistogramTable::new(16, 0.0, 0.15).unwrap();
    let mut minus = HistogramTable::new(16, 0.0, 0.15).unwrap();
    let mut censored = CensoredTable::new(16, 0.0, 0.15).unwrap();

    estimators::naive(&points, &aabb, voxel_side, &mut naive).unwrap();
    estimators::minus_sampling(&points, &aabb, voxel_side, &mut minus).unwrap();
    estimators::censored(&points, &aabb, voxel_side, &mut censored).unwrap();

    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>10}",
        "r", "naive", "minus", "poisson", "censored"
    );

    let ratio = |num: u64, denom: u64| {
        if denom == 0 {
            f64::NAN
        } else {
            num as f64 / denom as f64
        }
    };
    let mut at_risk = censored.total_obs();
    let mut survival = 1.0;

    for (j, r) in naive.thresholds().iter().enumerate() {
        // Kaplan-Meier style product-limit estimate from the censored counts.
        if at_risk > 0 {
            survival *= 1.0 - censored.nco()[j] as f64 / at_risk as f64;
        }
        at_risk = at_risk.saturating_sub(censored.obs()[j]);

        println!(
            "{:>8.3} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            r,
            ratio(naive.num()[j], naive.denom()[j]),
            ratio(minus.num()[j], minus.denom()[j]),
            1.0 - (-intensity * 4.0 / 3.0 * PI * r * r * r).exp(),
            1.0 - survival,
        );
    }
}
