use na::{Point3, Vector3};
use nndist3d::bounding_volume::Aabb;
use nndist3d::query::sphere_aabb_volume;
use oorandom::Rand64;
use std::f64::consts::PI;

fn monte_carlo_volume(rng: &mut Rand64, center: &Point3<f64>, aabb: &Aabb, radius: f64) -> f64 {
    const NUM_SAMPLES: usize = 200_000;
    let mut hits = 0;

    for _ in 0..NUM_SAMPLES {
        let offset = Vector3::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        ) * radius;
        let pt = center + offset;

        if offset.norm() <= radius && aabb.contains_local_point(&pt) {
            hits += 1;
        }
    }

    let cube_volume = 8.0 * radius * radius * radius;
    cube_volume * hits as f64 / NUM_SAMPLES as f64
}

#[test]
fn sphere_aabb_volume_matches_monte_carlo() {
    let mut rng = Rand64::new(2024);
    let aabb = Aabb::new(Point3::new(-1.0, 0.0, 0.5), Point3::new(1.0, 1.5, 1.5));
    let cases = [
        (Point3::new(0.0, 0.75, 1.0), 0.3),
        (Point3::new(-0.9, 0.2, 1.4), 0.4),
        (Point3::new(1.2, 0.75, 1.0), 0.5),
        (Point3::new(-1.1, -0.1, 0.3), 0.6),
        (Point3::new(0.5, 1.4, 0.6), 0.8),
        (Point3::new(0.0, 0.75, 1.0), 1.2),
        (Point3::new(2.0, 2.0, 2.0), 1.0),
    ];

    for (center, radius) in cases {
        let exact = sphere_aabb_volume(&center, &aabb, radius);
        let estimate = monte_carlo_volume(&mut rng, &center, &aabb, radius);
        let ball = 4.0 / 3.0 * PI * radius * radius * radius;

        assert!(exact >= 0.0 && exact <= ball.min(aabb.volume()) + 1.0e-9);
        assert!(
            (exact - estimate).abs() <= 0.02 * ball,
            "center {center:?}, radius {radius}: {exact} vs. {estimate}"
        );
    }
}

#[test]
fn sphere_aabb_volume_is_symmetric() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(2.0, 2.0, 2.0));
    let center = Point3::new(0.3, 0.6, 1.9);
    let mirrored = Point3::new(2.0 - 0.3, 2.0 - 0.6, 2.0 - 1.9);
    let swapped = Point3::new(1.9, 0.3, 0.6);

    let volume = sphere_aabb_volume(&center, &aabb, 0.7);
    assert_relative_eq!(volume, sphere_aabb_volume(&mirrored, &aabb, 0.7), epsilon = 1.0e-12);
    assert_relative_eq!(volume, sphere_aabb_volume(&swapped, &aabb, 0.7), epsilon = 1.0e-12);
}

#[test]
fn sphere_aabb_volume_grows_with_the_radius() {
    let aabb = Aabb::unit();
    let center = Point3::new(0.1, 0.8, 0.5);
    let mut previous = 0.0;

    for i in 1..40 {
        let volume = sphere_aabb_volume(&center, &aabb, i as f64 * 0.05);
        assert!(volume + 1.0e-12 >= previous);
        previous = volume;
    }

    assert_relative_eq!(previous, 1.0, epsilon = 1.0e-9);
}
