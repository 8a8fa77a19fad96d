use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use arrayvec::ArrayVec;
use na::RealField;

/// The volume of the part of the ball of radius `radius` centered at `center`
/// that lies inside of `aabb`.
///
/// `center` may be inside or outside of the box. Returns zero if `radius` is
/// not positive. `aabb` must be valid (see [`Aabb::is_valid`]).
///
/// The volume outside of the box is obtained by inclusion-exclusion over the
/// half-spaces beyond the 6 faces, their 12 pairwise intersections along the
/// edges and their 8 triple intersections at the corners. Half-spaces beyond
/// opposite faces never intersect.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f64")] {
/// use nndist3d::bounding_volume::Aabb;
/// use nndist3d::query::sphere_aabb_volume;
/// use nalgebra::Point3;
/// use std::f64::consts::PI;
///
/// let aabb = Aabb::new(Point3::origin(), Point3::new(4.0, 4.0, 4.0));
/// // Centered on a face: half of the ball is inside.
/// let half = sphere_aabb_volume(&Point3::new(0.0, 2.0, 2.0), &aabb, 1.0);
/// assert!((half - 2.0 / 3.0 * PI).abs() < 1.0e-12);
/// # }
/// ```
pub fn sphere_aabb_volume(center: &Point<Real>, aabb: &Aabb, radius: Real) -> Real {
    if radius <= 0.0 {
        return 0.0;
    }

    // Offsets from the center to the lower and upper face planes, counted
    // positively when the center is inside of the slab.
    let offsets: [[Real; 2]; DIM] =
        core::array::from_fn(|i| [center[i] - aabb.mins[i], aabb.maxs[i] - center[i]]);

    let mut volume = 0.0;

    // The empty set of axes yields the whole ball.
    for axis_mask in 0u32..(1 << DIM) {
        let axes: ArrayVec<usize, DIM> = (0..DIM).filter(|i| axis_mask & (1 << i) != 0).collect();
        let sign = if axes.len() % 2 == 0 { 1.0 } else { -1.0 };

        for sides in 0u32..(1 << axes.len()) {
            let cut: ArrayVec<Real, DIM> = axes
                .iter()
                .enumerate()
                .map(|(k, i)| offsets[*i][((sides >> k) & 1) as usize])
                .collect();
            volume += sign * ball_beyond_planes(&cut, radius);
        }
    }

    // Rounding can make the alternating sum slightly negative.
    volume.max(0.0)
}

/// The volume of the part of the ball of radius `radius` centered at the
/// origin that satisfies `x_i ≥ offsets[i]` on each of the first
/// `offsets.len()` axes.
fn ball_beyond_planes(offsets: &[Real], radius: Real) -> Real {
    let negatives: ArrayVec<usize, DIM> = (0..offsets.len())
        .filter(|i| offsets[*i] < 0.0)
        .collect();

    if negatives.is_empty() {
        return ball_beyond_nonnegative_planes(offsets, radius);
    }

    // With a < 0, the constraint x ≥ a is the complement of (-x) ≥ -a, so
    // the indicator expands to 1 - [x' ≥ |a|]. Expanding the product over
    // every negative offset leaves only nonnegative terms.
    let mut result = 0.0;

    for subset in 0u32..(1 << negatives.len()) {
        let mut cut = ArrayVec::<Real, DIM>::new();
        let mut num_flipped = 0;

        for (i, a) in offsets.iter().enumerate() {
            match negatives.iter().position(|n| *n == i) {
                None => cut.push(*a),
                Some(k) if subset & (1 << k) != 0 => {
                    cut.push(-*a);
                    num_flipped += 1;
                }
                Some(_) => {}
            }
        }

        let sign = if num_flipped % 2 == 0 { 1.0 } else { -1.0 };
        result += sign * ball_beyond_nonnegative_planes(&cut, radius);
    }

    result
}

fn ball_beyond_nonnegative_planes(offsets: &[Real], radius: Real) -> Real {
    let r3 = radius * radius * radius;

    if offsets.is_empty() {
        return Real::pi() * r3 * 4.0 / 3.0;
    }

    let mut scaled = [0.0; DIM];
    for (s, a) in scaled.iter_mut().zip(offsets) {
        *s = *a / radius;
    }

    // The first `offsets.len()` octant halvings are already part of `unit_cap_orthant`.
    let symmetries = (1 << (DIM - offsets.len())) as Real;
    symmetries * r3 * unit_cap_orthant(scaled[0], scaled[1], scaled[2])
}

/// The volume of `{ x ≥ a, y ≥ b, z ≥ c }` inside of the unit ball, for
/// nonnegative `a`, `b`, `c`.
fn unit_cap_orthant(a: Real, b: Real, c: Real) -> Real {
    if a * a + b * b + c * c >= 1.0 {
        return 0.0;
    }

    Real::pi() / 12.0 * (2.0 - 3.0 * (a + b + c) + (a * a * a + b * b * b + c * c * c))
        + cap_edge_term(a, b)
        + cap_edge_term(b, c)
        + cap_edge_term(a, c)
        - a * b * c
}

fn cap_edge_term(x: Real, y: Real) -> Real {
    let z = (1.0 - x * x - y * y).max(0.0).sqrt();

    (x / 2.0 - x * x * x / 6.0) * y.atan2(z) + (y / 2.0 - y * y * y / 6.0) * x.atan2(z)
        - ((x * y).atan2(z) - x * y * z) / 3.0
}
