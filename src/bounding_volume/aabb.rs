//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// This is the observation window of a point pattern: the rectangular box
/// `[mins.x, maxs.x] × [mins.y, maxs.y] × [mins.z, maxs.z]` the points were
/// sampled in.
///
/// # Invariant
///
/// `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`. This is not
/// checked on construction; see [`Aabb::is_valid`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f64")] {
/// use nndist3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 3.0, 4.0));
///
/// assert!(aabb.contains_local_point(&Point3::new(1.0, 1.0, 1.0)));
/// assert_eq!(aabb.center(), Point3::new(1.0, 1.5, 2.0));
/// assert_eq!(aabb.volume(), 24.0);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new `Aabb` from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// The unit cube `[0, 1]³`.
    #[inline]
    pub fn unit() -> Aabb {
        Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0))
    }

    /// Does this `Aabb` have finite bounds with `mins ≤ maxs` on every axis?
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| {
            self.mins[i].is_finite() && self.maxs[i].is_finite() && self.mins[i] <= self.maxs[i]
        })
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents (side lengths) of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this `Aabb`.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Does this `Aabb` contain `point`? Points on the boundary are contained.
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}
