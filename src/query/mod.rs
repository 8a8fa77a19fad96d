//! Geometric queries on the observation window.
//!
//! * [`sphere_aabb_volume()`] computes the volume of the intersection of a
//!   ball with an [`Aabb`](crate::bounding_volume::Aabb).

pub use self::sphere_aabb_volume::sphere_aabb_volume;

mod sphere_aabb_volume;
