//! Voxel grids: rasterization of point patterns and chamfer distance transform.

pub use self::distance_field::{DistanceField, DistanceTransformError, TransformPass};
pub use self::occupancy_grid::{OccupancyGrid, VoxelOccupancy};
pub use self::voxel_grid::VoxelGrid;
pub use self::voxel_grid_error::VoxelGridError;

pub mod chamfer;
mod distance_field;
mod occupancy_grid;
mod voxel_grid;
mod voxel_grid_error;
