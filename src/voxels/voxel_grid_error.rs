use crate::math::Real;

/// Errors that can occur while sizing or allocating a voxel grid.
///
/// Allocation failures are reported instead of aborting the process.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum VoxelGridError {
    /// The allocator could not provide a buffer for this many voxels.
    #[error("cannot allocate memory for {voxels} voxels")]
    AllocationFailed {
        /// The number of voxels that was requested.
        voxels: usize,
    },
    /// The number of voxels does not fit into a `usize`.
    #[error("the number of voxels of the grid overflows `usize`")]
    DimensionsOverflow,
    /// The voxel side length is zero, negative, infinite or NaN.
    #[error("the voxel side must be finite and strictly positive, got {0}")]
    InvalidVoxelSide(Real),
    /// The box and the voxel side do not define a grid with at least one voxel along each axis.
    #[error("the box and voxel side do not define a non-empty finite grid")]
    InvalidDimensions,
}
